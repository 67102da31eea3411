//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{Result, StudyBuddyError};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_reminder_config(&settings.reminders)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(StudyBuddyError::Config(
            "API base URL is required".to_string(),
        ));
    }

    let url = Url::parse(&config.base_url)
        .map_err(|e| StudyBuddyError::Config(format!("Invalid API base URL: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(StudyBuddyError::Config(
            "API base URL must use http or https".to_string(),
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(StudyBuddyError::Config(
            "API timeout must be greater than 0".to_string(),
        ));
    }

    if config.page_size == 0 || config.page_size > 100 {
        return Err(StudyBuddyError::Config(
            "Page size must be between 1 and 100".to_string(),
        ));
    }

    Ok(())
}

/// Validate reminder configuration
fn validate_reminder_config(config: &super::ReminderConfig) -> Result<()> {
    if config.lead_hours <= 0 {
        return Err(StudyBuddyError::Config(
            "Reminder lead time must be greater than 0 hours".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(StudyBuddyError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(StudyBuddyError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
