//! Error handling for StudyBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use std::collections::BTreeMap;
use thiserror::Error;

/// Main error type for the StudyBuddy client core
#[derive(Error, Debug)]
pub enum StudyBuddyError {
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    #[error("HTTP request error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Operation already in flight")]
    OperationInFlight,

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Field-level validation failures, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.insert(field.into(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for ValidationErrors {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Result type alias for StudyBuddy operations
pub type Result<T> = std::result::Result<T, StudyBuddyError>;

impl StudyBuddyError {
    /// Check if the error is recoverable by retrying later
    pub fn is_recoverable(&self) -> bool {
        match self {
            StudyBuddyError::Unauthenticated => false,
            StudyBuddyError::PermissionDenied(_) => false,
            StudyBuddyError::Validation(_) => false,
            StudyBuddyError::NotFound(_) => false,
            StudyBuddyError::Server { status, .. } => *status >= 500,
            StudyBuddyError::Network(_) => true,
            StudyBuddyError::Serialization(_) => false,
            StudyBuddyError::Config(_) => false,
            StudyBuddyError::InvalidInput(_) => false,
            StudyBuddyError::OperationInFlight => true,
            StudyBuddyError::UrlParse(_) => false,
        }
    }

    /// User-visible message for surfacing in a view
    pub fn user_message(&self) -> String {
        match self {
            StudyBuddyError::Unauthenticated => "Please log in first.".to_string(),
            StudyBuddyError::Network(_) => {
                "Something went wrong while processing your request.".to_string()
            }
            StudyBuddyError::Server { message, .. } => message.clone(),
            StudyBuddyError::NotFound(message) => message.clone(),
            StudyBuddyError::PermissionDenied(message) => message.clone(),
            StudyBuddyError::Validation(_) => "Please fix the errors in the form.".to_string(),
            other => other.to_string(),
        }
    }
}
