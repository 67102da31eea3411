//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the StudyBuddy client core.

use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "studybuddy.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log membership actions with structured data
pub fn log_membership_action(session_id: &str, user_id: Option<&str>, action: &str, success: bool) {
    if success {
        info!(
            session_id = session_id,
            user_id = user_id,
            action = action,
            "Membership action completed"
        );
    } else {
        warn!(
            session_id = session_id,
            user_id = user_id,
            action = action,
            "Membership action failed"
        );
    }
}

/// Log a fetch cycle outcome for a view
pub fn log_fetch_cycle(view: &str, outcome: &str, item_count: Option<usize>) {
    debug!(
        view = view,
        outcome = outcome,
        item_count = item_count,
        "Fetch cycle completed"
    );
}

/// Log API errors with context
pub fn log_api_error(endpoint: &str, error: &str, context: Option<&str>) {
    tracing::error!(
        endpoint = endpoint,
        error = error,
        context = context,
        "API error occurred"
    );
}
