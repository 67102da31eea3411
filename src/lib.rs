//! StudyBuddy client core
//!
//! Client-side core for the StudyBuddy study-session platform: a typed
//! async client for the backend REST API, the session membership controller,
//! and the per-view fetch/refresh orchestrators, with the refresh-epoch bus
//! that keeps dependent views consistent after mutations.

#![allow(non_snake_case)]

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, StudyBuddyError};

// Re-export main components for easy access
pub use auth::{AuthService, InMemoryTokenStore, TokenStore, UserIdentity};
pub use orchestrator::{
    CampusEventsOrchestrator, ProfileOrchestrator, SessionDetailOrchestrator,
    SessionListOrchestrator,
};
pub use services::{MembershipController, MembershipOutcome, ServiceFactory};
pub use state::{RefreshBus, RefreshListener, ViewState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
