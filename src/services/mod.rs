//! Services module
//!
//! This module contains business logic services

pub mod membership;
pub mod reminder;

// Re-export commonly used services
pub use membership::{MembershipController, MembershipOutcome};
pub use reminder::{
    reminder_fire_time, LogReminderScheduler, NullReminderScheduler, ReminderScheduler,
};

use std::sync::Arc;

use crate::api::{AuthApi, CampusEventApi, CommentApi, HttpTransport, SessionApi, UserApi};
use crate::auth::{AuthService, TokenStore};
use crate::config::Settings;
use crate::state::RefreshBus;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub sessions: SessionApi,
    pub comments: CommentApi,
    pub users: UserApi,
    pub campus_events: CampusEventApi,
    pub auth: AuthService,
    pub membership: Arc<MembershipController>,
    pub refresh: RefreshBus,
    settings: Settings,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let transport = HttpTransport::new(&settings.api, tokens.clone())?;

        let sessions = SessionApi::new(transport.clone());
        let comments = CommentApi::new(transport.clone());
        let users = UserApi::new(transport.clone());
        let campus_events = CampusEventApi::new(transport.clone());
        let auth = AuthService::new(AuthApi::new(transport), tokens.clone());

        let reminders: Arc<dyn ReminderScheduler> = if settings.features.reminders {
            Arc::new(LogReminderScheduler::new(settings.reminders.lead_hours))
        } else {
            Arc::new(NullReminderScheduler)
        };

        let membership = Arc::new(MembershipController::new(
            sessions.clone(),
            tokens,
            reminders,
        ));

        Ok(Self {
            sessions,
            comments,
            users,
            campus_events,
            auth,
            membership,
            refresh: RefreshBus::new(),
            settings,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
