//! Session membership controller
//!
//! Toggles the calling user's participation in one session against the
//! backend and reports exactly one outcome per invocation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use super::reminder::ReminderScheduler;
use crate::api::SessionApi;
use crate::auth::TokenStore;
use crate::models::Session;
use crate::utils::errors::{Result, StudyBuddyError};
use crate::utils::logging::log_membership_action;

/// Outcome of a successful membership toggle
#[derive(Debug, Clone)]
pub struct MembershipOutcome {
    pub now_member: bool,
    pub session: Session,
}

/// Controller for join/leave toggling on study sessions
#[derive(Debug)]
pub struct MembershipController {
    sessions: SessionApi,
    tokens: Arc<dyn TokenStore>,
    reminders: Arc<dyn ReminderScheduler>,
    in_flight: AtomicBool,
}

impl MembershipController {
    pub fn new(
        sessions: SessionApi,
        tokens: Arc<dyn TokenStore>,
        reminders: Arc<dyn ReminderScheduler>,
    ) -> Self {
        Self {
            sessions,
            tokens,
            reminders,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a toggle is currently in flight; callers disable their
    /// triggering control while this is true.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Toggle membership for the calling user on one session.
    ///
    /// Leaves when `currently_member`, joins otherwise. Issues exactly one
    /// mutating request; a missing credential or an in-flight toggle fails
    /// before any network activity. On a successful join (never on leave or
    /// failure) the returned session is handed to the reminder scheduler
    /// once, best-effort.
    pub async fn toggle(
        &self,
        session_id: &str,
        currently_member: bool,
    ) -> Result<MembershipOutcome> {
        if self.tokens.get_token().is_none() {
            return Err(StudyBuddyError::Unauthenticated);
        }

        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(StudyBuddyError::OperationInFlight);
        }

        let result = self.toggle_inner(session_id, currently_member).await;
        self.in_flight.store(false, Ordering::SeqCst);

        let action = if currently_member { "leave" } else { "join" };
        log_membership_action(session_id, None, action, result.is_ok());

        result
    }

    async fn toggle_inner(
        &self,
        session_id: &str,
        currently_member: bool,
    ) -> Result<MembershipOutcome> {
        let action = if currently_member { "leave" } else { "join" };
        debug!(session_id = session_id, action = action, "Toggling session membership");

        let session = if currently_member {
            self.sessions.leave(session_id).await?
        } else {
            self.sessions.join(session_id).await?
        };

        if !currently_member {
            if let Err(e) = self.reminders.schedule(&session) {
                warn!(
                    session_id = session_id,
                    error = %e,
                    "Failed to schedule session reminder"
                );
            }
        }

        Ok(MembershipOutcome {
            now_member: !currently_member,
            session,
        })
    }
}
