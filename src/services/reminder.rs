//! Session reminder scheduling
//!
//! Push-notification delivery is an external collaborator; this module owns
//! the capability seam and the fire-time rule. Scheduling is best-effort:
//! failures are logged by the caller and never fail the triggering join.

use chrono::{Duration, Local, NaiveDateTime};
use tracing::{debug, info};

use crate::models::Session;
use crate::utils::errors::Result;

/// Reminder scheduling capability, invoked once per successful join
pub trait ReminderScheduler: Send + Sync + std::fmt::Debug {
    fn schedule(&self, session: &Session) -> Result<()>;
}

/// When the reminder for a session should fire: `lead_hours` before start
pub fn reminder_fire_time(session: &Session, lead_hours: i64) -> NaiveDateTime {
    session.date.and_time(session.start_time) - Duration::hours(lead_hours)
}

/// Scheduler that records reminder decisions in the log stream.
///
/// Stands in for the platform notification service; the fire-time rule is
/// the part that matters here.
#[derive(Debug)]
pub struct LogReminderScheduler {
    lead_hours: i64,
}

impl LogReminderScheduler {
    pub fn new(lead_hours: i64) -> Self {
        Self { lead_hours }
    }
}

impl ReminderScheduler for LogReminderScheduler {
    fn schedule(&self, session: &Session) -> Result<()> {
        let fire_at = reminder_fire_time(session, self.lead_hours);
        let now = Local::now().naive_local();

        if fire_at <= now {
            debug!(
                session_id = %session.id,
                fire_at = %fire_at,
                "Reminder time is in the past, skipping schedule"
            );
            return Ok(());
        }

        info!(
            session_id = %session.id,
            title = %session.title,
            fire_at = %fire_at,
            "Session reminder scheduled"
        );
        Ok(())
    }
}

/// No-op scheduler used when the reminders feature is disabled
#[derive(Debug)]
pub struct NullReminderScheduler;

impl ReminderScheduler for NullReminderScheduler {
    fn schedule(&self, _session: &Session) -> Result<()> {
        Ok(())
    }
}
