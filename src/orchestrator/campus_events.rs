//! Campus event feed orchestrator

use std::sync::Mutex;

use tracing::debug;

use super::{lock, SequenceGuard};
use crate::api::CampusEventApi;
use crate::models::CampusEvent;
use crate::state::ViewState;
use crate::utils::logging::log_fetch_cycle;

#[derive(Debug)]
pub struct CampusEventsOrchestrator {
    api: CampusEventApi,
    state: Mutex<ViewState<Vec<CampusEvent>>>,
    seq: SequenceGuard,
}

impl CampusEventsOrchestrator {
    pub fn new(api: CampusEventApi) -> Self {
        Self {
            api,
            state: Mutex::new(ViewState::Idle),
            seq: SequenceGuard::new(),
        }
    }

    pub fn state(&self) -> ViewState<Vec<CampusEvent>> {
        lock(&self.state).clone()
    }

    pub async fn load(&self) {
        let ticket = self.seq.begin();
        *lock(&self.state) = ViewState::Loading;

        let result = self.api.list().await;

        let mut state = lock(&self.state);
        if !self.seq.is_current(ticket) {
            debug!(ticket = ticket, "Discarding stale campus event response");
            return;
        }

        match result {
            Ok(events) => {
                log_fetch_cycle("campus_events", "loaded", Some(events.len()));
                *state = ViewState::from_items(events);
            }
            Err(e) => {
                log_fetch_cycle("campus_events", "error", None);
                *state = ViewState::Error(e.user_message());
            }
        }
    }
}
