//! Profile orchestrator
//!
//! A user's profile plus the sessions they have joined. Re-fetches on focus
//! regain and on refresh epochs, so membership changes made elsewhere show
//! up on the next visit.

use std::sync::Mutex;

use tracing::debug;

use super::{lock, SequenceGuard};
use crate::api::{SessionApi, UserApi};
use crate::models::{Session, UpdateProfileRequest, User};
use crate::state::{RefreshBus, RefreshListener, ViewState};
use crate::utils::errors::Result;
use crate::utils::logging::log_fetch_cycle;

#[derive(Debug)]
pub struct ProfileOrchestrator {
    user_id: String,
    users: UserApi,
    sessions: SessionApi,
    refresh: RefreshBus,
    profile_state: Mutex<ViewState<User>>,
    joined_state: Mutex<ViewState<Vec<Session>>>,
    profile_seq: SequenceGuard,
    joined_seq: SequenceGuard,
}

impl ProfileOrchestrator {
    pub fn new(
        user_id: impl Into<String>,
        users: UserApi,
        sessions: SessionApi,
        refresh: RefreshBus,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            users,
            sessions,
            refresh,
            profile_state: Mutex::new(ViewState::Idle),
            joined_state: Mutex::new(ViewState::Idle),
            profile_seq: SequenceGuard::new(),
            joined_seq: SequenceGuard::new(),
        }
    }

    pub fn profile_state(&self) -> ViewState<User> {
        lock(&self.profile_state).clone()
    }

    pub fn joined_state(&self) -> ViewState<Vec<Session>> {
        lock(&self.joined_state).clone()
    }

    /// Fetch the profile and the joined-session list together
    pub async fn load(&self) {
        futures::join!(self.fetch_profile(), self.fetch_joined_sessions());
    }

    pub async fn fetch_profile(&self) {
        let ticket = self.profile_seq.begin();
        *lock(&self.profile_state) = ViewState::Loading;

        let result = self.users.get(&self.user_id).await;

        let mut state = lock(&self.profile_state);
        if !self.profile_seq.is_current(ticket) {
            debug!(ticket = ticket, "Discarding stale profile response");
            return;
        }

        match result {
            Ok(user) => {
                log_fetch_cycle("profile", "loaded", None);
                *state = ViewState::Loaded(user);
            }
            Err(e) => {
                log_fetch_cycle("profile", "error", None);
                *state = ViewState::Error(e.user_message());
            }
        }
    }

    pub async fn fetch_joined_sessions(&self) {
        let ticket = self.joined_seq.begin();
        *lock(&self.joined_state) = ViewState::Loading;

        let result = self.sessions.joined_by(&self.user_id).await;

        let mut state = lock(&self.joined_state);
        if !self.joined_seq.is_current(ticket) {
            debug!(ticket = ticket, "Discarding stale joined-session response");
            return;
        }

        match result {
            Ok(sessions) => {
                log_fetch_cycle("joined_sessions", "loaded", Some(sessions.len()));
                *state = ViewState::from_items(sessions);
            }
            Err(e) => {
                log_fetch_cycle("joined_sessions", "error", None);
                *state = ViewState::Error(e.user_message());
            }
        }
    }

    /// Update the profile and invalidate dependent views
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User> {
        let user = self.users.update(&self.user_id, request).await?;
        *lock(&self.profile_state) = ViewState::Loaded(user.clone());
        self.refresh.trigger();
        Ok(user)
    }

    /// Upload a new profile picture, then refetch the profile
    pub async fn upload_profile_pic(&self, file_name: &str, bytes: Vec<u8>) -> Result<()> {
        self.users
            .upload_profile_pic(&self.user_id, file_name, bytes)
            .await?;
        self.fetch_profile().await;
        self.refresh.trigger();
        Ok(())
    }

    /// Screen focus regained: refetch unconditionally
    pub async fn on_focus(&self) {
        self.load().await;
    }

    /// Refetch whenever a new refresh epoch is published
    pub async fn run_refresh(&self, mut listener: RefreshListener) {
        while let Some(epoch) = listener.changed().await {
            debug!(epoch = epoch, user_id = %self.user_id, "Profile refreshing on epoch");
            self.load().await;
        }
    }
}
