//! Session detail orchestrator
//!
//! One session plus its comment thread. Comment mutations perform a single
//! request and then re-fetch the full comment list, keeping the thread
//! consistent with server state at the cost of a redundant read.

use std::sync::{Arc, Mutex};

use tracing::debug;

use super::{lock, SequenceGuard};
use crate::api::{CommentApi, SessionApi};
use crate::models::{comment::validate_content, Comment, Session};
use crate::services::{MembershipController, MembershipOutcome};
use crate::state::{RefreshBus, RefreshListener, ViewState};
use crate::utils::errors::{Result, StudyBuddyError};
use crate::utils::logging::log_fetch_cycle;

#[derive(Debug)]
pub struct SessionDetailOrchestrator {
    session_id: String,
    sessions: SessionApi,
    comments: CommentApi,
    membership: Arc<MembershipController>,
    refresh: RefreshBus,
    session_state: Mutex<ViewState<Session>>,
    comments_state: Mutex<ViewState<Vec<Comment>>>,
    session_seq: SequenceGuard,
    comments_seq: SequenceGuard,
}

impl SessionDetailOrchestrator {
    pub fn new(
        session_id: impl Into<String>,
        sessions: SessionApi,
        comments: CommentApi,
        membership: Arc<MembershipController>,
        refresh: RefreshBus,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            sessions,
            comments,
            membership,
            refresh,
            session_state: Mutex::new(ViewState::Idle),
            comments_state: Mutex::new(ViewState::Idle),
            session_seq: SequenceGuard::new(),
            comments_seq: SequenceGuard::new(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn session_state(&self) -> ViewState<Session> {
        lock(&self.session_state).clone()
    }

    pub fn comments_state(&self) -> ViewState<Vec<Comment>> {
        lock(&self.comments_state).clone()
    }

    /// Fetch the session and its comments together
    pub async fn load(&self) {
        futures::join!(self.fetch_session(), self.fetch_comments());
    }

    pub async fn fetch_session(&self) {
        let ticket = self.session_seq.begin();
        *lock(&self.session_state) = ViewState::Loading;

        let result = self.sessions.get(&self.session_id).await;

        let mut state = lock(&self.session_state);
        if !self.session_seq.is_current(ticket) {
            debug!(ticket = ticket, "Discarding stale session response");
            return;
        }

        match result {
            Ok(session) => {
                log_fetch_cycle("session_detail", "loaded", None);
                *state = ViewState::Loaded(session);
            }
            Err(e) => {
                log_fetch_cycle("session_detail", "error", None);
                *state = ViewState::Error(e.user_message());
            }
        }
    }

    /// Re-fetch the full comment list; never patches incrementally
    pub async fn fetch_comments(&self) {
        let ticket = self.comments_seq.begin();
        *lock(&self.comments_state) = ViewState::Loading;

        let result = self.comments.list(&self.session_id).await;

        let mut state = lock(&self.comments_state);
        if !self.comments_seq.is_current(ticket) {
            debug!(ticket = ticket, "Discarding stale comment list response");
            return;
        }

        match result {
            Ok(comments) => {
                log_fetch_cycle("session_comments", "loaded", Some(comments.len()));
                *state = ViewState::from_items(comments);
            }
            Err(e) => {
                log_fetch_cycle("session_comments", "error", None);
                *state = ViewState::Error(e.user_message());
            }
        }
    }

    /// Post a comment, then re-fetch the thread and signal dependent views.
    ///
    /// Content is validated client-side; nothing is sent for empty or
    /// over-length input.
    pub async fn post_comment(&self, content: &str) -> Result<()> {
        let content = validate_content(content)?;
        self.comments.post(&self.session_id, &content).await?;
        self.fetch_comments().await;
        self.refresh.trigger();
        Ok(())
    }

    pub async fn edit_comment(&self, comment_id: &str, content: &str) -> Result<()> {
        let content = validate_content(content)?;
        self.comments
            .update(&self.session_id, comment_id, &content)
            .await?;
        self.fetch_comments().await;
        Ok(())
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        self.comments.delete(&self.session_id, comment_id).await?;
        self.fetch_comments().await;
        Ok(())
    }

    /// Delete the session itself and invalidate dependent views
    pub async fn delete_session(&self) -> Result<()> {
        self.sessions.delete(&self.session_id).await?;
        self.refresh.trigger();
        Ok(())
    }

    /// Toggle the viewing user's membership, derived from the loaded
    /// participant list, then refetch and signal dependents.
    pub async fn toggle_membership(&self, user_id: &str) -> Result<MembershipOutcome> {
        let currently_member = match lock(&self.session_state).loaded() {
            Some(session) => session.has_participant(user_id),
            None => {
                return Err(StudyBuddyError::InvalidInput(
                    "Session is not loaded".to_string(),
                ))
            }
        };

        let outcome = self
            .membership
            .toggle(&self.session_id, currently_member)
            .await?;

        self.fetch_session().await;
        self.refresh.trigger();
        Ok(outcome)
    }

    /// Screen focus regained: refetch unconditionally
    pub async fn on_focus(&self) {
        self.load().await;
    }

    /// Refetch whenever a new refresh epoch is published
    pub async fn run_refresh(&self, mut listener: RefreshListener) {
        while let Some(epoch) = listener.changed().await {
            debug!(epoch = epoch, session_id = %self.session_id, "Session detail refreshing on epoch");
            self.load().await;
        }
    }
}
