//! Session listing orchestrator
//!
//! Paginated, searchable, sortable session listing with the shared
//! loading/error/empty discipline and the stale-response guard.

use std::sync::Mutex;

use tracing::debug;

use super::{lock, SequenceGuard};
use crate::api::{ListQuery, SessionApi};
use crate::models::{Page, Session, SortOrder};
use crate::state::{RefreshListener, ViewState};
use crate::utils::logging::log_fetch_cycle;

#[derive(Debug)]
pub struct SessionListOrchestrator {
    api: SessionApi,
    state: Mutex<ViewState<Page<Session>>>,
    query: Mutex<ListQuery>,
    seq: SequenceGuard,
}

impl SessionListOrchestrator {
    pub fn new(api: SessionApi, page_size: u32) -> Self {
        Self {
            api,
            state: Mutex::new(ViewState::Idle),
            query: Mutex::new(ListQuery::new(page_size)),
            seq: SequenceGuard::new(),
        }
    }

    /// Snapshot of the view state
    pub fn state(&self) -> ViewState<Page<Session>> {
        lock(&self.state).clone()
    }

    /// Snapshot of the active query
    pub fn query(&self) -> ListQuery {
        lock(&self.query).clone()
    }

    /// Fetch a specific page with the current search and sort
    pub async fn fetch_page(&self, page: u32) {
        lock(&self.query).page = page.max(1);
        self.run_fetch().await;
    }

    /// Change the search text; resets to the first page
    pub async fn set_search(&self, search: impl Into<String>) {
        {
            let mut query = lock(&self.query);
            query.search = search.into();
            query.page = 1;
        }
        self.run_fetch().await;
    }

    /// Change the sort order; resets to the first page
    pub async fn set_sort(&self, sort: SortOrder) {
        {
            let mut query = lock(&self.query);
            query.sort = sort;
            query.page = 1;
        }
        self.run_fetch().await;
    }

    /// Whether the Next control should be enabled
    pub fn can_next(&self) -> bool {
        lock(&self.state)
            .loaded()
            .map(Page::has_next)
            .unwrap_or(false)
    }

    /// Whether the Previous control should be enabled
    pub fn can_prev(&self) -> bool {
        lock(&self.state)
            .loaded()
            .map(Page::has_prev)
            .unwrap_or(false)
    }

    /// Advance one page; no-op at the last page
    pub async fn next_page(&self) {
        if !self.can_next() {
            return;
        }
        let page = lock(&self.query).page + 1;
        self.fetch_page(page).await;
    }

    /// Go back one page; no-op at the first page
    pub async fn prev_page(&self) {
        if !self.can_prev() {
            return;
        }
        let page = lock(&self.query).page.saturating_sub(1).max(1);
        self.fetch_page(page).await;
    }

    /// Pull-to-refresh: refetch the current page
    pub async fn refresh(&self) {
        self.run_fetch().await;
    }

    /// Screen focus regained: refetch unconditionally
    pub async fn on_focus(&self) {
        self.run_fetch().await;
    }

    /// Refetch whenever a new refresh epoch is published.
    ///
    /// Runs until the bus is dropped; drop the future to unsubscribe on
    /// view teardown.
    pub async fn run_refresh(&self, mut listener: RefreshListener) {
        while let Some(epoch) = listener.changed().await {
            debug!(epoch = epoch, "Session list refreshing on epoch");
            self.run_fetch().await;
        }
    }

    async fn run_fetch(&self) {
        let ticket = self.seq.begin();
        *lock(&self.state) = ViewState::Loading;

        let query = self.query();
        let result = self.api.list(&query).await;

        let mut state = lock(&self.state);
        if !self.seq.is_current(ticket) {
            debug!(ticket = ticket, "Discarding stale session list response");
            return;
        }

        match result {
            Ok(page) => {
                // The server's clamped page number becomes the active one.
                lock(&self.query).page = page.current_page;
                log_fetch_cycle(
                    "session_list",
                    if page.is_empty() { "empty" } else { "loaded" },
                    Some(page.items.len()),
                );
                *state = ViewState::from_items(page);
            }
            Err(e) => {
                log_fetch_cycle("session_list", "error", None);
                *state = ViewState::Error(e.user_message());
            }
        }
    }
}
