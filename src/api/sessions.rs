//! Study session endpoints

use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

use super::transport::HttpTransport;
use crate::models::{CreateSessionRequest, Page, Session, SortOrder, UpdateSessionRequest};
use crate::utils::errors::Result;

/// Query parameters for the session listing endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub sort: SortOrder,
}

impl ListQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            search: String::new(),
            sort: SortOrder::Asc,
        }
    }
}

/// Listing envelope returned by `GET /api/sessions`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionListResponse {
    data: Vec<Session>,
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_page")]
    total_pages: u32,
}

fn default_page() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
struct SessionsEnvelope {
    data: Vec<Session>,
}

/// Typed access to the session resource
#[derive(Debug, Clone)]
pub struct SessionApi {
    transport: HttpTransport,
}

impl SessionApi {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Fetch one page of sessions matching the query.
    ///
    /// The search text filters title/description/course code server-side,
    /// case-insensitively; results are ordered by session date.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<Session>> {
        let path = format!(
            "/sessions?page={}&limit={}&search={}&sort={}",
            query.page,
            query.page_size,
            urlencoding::encode(&query.search),
            query.sort.as_str(),
        );

        debug!(page = query.page, search = %query.search, sort = query.sort.as_str(), "Listing sessions");

        let request = self.transport.request(Method::GET, &path);
        let response: SessionListResponse = self.transport.execute(request).await?;

        Ok(Page::from_response(
            response.data,
            response.page,
            response.total_pages,
        ))
    }

    pub async fn get(&self, session_id: &str) -> Result<Session> {
        let request = self
            .transport
            .authorized(Method::GET, &format!("/sessions/{}", session_id))?;
        self.transport.execute(request).await
    }

    pub async fn create(&self, body: &CreateSessionRequest) -> Result<Session> {
        let request = self
            .transport
            .authorized(Method::POST, "/sessions")?
            .json(body);
        self.transport.execute(request).await
    }

    pub async fn update(&self, session_id: &str, body: &UpdateSessionRequest) -> Result<Session> {
        let request = self
            .transport
            .authorized(Method::PUT, &format!("/sessions/{}", session_id))?
            .json(body);
        self.transport.execute(request).await
    }

    pub async fn delete(&self, session_id: &str) -> Result<()> {
        let request = self
            .transport
            .authorized(Method::DELETE, &format!("/sessions/{}", session_id))?;
        self.transport.execute_empty(request).await
    }

    /// Join the calling user to a session, returning the updated session
    pub async fn join(&self, session_id: &str) -> Result<Session> {
        let request = self
            .transport
            .authorized(Method::POST, &format!("/sessions/{}/join", session_id))?;
        self.transport.execute(request).await
    }

    /// Remove the calling user from a session, returning the updated session
    pub async fn leave(&self, session_id: &str) -> Result<Session> {
        let request = self
            .transport
            .authorized(Method::POST, &format!("/sessions/{}/leave", session_id))?;
        self.transport.execute(request).await
    }

    /// Sessions the given user has joined
    pub async fn joined_by(&self, user_id: &str) -> Result<Vec<Session>> {
        let request = self
            .transport
            .authorized(Method::GET, &format!("/sessions/joined/{}", user_id))?;
        let envelope: SessionsEnvelope = self.transport.execute(request).await?;
        Ok(envelope.data)
    }
}
