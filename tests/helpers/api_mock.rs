//! Mock StudyBuddy backend for testing
//!
//! A thin wrapper over wiremock that mounts JSON endpoints the way the real
//! backend shapes them.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock StudyBuddy API server
pub struct StudyBuddyMockServer {
    pub server: MockServer,
}

impl StudyBuddyMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Drop all mounted mocks and recorded requests
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    /// Mount a JSON response on an exact method + path
    pub async fn mock_json(&self, http_method: &str, api_path: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(api_path))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a JSON response and assert it is hit exactly `calls` times
    pub async fn mock_json_expect(
        &self,
        http_method: &str,
        api_path: &str,
        status: u16,
        body: Value,
        calls: u64,
    ) {
        Mock::given(method(http_method))
            .and(path(api_path))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    /// Mount the session listing endpoint for a specific query
    pub async fn mock_listing(
        &self,
        params: &[(&str, &str)],
        sessions: Vec<Value>,
        page: u32,
        total_pages: u32,
    ) {
        let mut mock = Mock::given(method("GET")).and(path("/api/sessions"));
        for (key, value) in params {
            mock = mock.and(query_param(*key, *value));
        }

        mock.respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": sessions,
            "page": page,
            "totalPages": total_pages,
        })))
        .mount(&self.server)
        .await;
    }

    /// Same as `mock_listing`, with a response delay for race tests
    pub async fn mock_listing_delayed(
        &self,
        params: &[(&str, &str)],
        sessions: Vec<Value>,
        page: u32,
        total_pages: u32,
        delay_ms: u64,
    ) {
        let mut mock = Mock::given(method("GET")).and(path("/api/sessions"));
        for (key, value) in params {
            mock = mock.and(query_param(*key, *value));
        }

        mock.respond_with(
            ResponseTemplate::new(200)
                .set_delay(std::time::Duration::from_millis(delay_ms))
                .set_body_json(json!({
                    "data": sessions,
                    "page": page,
                    "totalPages": total_pages,
                })),
        )
        .mount(&self.server)
        .await;
    }

    /// Mount the comment listing for a session
    pub async fn mock_comment_list(&self, session_id: &str, comments: Vec<Value>) {
        self.mock_json(
            "GET",
            &format!("/api/sessions/{}/comments", session_id),
            200,
            json!({"data": {"comments": comments}}),
        )
        .await;
    }

    /// Mount an error response carrying a server-supplied message
    pub async fn mock_error(&self, http_method: &str, api_path: &str, status: u16, message: &str) {
        self.mock_json(http_method, api_path, status, json!({"message": message}))
            .await;
    }
}
