//! Session comment endpoints

use reqwest::Method;
use serde::Deserialize;

use super::transport::HttpTransport;
use crate::models::{Comment, CommentContentRequest};
use crate::utils::errors::Result;

/// Envelope returned by `GET /api/sessions/{id}/comments`
#[derive(Debug, Clone, Deserialize)]
struct CommentListResponse {
    data: CommentsEnvelope,
}

#[derive(Debug, Clone, Deserialize)]
struct CommentsEnvelope {
    comments: Vec<Comment>,
}

/// Typed access to the comment sub-resource of a session
#[derive(Debug, Clone)]
pub struct CommentApi {
    transport: HttpTransport,
}

impl CommentApi {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    pub async fn list(&self, session_id: &str) -> Result<Vec<Comment>> {
        let request = self
            .transport
            .authorized(Method::GET, &format!("/sessions/{}/comments", session_id))?;
        let response: CommentListResponse = self.transport.execute(request).await?;
        Ok(response.data.comments)
    }

    /// Post a comment. Content must already be validated.
    pub async fn post(&self, session_id: &str, content: &str) -> Result<()> {
        let body = CommentContentRequest {
            content: content.to_string(),
        };
        let request = self
            .transport
            .authorized(Method::POST, &format!("/sessions/{}/comments", session_id))?
            .json(&body);
        self.transport.execute_empty(request).await
    }

    pub async fn update(&self, session_id: &str, comment_id: &str, content: &str) -> Result<()> {
        let body = CommentContentRequest {
            content: content.to_string(),
        };
        let request = self.transport.authorized(
            Method::PUT,
            &format!("/sessions/{}/comments/{}", session_id, comment_id),
        )?;
        self.transport.execute_empty(request.json(&body)).await
    }

    /// Delete a comment. The response body may be empty.
    pub async fn delete(&self, session_id: &str, comment_id: &str) -> Result<()> {
        let request = self.transport.authorized(
            Method::DELETE,
            &format!("/sessions/{}/comments/{}", session_id, comment_id),
        )?;
        self.transport.execute_empty(request).await
    }
}
