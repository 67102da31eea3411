//! Session comment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserRef;
use crate::utils::errors::{Result, StudyBuddyError};

/// Maximum accepted comment length, enforced client-side before any request
pub const MAX_COMMENT_LENGTH: usize = 500;

/// A comment attached to a study session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    /// None when the authoring account has been deleted
    #[serde(default)]
    pub author: Option<UserRef>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub session: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentContentRequest {
    pub content: String,
}

/// Validate and normalize comment content before it is sent anywhere.
///
/// Empty (after trimming) and over-length content is rejected without a request.
pub fn validate_content(raw: &str) -> Result<String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(StudyBuddyError::InvalidInput(
            "Comment content cannot be empty".to_string(),
        ));
    }

    if trimmed.chars().count() > MAX_COMMENT_LENGTH {
        return Err(StudyBuddyError::InvalidInput(format!(
            "Comment content cannot exceed {} characters",
            MAX_COMMENT_LENGTH
        )));
    }

    Ok(trimmed.to_string())
}
