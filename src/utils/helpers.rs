//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::NaiveDate;

use crate::models::Session;

/// Format a session date for display, e.g. "Sat, 5 Jul 2025"
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%a, %-d %b %Y").to_string()
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Render the plain-text share summary for a session
pub fn render_share_text(session: &Session, web_base_url: &str) -> String {
    let creator = match &session.created_by {
        Some(user) => format!("{} (@{})", user.display_name, user.user_name),
        None => "Unknown".to_string(),
    };

    format!(
        "Study Session Details\n\n\
         {title}\n\
         {course}\n\
         {date}\n\
         {start} - {end}\n\
         {location}\n\
         Created by: {creator}\n\
         Participants: {count}\n\n\
         Join this study session in the StudyBuddy app or view it on the web:\n\
         {web}/session/{id}",
        title = session.title,
        course = session.course_code,
        date = format_display_date(session.date),
        start = session.start_time.format("%H:%M"),
        end = session.end_time.format("%H:%M"),
        location = session.location,
        creator = creator,
        count = session.participants.len(),
        web = web_base_url.trim_end_matches('/'),
        id = session.id,
    )
}
