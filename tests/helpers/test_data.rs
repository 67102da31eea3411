//! Canned backend fixtures

use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};

/// Sign a backend-shaped JWT for a test user.
///
/// The client never verifies the signature, so any secret works.
pub fn make_token(user_id: &str, role: &str, display_name: &str) -> String {
    let claims = json!({
        "id": user_id,
        "role": role,
        "displayName": display_name,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .expect("token encoding")
}

/// Embedded user reference as the backend populates it
pub fn user_ref(user_id: &str, user_name: &str) -> Value {
    json!({
        "_id": user_id,
        "userName": user_name,
        "displayName": capitalize(user_name),
    })
}

/// A session document with the given participants
pub fn session(session_id: &str, title: &str, date: &str, participants: Vec<Value>) -> Value {
    json!({
        "_id": session_id,
        "title": title,
        "description": format!("{} practice", title),
        "courseCode": "CAB301",
        "date": date,
        "startTime": "14:00",
        "endTime": "16:00",
        "location": "Library level 3",
        "createdBy": user_ref("creator", "creator"),
        "participants": participants,
    })
}

/// A comment document by the given author
pub fn comment(comment_id: &str, author_id: &str, content: &str) -> Value {
    json!({
        "_id": comment_id,
        "author": user_ref(author_id, author_id),
        "content": content,
        "createdAt": "2025-07-01T10:00:00Z",
    })
}

/// A full user profile document
pub fn user_profile(user_id: &str, user_name: &str, role: &str) -> Value {
    json!({
        "_id": user_id,
        "userName": user_name,
        "displayName": capitalize(user_name),
        "degree": "Computer Science",
        "profileBio": "",
        "role": role,
    })
}

/// A campus feed event
pub fn campus_event(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "date": "Wed 16 Jul",
        "where": "Gardens Point",
    })
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
