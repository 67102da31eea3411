//! Campus event model
//!
//! Events come from the campus feed endpoint. The feed is scraped, so most
//! fields are free-form text and optional.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusEvent {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(rename = "where", default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campus_event_deserialization() {
        let json = r#"{
            "id": 7,
            "title": "Careers fair",
            "date": "Wed 16 Jul",
            "startTime": "10:00",
            "where": "Gardens Point",
            "link": "https://example.com/fair"
        }"#;
        let event: CampusEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 7);
        assert_eq!(event.venue.as_deref(), Some("Gardens Point"));
        assert!(event.end_time.is_none());
        assert!(event.image.is_none());
    }
}
