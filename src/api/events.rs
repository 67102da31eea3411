//! Campus event feed endpoint

use reqwest::Method;
use serde::Deserialize;

use super::transport::HttpTransport;
use crate::models::CampusEvent;
use crate::utils::errors::Result;

#[derive(Debug, Clone, Deserialize)]
struct EventsEnvelope {
    data: Vec<CampusEvent>,
}

/// Typed access to the campus event feed
#[derive(Debug, Clone)]
pub struct CampusEventApi {
    transport: HttpTransport,
}

impl CampusEventApi {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// The feed is public; no credential is attached.
    pub async fn list(&self) -> Result<Vec<CampusEvent>> {
        let request = self.transport.request(Method::GET, "/qut-events");
        let envelope: EventsEnvelope = self.transport.execute(request).await?;
        Ok(envelope.data)
    }
}
