//! Authentication endpoints

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::transport::HttpTransport;
use crate::utils::errors::Result;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Registration payload sent to the backend
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: String,
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub degree: String,
    pub profile_bio: String,
}

/// Typed access to the auth endpoints
#[derive(Debug, Clone)]
pub struct AuthApi {
    transport: HttpTransport,
}

impl AuthApi {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = self.transport.request(Method::POST, "/auth/login").json(&body);
        let response: LoginResponse = self.transport.execute(request).await?;
        Ok(response.token)
    }

    pub async fn register(&self, body: &RegisterRequest) -> Result<()> {
        let request = self
            .transport
            .request(Method::POST, "/auth/register")
            .json(body);
        self.transport.execute_empty(request).await
    }
}
