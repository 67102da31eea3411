//! User profile endpoints

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use super::transport::HttpTransport;
use crate::models::{UpdateProfileRequest, User};
use crate::utils::errors::Result;

/// Typed access to the user resource
#[derive(Debug, Clone)]
pub struct UserApi {
    transport: HttpTransport,
}

impl UserApi {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    pub async fn get(&self, user_id: &str) -> Result<User> {
        let request = self
            .transport
            .authorized(Method::GET, &format!("/users/{}", user_id))?;
        self.transport.execute(request).await
    }

    pub async fn update(&self, user_id: &str, body: &UpdateProfileRequest) -> Result<User> {
        let request = self
            .transport
            .authorized(Method::PUT, &format!("/users/{}", user_id))?
            .json(body);
        self.transport.execute(request).await
    }

    /// Upload a profile picture as multipart form data
    pub async fn upload_profile_pic(
        &self,
        user_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<()> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("profilePic", part);

        let request = self
            .transport
            .authorized(Method::PUT, &format!("/users/{}/profile-pic", user_id))?
            .multipart(form);
        self.transport.execute_empty(request).await
    }
}
