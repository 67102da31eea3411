//! Authentication module
//!
//! Token storage seam, login/registration flows, and the credential-derived
//! identity hint. Secure persistence of the token itself belongs to an
//! external collaborator behind the `TokenStore` trait.

pub mod forms;
pub mod identity;

use std::sync::{Arc, RwLock};

use tracing::{debug, info, warn};

pub use forms::RegisterForm;
pub use identity::{identity_from_token, UserIdentity};

use crate::api::AuthApi;
use crate::utils::errors::Result;

/// Credential storage seam.
///
/// Implementations hand back the raw bearer token; acquisition and secure
/// persistence live outside this crate.
pub trait TokenStore: Send + Sync + std::fmt::Debug {
    fn get_token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear_token(&self);
}

/// Process-local token store for tests and the smoke binary
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set_token(token);
        store
    }
}

impl TokenStore for InMemoryTokenStore {
    fn get_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_token(&self, token: &str) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token.to_string());
    }

    fn clear_token(&self) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}

/// Login, registration, and identity flows
#[derive(Debug, Clone)]
pub struct AuthService {
    api: AuthApi,
    tokens: Arc<dyn TokenStore>,
}

impl AuthService {
    pub fn new(api: AuthApi, tokens: Arc<dyn TokenStore>) -> Self {
        Self { api, tokens }
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.get_token().is_some()
    }

    /// Identity hint decoded from the stored token; display purposes only
    pub fn identity(&self) -> Option<UserIdentity> {
        let token = self.tokens.get_token()?;
        let identity = identity_from_token(&token);
        if identity.is_none() {
            warn!("Stored token could not be decoded");
        }
        identity
    }

    /// Log in and store the returned credential
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let token = self.api.login(email, password).await?;
        self.tokens.set_token(&token);
        info!("Login succeeded");
        Ok(())
    }

    /// Validate the form, register, then log straight in
    pub async fn register(&self, form: &RegisterForm) -> Result<()> {
        let request = form.validate()?;

        self.api.register(&request).await?;
        debug!(user_name = %request.user_name, "Registration accepted, logging in");

        self.login(&request.email, &form.password).await
    }

    pub fn logout(&self) {
        self.tokens.clear_token();
        info!("Logged out");
    }
}
