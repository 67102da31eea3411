//! Registration form validation
//!
//! Per-field validation runs client-side before any request is sent; field
//! errors are keyed so the form layer can mark individual inputs.

use std::sync::OnceLock;

use regex::Regex;

use crate::api::RegisterRequest;
use crate::utils::errors::{Result, StudyBuddyError, ValidationErrors};

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"))
}

/// Raw registration form input
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub user_name: String,
    pub display_name: String,
    pub email: String,
    pub degree: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Validate the form, producing the request payload or per-field errors
    pub fn validate(&self) -> Result<RegisterRequest> {
        let mut errors = ValidationErrors::new();

        if self.user_name.trim().is_empty() {
            errors.add("userName", "Username is required");
        }

        if !email_regex().is_match(self.email.trim()) {
            errors.add("email", "Enter a valid email address");
        }

        if self.degree.trim().is_empty() {
            errors.add("degree", "Degree is required");
        }

        if self.password.is_empty() {
            errors.add("password", "Password is required");
        }

        if self.confirm_password.is_empty() || self.confirm_password != self.password {
            errors.add("confirm", "Passwords do not match");
        }

        if !errors.is_empty() {
            return Err(StudyBuddyError::Validation(errors));
        }

        Ok(RegisterRequest {
            user_name: self.user_name.trim().to_string(),
            display_name: if self.display_name.trim().is_empty() {
                self.user_name.trim().to_string()
            } else {
                self.display_name.trim().to_string()
            },
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            degree: self.degree.trim().to_string(),
            profile_bio: String::new(),
        })
    }
}
