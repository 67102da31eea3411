//! Backend API module
//!
//! Typed, per-resource access to the StudyBuddy REST backend over a shared
//! HTTP transport.

pub mod auth;
pub mod comments;
pub mod events;
pub mod sessions;
pub mod transport;
pub mod users;

// Re-export commonly used types
pub use auth::{AuthApi, LoginRequest, LoginResponse, RegisterRequest};
pub use comments::CommentApi;
pub use events::CampusEventApi;
pub use sessions::{ListQuery, SessionApi};
pub use transport::{HttpTransport, GENERIC_ERROR_MESSAGE};
pub use users::UserApi;
