//! Credential-derived user identity
//!
//! The backend JWT carries the user's id, role, and display name. The claims
//! are decoded here WITHOUT signature verification: the result is a display
//! hint for the UI layer, never an authorization decision — the server
//! re-validates every mutating request.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::models::{Comment, Role};

#[derive(Debug, Clone, Deserialize)]
struct TokenClaims {
    id: String,
    #[serde(default)]
    role: Role,
    #[serde(rename = "displayName", default)]
    display_name: String,
}

/// Identity hint decoded from the stored credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: String,
    pub role: Role,
    pub display_name: String,
}

impl UserIdentity {
    /// UI hint for showing edit/delete controls on a comment.
    ///
    /// The server's own check is authoritative; a stale or forged token only
    /// changes what the UI offers, not what the backend accepts.
    pub fn can_modify_comment(&self, comment: &Comment) -> bool {
        let is_author = comment
            .author
            .as_ref()
            .map(|a| a.id == self.id)
            .unwrap_or(false);

        is_author || self.role.is_moderator_or_admin()
    }
}

/// Decode the identity hint from a token. Undecodable tokens yield `None`.
pub fn identity_from_token(token: &str) -> Option<UserIdentity> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation).ok()?;

    Some(UserIdentity {
        id: data.claims.id,
        role: data.claims.role,
        display_name: data.claims.display_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRef;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    fn make_token(id: &str, role: &str, display_name: &str) -> String {
        let claims = json!({
            "id": id,
            "role": role,
            "displayName": display_name,
        });
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"any-secret"),
        )
        .unwrap()
    }

    fn comment_by(author_id: &str) -> Comment {
        Comment {
            id: "c1".to_string(),
            author: Some(UserRef {
                id: author_id.to_string(),
                user_name: "someone".to_string(),
                display_name: "Someone".to_string(),
                profile_pic: None,
            }),
            content: "hello".to_string(),
            created_at: Utc::now(),
            session: None,
        }
    }

    #[test]
    fn test_identity_decodes_without_verification() {
        let token = make_token("u42", "moderator", "Quinn");
        let identity = identity_from_token(&token).unwrap();
        assert_eq!(identity.id, "u42");
        assert_eq!(identity.role, Role::Moderator);
        assert_eq!(identity.display_name, "Quinn");
    }

    #[test]
    fn test_garbage_token_yields_none() {
        assert!(identity_from_token("not-a-jwt").is_none());
        assert!(identity_from_token("").is_none());
    }

    #[test]
    fn test_comment_permission_hint() {
        let owner = identity_from_token(&make_token("u1", "user", "Kim")).unwrap();
        let moderator = identity_from_token(&make_token("u2", "moderator", "Lee")).unwrap();
        let other = identity_from_token(&make_token("u3", "user", "Ash")).unwrap();

        let comment = comment_by("u1");
        assert!(owner.can_modify_comment(&comment));
        assert!(moderator.can_modify_comment(&comment));
        assert!(!other.can_modify_comment(&comment));
    }

    #[test]
    fn test_deleted_author_only_modifiable_by_moderators() {
        let mut comment = comment_by("u1");
        comment.author = None;

        let user = identity_from_token(&make_token("u1", "user", "Kim")).unwrap();
        let admin = identity_from_token(&make_token("u9", "admin", "Root")).unwrap();
        assert!(!user.can_modify_comment(&comment));
        assert!(admin.can_modify_comment(&comment));
    }
}
