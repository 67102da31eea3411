//! Authentication flow integration tests

mod helpers;

use assert_matches::assert_matches;
use serde_json::json;

use StudyBuddy::auth::RegisterForm;
use StudyBuddy::models::Role;
use StudyBuddy::utils::errors::StudyBuddyError;

use helpers::test_data::make_token;
use helpers::TestContext;

fn valid_form() -> RegisterForm {
    RegisterForm {
        user_name: "kim".to_string(),
        display_name: "Kim".to_string(),
        email: "kim@example.com".to_string(),
        degree: "Computer Science".to_string(),
        password: "hunter22".to_string(),
        confirm_password: "hunter22".to_string(),
    }
}

#[tokio::test]
async fn login_stores_token_and_exposes_identity() {
    let ctx = TestContext::new().await;

    ctx.mock
        .mock_json(
            "POST",
            "/api/auth/login",
            200,
            json!({"token": make_token("u1", "moderator", "Kim")}),
        )
        .await;

    assert!(!ctx.services.auth.is_authenticated());

    ctx.services
        .auth
        .login("kim@example.com", "hunter22")
        .await
        .unwrap();

    assert!(ctx.services.auth.is_authenticated());
    let identity = ctx.services.auth.identity().expect("identity decodes");
    assert_eq!(identity.id, "u1");
    assert_eq!(identity.role, Role::Moderator);
    assert_eq!(identity.display_name, "Kim");
}

#[tokio::test]
async fn failed_login_surfaces_server_message_and_stores_nothing() {
    let ctx = TestContext::new().await;

    ctx.mock
        .mock_error("POST", "/api/auth/login", 401, "Invalid credentials")
        .await;

    let result = ctx.services.auth.login("kim@example.com", "wrong").await;
    assert_matches!(result, Err(StudyBuddyError::Unauthenticated));
    assert!(!ctx.services.auth.is_authenticated());
}

#[tokio::test]
async fn register_then_auto_login() {
    let ctx = TestContext::new().await;

    ctx.mock
        .mock_json_expect("POST", "/api/auth/register", 201, json!({}), 1)
        .await;
    ctx.mock
        .mock_json_expect(
            "POST",
            "/api/auth/login",
            200,
            json!({"token": make_token("u1", "user", "Kim")}),
            1,
        )
        .await;

    ctx.services.auth.register(&valid_form()).await.unwrap();
    assert!(ctx.services.auth.is_authenticated());
}

#[tokio::test]
async fn invalid_form_is_rejected_before_any_request() {
    let ctx = TestContext::new().await;

    ctx.mock
        .mock_json_expect("POST", "/api/auth/register", 201, json!({}), 0)
        .await;

    let mut form = valid_form();
    form.email = "not-an-email".to_string();

    let result = ctx.services.auth.register(&form).await;
    assert_matches!(result, Err(StudyBuddyError::Validation(fields)) => {
        assert!(fields.message_for("email").is_some());
    });
}

#[tokio::test]
async fn server_side_field_errors_map_to_validation() {
    let ctx = TestContext::new().await;

    ctx.mock
        .mock_json(
            "POST",
            "/api/auth/register",
            400,
            json!({
                "message": "Validation failed",
                "errors": {"email": "Email already in use"},
            }),
        )
        .await;

    let result = ctx.services.auth.register(&valid_form()).await;
    assert_matches!(result, Err(StudyBuddyError::Validation(fields)) => {
        assert_eq!(fields.message_for("email"), Some("Email already in use"));
    });
}

#[tokio::test]
async fn logout_clears_the_stored_credential() {
    let ctx = TestContext::authenticated("u1", "user").await;
    assert!(ctx.services.auth.is_authenticated());

    ctx.services.auth.logout();
    assert!(!ctx.services.auth.is_authenticated());
    assert!(ctx.services.auth.identity().is_none());
}
