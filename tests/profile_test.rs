//! Profile and campus event view integration tests

mod helpers;

use serde_json::json;

use StudyBuddy::models::UpdateProfileRequest;
use StudyBuddy::orchestrator::{CampusEventsOrchestrator, ProfileOrchestrator};

use helpers::test_data::{campus_event, user_profile};
use helpers::TestContext;

fn profile_orchestrator(ctx: &TestContext, user_id: &str) -> ProfileOrchestrator {
    ProfileOrchestrator::new(
        user_id,
        ctx.services.users.clone(),
        ctx.services.sessions.clone(),
        ctx.services.refresh.clone(),
    )
}

#[tokio::test]
async fn profile_update_applies_result_and_publishes_epoch() {
    let ctx = TestContext::authenticated("u1", "user").await;

    let mut updated = user_profile("u1", "kim", "user");
    updated["profileBio"] = json!("Finishing my thesis");
    ctx.mock.mock_json("PUT", "/api/users/u1", 200, updated).await;

    let profile = profile_orchestrator(&ctx, "u1");
    let epoch_before = ctx.services.refresh.epoch();

    let request = UpdateProfileRequest {
        profile_bio: Some("Finishing my thesis".to_string()),
        ..Default::default()
    };
    let user = profile.update_profile(&request).await.unwrap();

    assert_eq!(user.profile_bio, "Finishing my thesis");
    assert_eq!(
        profile.profile_state().loaded().unwrap().profile_bio,
        "Finishing my thesis"
    );
    assert_eq!(ctx.services.refresh.epoch(), epoch_before + 1);
}

#[tokio::test]
async fn profile_pic_upload_refetches_the_profile() {
    let ctx = TestContext::authenticated("u1", "user").await;

    ctx.mock
        .mock_json_expect("PUT", "/api/users/u1/profile-pic", 200, json!({}), 1)
        .await;

    let mut refreshed = user_profile("u1", "kim", "user");
    refreshed["profilePic"] = json!("uploads/u1.png");
    ctx.mock
        .mock_json_expect("GET", "/api/users/u1", 200, refreshed, 1)
        .await;

    let profile = profile_orchestrator(&ctx, "u1");
    profile
        .upload_profile_pic("avatar.png", vec![0x89, 0x50, 0x4e, 0x47])
        .await
        .unwrap();

    assert_eq!(
        profile
            .profile_state()
            .loaded()
            .unwrap()
            .profile_pic
            .as_deref(),
        Some("uploads/u1.png")
    );
}

#[tokio::test]
async fn profile_fetch_error_is_surfaced_per_view() {
    let ctx = TestContext::authenticated("u1", "user").await;

    ctx.mock
        .mock_error("GET", "/api/users/u1", 404, "User not found")
        .await;
    ctx.mock
        .mock_json("GET", "/api/sessions/joined/u1", 200, json!({"data": []}))
        .await;

    let profile = profile_orchestrator(&ctx, "u1");
    profile.load().await;

    // The two sub-views fail independently.
    assert_eq!(profile.profile_state().error_message(), Some("User not found"));
    assert!(profile.joined_state().is_empty());
}

#[tokio::test]
async fn campus_events_load_with_view_state_discipline() {
    let ctx = TestContext::new().await;

    ctx.mock
        .mock_json(
            "GET",
            "/api/qut-events",
            200,
            json!({"data": [campus_event(1, "Careers fair"), campus_event(2, "Welcome week")]}),
        )
        .await;

    let events = CampusEventsOrchestrator::new(ctx.services.campus_events.clone());
    assert!(events.state().is_idle());

    events.load().await;

    let state = events.state();
    let items = state.loaded().expect("events loaded");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Careers fair");
}

#[tokio::test]
async fn campus_events_empty_feed_is_not_an_error() {
    let ctx = TestContext::new().await;

    ctx.mock
        .mock_json("GET", "/api/qut-events", 200, json!({"data": []}))
        .await;

    let events = CampusEventsOrchestrator::new(ctx.services.campus_events.clone());
    events.load().await;

    assert!(events.state().is_empty());
    assert!(!events.state().is_error());
}
