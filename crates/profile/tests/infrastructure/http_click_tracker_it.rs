// crates/profile/tests/infrastructure/http_click_tracker_it.rs

#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use futures::future::join_all;
use serde_json::json;
use shared_kernel::domain::value_objects::UserId;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use profile::application::ports::{ClickTracker, SocialClick};
use profile::application::track_social_click::{TrackSocialClickCommand, TrackSocialClickUseCase};
use profile::domain::value_objects::PlatformId;
use profile::infrastructure::http::{HttpClickTracker, TRACK_SOCIAL_PATH};

#[tokio::test]
async fn test_posts_camel_case_payload() {
    // Arrange
    let server = MockServer::start().await;
    let profile_id = UserId::new();

    Mock::given(method("POST"))
        .and(path(TRACK_SOCIAL_PATH))
        .and(body_json(json!({
            "profileId": profile_id.to_string(),
            "platform": "github",
            "source": "profile_card"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let tracker = HttpClickTracker::new(common::setup_http_context(&server).await);

    // Act
    let result = tracker.track(&SocialClick::new(profile_id, PlatformId::Github, "profile_card")).await;

    // Assert
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_rejected_event_is_an_error_for_the_adapter() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRACK_SOCIAL_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let tracker = HttpClickTracker::new(common::setup_http_context(&server).await);
    let result = tracker.track(&SocialClick::new(UserId::new(), PlatformId::X, "profile_card")).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_use_case_swallows_tracking_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRACK_SOCIAL_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let tracker = Arc::new(HttpClickTracker::new(common::setup_http_context(&server).await));
    let use_case = Arc::new(TrackSocialClickUseCase::new(tracker));

    let handles = ["github", "instagram", "whatsapp", "website"].into_iter().map(|section_type| {
        use_case.dispatch(TrackSocialClickCommand {
            profile_id: UserId::new(),
            section_type: section_type.into(),
            source: "profile_card".into(),
        })
    });

    // Aucun échec ne remonte ; "website" n'est pas suivi
    let results = join_all(handles).await;
    assert!(results.into_iter().all(|r| matches!(r, Ok(false))));
}
