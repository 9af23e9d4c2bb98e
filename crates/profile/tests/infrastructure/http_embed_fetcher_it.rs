// crates/profile/tests/infrastructure/http_embed_fetcher_it.rs

#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::time::Duration;
use serde_json::json;
use shared_kernel::errors::DomainError;
use shared_kernel::infrastructure::http::HttpContext;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use profile::application::highlights::{HighlightFeed, HighlightView};
use profile::application::ports::EmbedFetcher;
use profile::domain::entries::HighlightEntry;
use profile::domain::value_objects::EmbedPlatform;
use profile::infrastructure::http::HttpEmbedFetcher;

const VIDEO: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

#[tokio::test]
async fn test_fetch_returns_metadata_with_platform_stats() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/youtube-oembed"))
        .and(query_param("url", VIDEO))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Never Gonna Give You Up",
            "author_name": "Rick Astley",
            "thumbnail_url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg",
            "provider_name": "YouTube",
            "view_count": 1500000000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpEmbedFetcher::new(common::setup_http_context(&server).await);

    // Act
    let metadata = fetcher.fetch(EmbedPlatform::Youtube, VIDEO).await.unwrap().unwrap();

    // Assert
    assert_eq!(metadata.title.as_deref(), Some("Never Gonna Give You Up"));
    assert_eq!(metadata.author_name.as_deref(), Some("Rick Astley"));
    assert_eq!(metadata.stats(), vec![("view_count", 1.5e9)]);
}

#[tokio::test]
async fn test_error_status_and_error_body_yield_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tiktok-oembed"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/x-oembed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "Tweet not found"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/linkedin-oembed"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let fetcher = HttpEmbedFetcher::new(common::setup_http_context(&server).await);

    assert!(fetcher.fetch(EmbedPlatform::Tiktok, "https://tiktok.com/@a/video/1").await.unwrap().is_none());
    assert!(fetcher.fetch(EmbedPlatform::X, "https://x.com/a/status/1").await.unwrap().is_none());
    assert!(fetcher.fetch(EmbedPlatform::Linkedin, "https://linkedin.com/posts/1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_unreachable_proxy_is_infrastructure_error() {
    // Aucun service n'écoute sur ce port : connexion refusée
    let ctx = HttpContext::builder_raw()
        .with_base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let fetcher = HttpEmbedFetcher::new(ctx);
    let result = fetcher.fetch(EmbedPlatform::Github, "https://github.com/a/b").await;

    assert!(matches!(result, Err(DomainError::Infrastructure(_))));
}

#[tokio::test]
async fn test_feed_degrades_slow_entry_to_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/github-oembed"))
        .and(query_param("url", "https://github.com/slow/repo"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)).set_body_json(json!({"title": "late"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/github-oembed"))
        .and(query_param("url", "https://github.com/fast/repo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"title": "fast/repo", "stargazers_count": 42})))
        .mount(&server)
        .await;

    let fetcher = Arc::new(HttpEmbedFetcher::new(common::setup_http_context(&server).await));
    let feed = HighlightFeed::new(EmbedPlatform::Github, fetcher).with_fetch_timeout(Duration::from_millis(200));

    feed.sync(vec![
        HighlightEntry::new("https://github.com/slow/repo"),
        HighlightEntry::new("https://github.com/fast/repo"),
    ]).await;

    assert!(matches!(feed.view(), HighlightView::Fallback { .. }));
    feed.next();
    match feed.view() {
        HighlightView::Rich { metadata, .. } => assert_eq!(metadata.title.as_deref(), Some("fast/repo")),
        other => panic!("FAIL: expected rich card, got {:?}", other),
    }
}
