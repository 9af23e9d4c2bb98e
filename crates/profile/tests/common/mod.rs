// crates/profile/tests/common/mod.rs

use std::time::Duration;
use shared_kernel::infrastructure::http::HttpContext;
use wiremock::MockServer;

/// Contexte HTTP pointant vers le serveur simulé.
pub async fn setup_http_context(server: &MockServer) -> HttpContext {
    HttpContext::builder_raw()
        .with_base_url(server.uri())
        .with_request_timeout(Duration::from_secs(2))
        .with_embed_timeout(Duration::from_millis(500))
        .build()
        .expect("FAIL: HTTP context should build against the mock server")
}
