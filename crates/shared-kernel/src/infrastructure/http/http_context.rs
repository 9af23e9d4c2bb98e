// crates/shared-kernel/src/infrastructure/http/http_context.rs

use std::time::Duration;
use reqwest::Client;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::http::HttpContextBuilder;

/// Client HTTP partagé vers l'application web (proxy oEmbed, analytics).
#[derive(Clone)]
pub struct HttpContext {
    client: Client,
    base_url: String,
    request_timeout: Duration,
    embed_timeout: Duration,
}

impl HttpContext {
    pub fn builder() -> AppResult<HttpContextBuilder> {
        HttpContextBuilder::new()
    }

    pub fn builder_raw() -> HttpContextBuilder {
        HttpContextBuilder::default()
    }

    pub fn client(&self) -> Client {
        self.client.clone()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn embed_timeout(&self) -> Duration {
        self.embed_timeout
    }

    /// Construit une URL absolue à partir d'un chemin d'API ("/api/...").
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub(crate) fn restore(builder: HttpContextBuilder) -> AppResult<Self> {
        url::Url::parse(&builder.base_url).map_err(|e| {
            AppError::new(ErrorCode::InternalError, format!("Invalid API base URL '{}': {}", builder.base_url, e))
        })?;

        let client = Client::builder()
            .timeout(builder.request_timeout)
            .user_agent(builder.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: builder.base_url,
            request_timeout: builder.request_timeout,
            embed_timeout: builder.embed_timeout,
        })
    }
}
