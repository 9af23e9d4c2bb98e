// crates/shared-kernel/src/infrastructure/http/http_context_builder.rs

use std::time::Duration;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::http::HttpContext;

pub struct HttpContextBuilder {
    pub(crate) base_url: String,
    pub(crate) request_timeout: Duration,
    pub(crate) embed_timeout: Duration,
    pub(crate) user_agent: String,
}

impl Default for HttpContextBuilder {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            request_timeout: Duration::from_secs(15),
            embed_timeout: Duration::from_secs(10),
            user_agent: concat!("profile-card/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpContextBuilder {
    pub fn new() -> AppResult<Self> {
        let mut builder = Self::default();

        builder.base_url = std::env::var("PROFILE_CARD_API_URL")
            .map_err(|_| AppError::new(ErrorCode::InternalError, "PROFILE_CARD_API_URL must be set"))?;

        if let Some(ms) = std::env::var("PROFILE_CARD_HTTP_TIMEOUT_MS")
            .ok().and_then(|v| v.parse::<u64>().ok()) {
            builder.request_timeout = Duration::from_millis(ms);
        }

        if let Some(ms) = std::env::var("PROFILE_CARD_EMBED_TIMEOUT_MS")
            .ok().and_then(|v| v.parse::<u64>().ok()) {
            builder.embed_timeout = Duration::from_millis(ms);
        }

        if let Ok(agent) = std::env::var("PROFILE_CARD_USER_AGENT") {
            if !agent.trim().is_empty() {
                builder.user_agent = agent;
            }
        }

        Ok(builder)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = duration;
        self
    }

    pub fn with_embed_timeout(mut self, duration: Duration) -> Self {
        self.embed_timeout = duration;
        self
    }

    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn build(self) -> AppResult<HttpContext> {
        HttpContext::restore(self)
    }
}
