// crates/profile/src/infrastructure/http/http_click_tracker.rs

use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::http::{HttpContext, ReqwestErrorExt};

use crate::application::ports::{ClickTracker, SocialClick};

pub const TRACK_SOCIAL_PATH: &str = "/api/analytics/track-social";

pub struct HttpClickTracker {
    ctx: HttpContext,
}

impl HttpClickTracker {
    pub fn new(ctx: HttpContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ClickTracker for HttpClickTracker {
    async fn track(&self, click: &SocialClick) -> Result<()> {
        let response = self.ctx.client()
            .post(self.ctx.endpoint(TRACK_SOCIAL_PATH))
            .json(click)
            .send()
            .await
            .map_domain_infra("analytics")?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Infrastructure(format!(
                "analytics: tracking rejected with status {}",
                status.as_u16()
            )));
        }

        Ok(())
    }
}
