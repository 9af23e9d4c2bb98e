// crates/profile/src/application/ports/click_tracker.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::value_objects::PlatformId;

/// Clic sortant vers un réseau social.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialClick {
    pub profile_id: UserId,
    pub platform: PlatformId,
    pub source: String,
    #[serde(skip)]
    pub clicked_at: DateTime<Utc>,
}

impl SocialClick {
    pub fn new(profile_id: UserId, platform: PlatformId, source: impl Into<String>) -> Self {
        Self {
            profile_id,
            platform,
            source: source.into(),
            clicked_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait ClickTracker: Send + Sync {
    async fn track(&self, click: &SocialClick) -> Result<()>;
}
