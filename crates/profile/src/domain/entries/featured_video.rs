// crates/profile/src/domain/entries/featured_video.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_kernel::errors::Result;

use super::lenient;
use super::profile_entry::{optional_url, require_url, ProfileRecordField};
use crate::domain::value_objects::{EmbedPlatform, ProfileFieldName};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturedVideo {
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeaturedVideo {
    /// Plateforme renseignée, sinon déduite du lien.
    pub fn embed_platform(&self) -> Option<EmbedPlatform> {
        self.platform
            .as_deref()
            .and_then(|p| EmbedPlatform::ALL.into_iter().find(|candidate| candidate.slug() == p.trim().to_ascii_lowercase()))
            .or_else(|| EmbedPlatform::detect(&self.url))
    }
}

impl ProfileRecordField for FeaturedVideo {
    const FIELD: ProfileFieldName = ProfileFieldName::FeaturedVideo;

    fn validate(&self) -> Result<()> {
        require_url("url", &self.url)?;
        optional_url("thumbnailUrl", self.thumbnail_url.as_deref())
    }
}
