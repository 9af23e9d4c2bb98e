// crates/profile/src/domain/entries/highlight_entry.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_kernel::domain::value_objects::EntryId;
use shared_kernel::errors::Result;

use super::lenient;
use super::profile_entry::{require_url, ProfileEntry};
use crate::domain::normalization::has_truthy_url;
use crate::domain::value_objects::ProfileFieldName;

/// Lien vers un contenu social (vidéo, post, dépôt) affiché avec ses métadonnées oEmbed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightEntry {
    pub id: EntryId,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HighlightEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl ProfileEntry for HighlightEntry {
    const KIND: &'static str = "highlight";
    const FIELDS: &'static [ProfileFieldName] = &[
        ProfileFieldName::GithubHighlights,
        ProfileFieldName::TiktokHighlights,
        ProfileFieldName::YoutubeHighlights,
        ProfileFieldName::XHighlights,
        ProfileFieldName::LinkedinHighlights,
    ];

    fn is_valid_entry(value: &Value) -> bool {
        has_truthy_url(value)
    }

    fn id(&self) -> &EntryId { &self.id }
    fn set_id(&mut self, id: EntryId) { self.id = id; }

    fn validate(&self) -> Result<()> {
        require_url("url", &self.url)
    }
}
