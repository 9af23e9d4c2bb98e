// crates/profile/src/domain/entries/gallery_item.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_kernel::domain::value_objects::EntryId;
use shared_kernel::errors::Result;

use super::lenient;
use super::profile_entry::{require_url, ProfileEntry};
use crate::domain::normalization::has_truthy_url;
use crate::domain::value_objects::ProfileFieldName;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryItem {
    pub id: EntryId,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub caption: String,
    /// "image" ou "video"
    #[serde(deserialize_with = "lenient::string")]
    pub media_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProfileEntry for GalleryItem {
    const KIND: &'static str = "gallery";
    const FIELDS: &'static [ProfileFieldName] = &[ProfileFieldName::Gallery];

    fn is_valid_entry(value: &Value) -> bool {
        has_truthy_url(value)
    }

    fn id(&self) -> &EntryId { &self.id }
    fn set_id(&mut self, id: EntryId) { self.id = id; }

    fn validate(&self) -> Result<()> {
        require_url("url", &self.url)
    }
}
