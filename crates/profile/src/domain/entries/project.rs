// crates/profile/src/domain/entries/project.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_kernel::domain::value_objects::EntryId;
use shared_kernel::errors::Result;

use super::lenient;
use super::profile_entry::{optional_url, require, ProfileEntry};
use crate::domain::value_objects::ProfileFieldName;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: EntryId,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// URL publique renvoyée par le stockage objet (bucket `project-media`)
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub technologies: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProfileEntry for Project {
    const KIND: &'static str = "project";
    const FIELDS: &'static [ProfileFieldName] = &[ProfileFieldName::Projects];

    fn id(&self) -> &EntryId { &self.id }
    fn set_id(&mut self, id: EntryId) { self.id = id; }

    fn validate(&self) -> Result<()> {
        require("title", &self.title)?;
        optional_url("url", self.url.as_deref())?;
        optional_url("imageUrl", self.image_url.as_deref())
    }
}
