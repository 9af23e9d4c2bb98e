// crates/profile/src/domain/entries/publication.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_kernel::domain::value_objects::EntryId;
use shared_kernel::errors::Result;

use super::lenient;
use super::profile_entry::{optional_url, require, ProfileEntry};
use crate::domain::value_objects::ProfileFieldName;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Publication {
    pub id: EntryId,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub publisher: String,
    #[serde(deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProfileEntry for Publication {
    const KIND: &'static str = "publication";
    const FIELDS: &'static [ProfileFieldName] = &[ProfileFieldName::Publications];

    fn id(&self) -> &EntryId { &self.id }
    fn set_id(&mut self, id: EntryId) { self.id = id; }

    fn validate(&self) -> Result<()> {
        require("title", &self.title)?;
        optional_url("url", self.url.as_deref())
    }
}
