// crates/profile/src/domain/entries/experience.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_kernel::domain::value_objects::EntryId;
use shared_kernel::errors::Result;

use super::lenient;
use super::profile_entry::{ensure_chronological, require, ProfileEntry};
use crate::domain::value_objects::ProfileFieldName;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: EntryId,
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    /// Type de contrat (full-time, freelance, ...)
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub employment_type: String,
    #[serde(deserialize_with = "lenient::string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::boolean")]
    pub current: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    /// Clés stockées non modélisées, réécrites telles quelles
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProfileEntry for Experience {
    const KIND: &'static str = "experience";
    const FIELDS: &'static [ProfileFieldName] = &[ProfileFieldName::Experience];

    fn id(&self) -> &EntryId { &self.id }
    fn set_id(&mut self, id: EntryId) { self.id = id; }

    fn validate(&self) -> Result<()> {
        require("company", &self.company)?;
        require("title", &self.title)?;
        if !self.current {
            ensure_chronological(&self.start_date, &self.end_date)?;
        }
        Ok(())
    }
}
