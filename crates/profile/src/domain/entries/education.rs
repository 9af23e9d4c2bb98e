// crates/profile/src/domain/entries/education.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_kernel::domain::value_objects::EntryId;
use shared_kernel::errors::Result;

use super::lenient;
use super::profile_entry::{ensure_chronological, require, ProfileEntry};
use crate::domain::value_objects::ProfileFieldName;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: EntryId,
    #[serde(deserialize_with = "lenient::string")]
    pub school: String,
    #[serde(deserialize_with = "lenient::string")]
    pub degree: String,
    #[serde(deserialize_with = "lenient::string")]
    pub field_of_study: String,
    #[serde(deserialize_with = "lenient::string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::boolean")]
    pub current: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProfileEntry for Education {
    const KIND: &'static str = "education";
    const FIELDS: &'static [ProfileFieldName] = &[ProfileFieldName::Education];

    fn id(&self) -> &EntryId { &self.id }
    fn set_id(&mut self, id: EntryId) { self.id = id; }

    fn validate(&self) -> Result<()> {
        require("school", &self.school)?;
        require("degree", &self.degree)?;
        if !self.current {
            ensure_chronological(&self.start_date, &self.end_date)?;
        }
        Ok(())
    }
}
