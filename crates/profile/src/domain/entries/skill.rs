// crates/profile/src/domain/entries/skill.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_kernel::domain::value_objects::EntryId;
use shared_kernel::errors::Result;

use super::lenient;
use super::profile_entry::{require, ProfileEntry};
use crate::domain::normalization::has_truthy;
use crate::domain::value_objects::ProfileFieldName;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: EntryId,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProfileEntry for Skill {
    const KIND: &'static str = "skill";
    const FIELDS: &'static [ProfileFieldName] = &[ProfileFieldName::Skills];

    fn is_valid_entry(value: &Value) -> bool {
        has_truthy("name")(value)
    }

    fn id(&self) -> &EntryId { &self.id }
    fn set_id(&mut self, id: EntryId) { self.id = id; }

    fn validate(&self) -> Result<()> {
        require("name", &self.name)
    }
}
