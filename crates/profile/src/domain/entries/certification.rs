// crates/profile/src/domain/entries/certification.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_kernel::domain::value_objects::EntryId;
use shared_kernel::errors::Result;

use super::lenient;
use super::profile_entry::{ensure_chronological, optional_url, require, ProfileEntry};
use crate::domain::value_objects::ProfileFieldName;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: EntryId,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub issuer: String,
    #[serde(deserialize_with = "lenient::string")]
    pub issue_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub expiry_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub credential_id: String,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProfileEntry for Certification {
    const KIND: &'static str = "certification";
    const FIELDS: &'static [ProfileFieldName] = &[ProfileFieldName::Certifications];

    fn id(&self) -> &EntryId { &self.id }
    fn set_id(&mut self, id: EntryId) { self.id = id; }

    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("issuer", &self.issuer)?;
        ensure_chronological(&self.issue_date, &self.expiry_date)?;
        optional_url("credentialUrl", self.credential_url.as_deref())
    }
}
