// crates/profile/src/domain/entries/dribbble_profile.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_kernel::errors::Result;

use super::lenient;
use super::profile_entry::{optional_url, require, ProfileRecordField};
use crate::domain::value_objects::ProfileFieldName;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DribbbleProfile {
    #[serde(deserialize_with = "lenient::string")]
    pub username: String,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DribbbleProfile {
    pub fn resolved_url(&self) -> String {
        self.profile_url
            .clone()
            .unwrap_or_else(|| format!("https://dribbble.com/{}", self.username.trim_start_matches('@')))
    }
}

impl ProfileRecordField for DribbbleProfile {
    const FIELD: ProfileFieldName = ProfileFieldName::DribbbleProfile;

    fn validate(&self) -> Result<()> {
        require("username", &self.username)?;
        optional_url("profileUrl", self.profile_url.as_deref())
    }
}
