// crates/profile/src/domain/registry/section_descriptor.rs

use serde::{Deserialize, Serialize};

/// Section telle que fournie par la configuration de page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDescriptor {
    #[serde(rename = "type")]
    pub section_type: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
}

impl SectionDescriptor {
    pub fn new(section_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            section_type: section_type.into(),
            id: id.into(),
            editor_component: None,
            input_type: None,
        }
    }
}
