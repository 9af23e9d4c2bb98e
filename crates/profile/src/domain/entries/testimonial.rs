// crates/profile/src/domain/entries/testimonial.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_kernel::domain::value_objects::EntryId;
use shared_kernel::errors::{DomainError, Result};

use super::lenient;
use super::profile_entry::{optional_url, require, ProfileEntry};
use crate::domain::value_objects::ProfileFieldName;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub id: EntryId,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub content: String,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Testimonial {
    pub const MAX_RATING: u32 = 5;
}

impl ProfileEntry for Testimonial {
    const KIND: &'static str = "testimonial";
    const FIELDS: &'static [ProfileFieldName] = &[ProfileFieldName::Testimonials];

    fn id(&self) -> &EntryId { &self.id }
    fn set_id(&mut self, id: EntryId) { self.id = id; }

    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("content", &self.content)?;
        if let Some(rating) = self.rating {
            if !(1..=Self::MAX_RATING).contains(&rating) {
                return Err(DomainError::Validation {
                    field: "rating",
                    reason: format!("Rating must be between 1 and {}", Self::MAX_RATING),
                });
            }
        }
        optional_url("photoUrl", self.photo_url.as_deref())
    }
}
