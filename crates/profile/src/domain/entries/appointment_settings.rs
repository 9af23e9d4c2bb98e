// crates/profile/src/domain/entries/appointment_settings.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_kernel::errors::{DomainError, Result};

use super::lenient;
use super::profile_entry::{optional_url, ProfileRecordField};
use crate::domain::value_objects::ProfileFieldName;

/// Configuration de prise de rendez-vous affichée sur la carte.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentSettings {
    #[serde(deserialize_with = "lenient::boolean")]
    pub enabled: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
    #[serde(deserialize_with = "lenient::opt_u32", skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProfileRecordField for AppointmentSettings {
    const FIELD: ProfileFieldName = ProfileFieldName::Appointments;

    fn validate(&self) -> Result<()> {
        if self.enabled && self.booking_url.is_none() {
            return Err(DomainError::Validation {
                field: "bookingUrl",
                reason: "A booking link is required when appointments are enabled".into(),
            });
        }
        if self.duration_minutes == Some(0) {
            return Err(DomainError::Validation {
                field: "durationMinutes",
                reason: "Duration must be positive".into(),
            });
        }
        optional_url("bookingUrl", self.booking_url.as_deref())
    }
}
