// crates/profile/src/domain/entries/profile_entry.rs

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared_kernel::domain::value_objects::{EntryId, Url};
use shared_kernel::errors::{DomainError, Result};
use std::fmt::Debug;

use crate::domain::normalization::is_object;
use crate::domain::value_objects::ProfileFieldName;

/// Élément d'un champ liste du profil.
pub trait ProfileEntry:
    Serialize + DeserializeOwned + Default + Clone + Debug + PartialEq + Send + Sync + 'static
{
    /// Nom court utilisé dans les traces
    const KIND: &'static str;

    /// Colonnes qui stockent ce type d'entrée
    const FIELDS: &'static [ProfileFieldName];

    /// Forme minimale exigée avant tout rendu
    fn is_valid_entry(value: &Value) -> bool {
        is_object(value)
    }

    fn id(&self) -> &EntryId;

    fn set_id(&mut self, id: EntryId);

    /// Champs obligatoires avant enregistrement (bouton "Save" désactivé sinon)
    fn validate(&self) -> Result<()>;

    fn ensure_stored_in(field: ProfileFieldName) -> Result<()> {
        if Self::FIELDS.contains(&field) {
            return Ok(());
        }
        Err(DomainError::Validation {
            field: "field",
            reason: format!("'{}' does not store {} entries", field, Self::KIND),
        })
    }
}

/// Champ objet unique du profil (`featured_video`, `appointments`, ...).
pub trait ProfileRecordField:
    Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static
{
    const FIELD: ProfileFieldName;

    fn validate(&self) -> Result<()>;
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation {
            field,
            reason: format!("{} is required", field),
        });
    }
    Ok(())
}

pub(crate) fn require_url(field: &'static str, value: &str) -> Result<()> {
    require(field, value)?;
    optional_url(field, Some(value))
}

pub(crate) fn optional_url(field: &'static str, value: Option<&str>) -> Result<()> {
    match value {
        Some(raw) if !raw.trim().is_empty() => Url::try_new(raw)
            .map(|_| ())
            .map_err(|_| DomainError::Validation {
                field,
                reason: format!("'{}' is not a valid http(s) link", raw),
            }),
        _ => Ok(()),
    }
}

/// Dates saisies en "YYYY-MM" ou "YYYY-MM-DD" : l'ordre lexical suffit.
pub(crate) fn ensure_chronological(start: &str, end: &str) -> Result<()> {
    if !start.is_empty() && !end.is_empty() && end < start {
        return Err(DomainError::Validation {
            field: "endDate",
            reason: "End date cannot be before start date".into(),
        });
    }
    Ok(())
}
