// crates/profile/src/application/inspect_highlights/highlight_report.rs

use serde::Serialize;
use serde_json::Value;
use shared_kernel::domain::value_objects::UserId;

use crate::domain::entities::ProfileRecord;
use crate::domain::entries::HighlightEntry;
use crate::domain::value_objects::{EmbedPlatform, ProfileFieldName};

/// Valeur stockée d'un champ de highlights, telle quelle puis normalisée.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldInspection {
    pub field: ProfileFieldName,
    pub raw: Option<Value>,
    pub raw_type: &'static str,
    /// Chaîne JSON encodée dans la colonne (double encodage)
    pub parsed_from_string: bool,
    pub normalized: Vec<HighlightEntry>,
}

impl FieldInspection {
    pub fn inspect(profile: &ProfileRecord, platform: EmbedPlatform) -> Self {
        let field = platform.highlights_field();
        let raw = profile.raw(field);

        Self {
            field,
            raw: raw.cloned(),
            raw_type: type_tag(raw),
            parsed_from_string: matches!(raw, Some(Value::String(s)) if serde_json::from_str::<Value>(s).is_ok()),
            normalized: profile.highlights(platform),
        }
    }

    /// Entrées perdues à la normalisation
    pub fn dropped(&self) -> usize {
        let raw_len = match &self.raw {
            Some(Value::Array(items)) => items.len(),
            Some(Value::String(s)) => match serde_json::from_str::<Value>(s) {
                Ok(Value::Array(items)) => items.len(),
                _ => 0,
            },
            _ => 0,
        };
        raw_len.saturating_sub(self.normalized.len())
    }
}

/// Rapport de diagnostic des cinq champs de highlights d'un profil.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightReport {
    pub user_id: UserId,
    pub fields: Vec<FieldInspection>,
}

impl HighlightReport {
    pub fn from_record(profile: &ProfileRecord) -> Self {
        Self {
            user_id: profile.user_id,
            fields: EmbedPlatform::ALL
                .iter()
                .map(|platform| FieldInspection::inspect(profile, *platform))
                .collect(),
        }
    }

    pub fn field(&self, field: ProfileFieldName) -> Option<&FieldInspection> {
        self.fields.iter().find(|f| f.field == field)
    }

    pub fn total_entries(&self) -> usize {
        self.fields.iter().map(|f| f.normalized.len()).sum()
    }
}

fn type_tag(raw: Option<&Value>) -> &'static str {
    match raw {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}
