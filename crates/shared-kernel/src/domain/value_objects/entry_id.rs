// crates/shared-kernel/src/domain/value_objects/entry_id.rs

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Identifiant d'une entrée dans un champ liste (expérience, highlight, ...).
///
/// Les nouvelles entrées reçoivent un UUID v7. Les anciennes données stockent
/// un timestamp en millisecondes (nombre JSON) : on l'accepte tel quel et on le
/// conserve sous forme de chaîne, sans réécriture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Reconstruction depuis les données stockées
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Vrai si l'id provient de l'ancien schéma (timestamp numérique)
    pub fn is_legacy(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(|c| c.is_ascii_digit())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for EntryId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

struct EntryIdVisitor;

impl<'de> Visitor<'de> for EntryIdVisitor {
    type Value = EntryId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or integer entry id")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<EntryId, E> {
        if v.trim().is_empty() {
            return Ok(EntryId::generate());
        }
        Ok(EntryId::from_raw(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<EntryId, E> {
        Ok(EntryId::from_raw(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<EntryId, E> {
        Ok(EntryId::from_raw(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<EntryId, E> {
        // Date.now() + Math.random() produisait parfois des flottants
        if v.fract() == 0.0 && v.is_finite() {
            return Ok(EntryId::from_raw(format!("{}", v as i64)));
        }
        Ok(EntryId::from_raw(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<EntryId, E> {
        Ok(EntryId::generate())
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EntryIdVisitor)
    }
}
