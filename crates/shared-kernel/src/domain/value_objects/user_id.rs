// crates/shared-kernel/src/domain/value_objects/user_id.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use crate::domain::entities::EntityMetadata;
use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};

/// Identifiant de l'utilisateur authentifié, propriétaire du profil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Génère un nouvel UUID v7 (Séquentiel)
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Reconstruction depuis un type sûr (session / backend)
    pub fn new_unchecked(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Validation et création depuis une String (entrée externe)
    pub fn try_new(id: impl Into<String>) -> Result<Self> {
        let s = id.into();
        let id = Self::from_str(&s)?;
        id.validate()?;
        Ok(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl ValueObject for UserId {
    fn validate(&self) -> Result<()> {
        if self.0.is_nil() {
            return Err(DomainError::Validation {
                field: "user_id",
                reason: "User ID cannot be nil".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

// --- CONVERSIONS ---

impl FromStr for UserId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| DomainError::Validation {
                field: "user_id",
                reason: format!("'{}' is not a valid UUID", s),
            })
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl EntityMetadata for UserId {
    fn entity_name() -> &'static str {
        "UserId"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_uuid() {
        let raw = "0191d3a0-7c4e-7b2a-9f00-1a2b3c4d5e6f";
        let id = UserId::try_new(raw).unwrap();
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn test_rejects_nil_and_garbage() {
        assert!(UserId::try_new(Uuid::nil().to_string()).is_err());
        assert!(UserId::try_new("alice").is_err());
    }
}
