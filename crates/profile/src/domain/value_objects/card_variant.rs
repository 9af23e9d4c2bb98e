// crates/profile/src/domain/value_objects/card_variant.rs

use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;

/// Variante de carte : chaque variante expose son propre jeu de sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    Pro,
    Basic,
}

impl CardVariant {
    pub const ALL: [CardVariant; 2] = [CardVariant::Pro, CardVariant::Basic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pro => "pro",
            Self::Basic => "basic",
        }
    }
}

impl Default for CardVariant {
    fn default() -> Self {
        Self::Basic
    }
}

impl FromStr for CardVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pro" => Ok(Self::Pro),
            "basic" | "default" => Ok(Self::Basic),
            other => Err(DomainError::Validation {
                field: "card_variant",
                reason: format!("Unknown card variant '{}'", other),
            }),
        }
    }
}

impl fmt::Display for CardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
