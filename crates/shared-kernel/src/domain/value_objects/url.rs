// crates/shared-kernel/src/domain/value_objects/url.rs

use std::fmt;
use serde::{Deserialize, Serialize};
use url::Url as LibUrl;
use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Url(String);

impl Url {
    /// Constructeur sécurisé (saisie utilisateur / formulaire)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw_string = value.into();
        let trimmed = raw_string.trim();

        // 1. Parsing via la crate 'url' pour normalisation syntaxique
        let parsed = LibUrl::parse(trimmed).map_err(|_| DomainError::Validation {
            field: "url",
            reason: format!("Invalid URL format: {}", trimmed),
        })?;

        // 2. Création de l'instance
        let url = Self(parsed.to_string());

        // 3. Validation métier stricte
        url.validate()?;

        Ok(url)
    }

    /// Reconstruction rapide (données stockées / réponse du stockage objet)
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hôte en minuscules, sans le préfixe "www."
    pub fn host(&self) -> Option<String> {
        let parsed = LibUrl::parse(&self.0).ok()?;
        let host = parsed.host_str()?.to_lowercase();
        Some(host.trim_start_matches("www.").to_string())
    }
}

impl ValueObject for Url {
    fn validate(&self) -> Result<()> {
        let parsed = LibUrl::parse(&self.0).map_err(|_| DomainError::Validation {
            field: "url",
            reason: "Invalid URL state".into(),
        })?;

        // Les liens de profil sont ouverts dans un nouvel onglet : http(s) uniquement
        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(DomainError::Validation {
                field: "url",
                reason: "Only http and https protocols are allowed".into(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Url {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl TryFrom<&str> for Url {
    type Error = DomainError;
    fn try_from(value: &str) -> Result<Self> {
        Self::try_new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_and_trims() {
        let url = Url::try_new("  https://youtube.com/watch?v=abc  ").unwrap();
        assert_eq!(url.as_str(), "https://youtube.com/watch?v=abc");
    }

    #[test]
    fn test_rejects_other_schemes() {
        let err = Url::try_new("javascript:alert(1)").unwrap_err();
        assert!(err.is_validation());

        assert!(Url::try_new("ftp://files.example.com").is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Url::try_new("not a url").is_err());
        assert!(Url::try_new("").is_err());
    }

    #[test]
    fn test_host_strips_www() {
        let url = Url::try_new("https://WWW.TikTok.com/@alice/video/1").unwrap();
        assert_eq!(url.host().as_deref(), Some("tiktok.com"));
    }
}
