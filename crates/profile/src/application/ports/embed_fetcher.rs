// crates/profile/src/application/ports/embed_fetcher.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_kernel::errors::Result;

use crate::domain::value_objects::EmbedPlatform;

/// Métadonnées d'intégration au format oEmbed.
///
/// Les champs propres à chaque plateforme (vues, étoiles, likes...) restent
/// dans `extra` sans être interprétés.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EmbedMetadata {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Statistiques numériques propres à la plateforme
    pub fn stats(&self) -> Vec<(&str, f64)> {
        self.extra
            .iter()
            .filter_map(|(key, value)| value.as_f64().map(|n| (key.as_str(), n)))
            .collect()
    }
}

/// Récupération des métadonnées d'un contenu social.
/// `Ok(None)` : le proxy n'a rien pu résoudre (la carte passe en repli).
#[async_trait]
pub trait EmbedFetcher: Send + Sync {
    async fn fetch(&self, platform: EmbedPlatform, url: &str) -> Result<Option<EmbedMetadata>>;
}
