// crates/profile/src/application/highlights/highlight_view.rs

use serde::Serialize;

use crate::application::ports::EmbedMetadata;
use crate::domain::entries::HighlightEntry;
use crate::domain::value_objects::EmbedPlatform;

/// État de rendu d'un flux de highlights, par ordre de priorité.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HighlightView {
    Empty {
        message: String,
    },
    Loading,
    Rich {
        entry: HighlightEntry,
        metadata: EmbedMetadata,
        link_label: String,
        position: usize,
        total: usize,
    },
    Fallback {
        url: String,
        title: String,
        description: Option<String>,
        link_label: String,
        position: usize,
        total: usize,
    },
}

impl HighlightView {
    pub fn empty(platform: EmbedPlatform) -> Self {
        Self::Empty {
            message: format!("No {} highlights yet", platform.display_name()),
        }
    }

    pub fn rich(platform: EmbedPlatform, entry: HighlightEntry, metadata: EmbedMetadata, position: usize, total: usize) -> Self {
        Self::Rich {
            entry,
            metadata,
            link_label: platform.link_label(),
            position,
            total,
        }
    }

    /// Carte de repli : titre/description de l'entrée, sinon valeurs génériques.
    pub fn fallback(platform: EmbedPlatform, entry: &HighlightEntry, position: usize, total: usize) -> Self {
        Self::Fallback {
            url: entry.url.clone(),
            title: entry.title.clone().unwrap_or_else(|| platform.fallback_title().to_string()),
            description: entry.description.clone(),
            link_label: platform.link_label(),
            position,
            total,
        }
    }

    pub fn is_rich(&self) -> bool {
        matches!(self, Self::Rich { .. })
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}
