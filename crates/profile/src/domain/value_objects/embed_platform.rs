// crates/profile/src/domain/value_objects/embed_platform.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use shared_kernel::domain::value_objects::Url;
use crate::domain::value_objects::ProfileFieldName;

/// Plateformes dont les highlights sont enrichis via le proxy oEmbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedPlatform {
    Youtube,
    Tiktok,
    X,
    Linkedin,
    Github,
}

impl EmbedPlatform {
    pub const ALL: [EmbedPlatform; 5] = [
        EmbedPlatform::Youtube,
        EmbedPlatform::Tiktok,
        EmbedPlatform::X,
        EmbedPlatform::Linkedin,
        EmbedPlatform::Github,
    ];

    /// Plateforme déduite de l'hôte d'un lien ; `None` si non reconnue.
    pub fn detect(link: &str) -> Option<Self> {
        let host = Url::try_new(link).ok()?.host()?;
        let platform = match host.as_str() {
            "youtube.com" | "m.youtube.com" | "youtu.be" => Self::Youtube,
            "tiktok.com" | "vm.tiktok.com" => Self::Tiktok,
            "x.com" | "twitter.com" | "mobile.twitter.com" => Self::X,
            "linkedin.com" => Self::Linkedin,
            "github.com" => Self::Github,
            _ => return None,
        };
        Some(platform)
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Tiktok => "tiktok",
            Self::X => "x",
            Self::Linkedin => "linkedin",
            Self::Github => "github",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Youtube => "YouTube",
            Self::Tiktok => "TikTok",
            Self::X => "X",
            Self::Linkedin => "LinkedIn",
            Self::Github => "GitHub",
        }
    }

    /// Chemin du proxy : `/api/{platform}-oembed`
    pub fn oembed_path(&self) -> String {
        format!("/api/{}-oembed", self.slug())
    }

    pub fn highlights_field(&self) -> ProfileFieldName {
        match self {
            Self::Youtube => ProfileFieldName::YoutubeHighlights,
            Self::Tiktok => ProfileFieldName::TiktokHighlights,
            Self::X => ProfileFieldName::XHighlights,
            Self::Linkedin => ProfileFieldName::LinkedinHighlights,
            Self::Github => ProfileFieldName::GithubHighlights,
        }
    }

    /// Titre générique de la carte de repli quand l'entrée n'a pas de titre
    pub fn fallback_title(&self) -> &'static str {
        match self {
            Self::Youtube => "YouTube Video",
            Self::Tiktok => "TikTok Video",
            Self::X => "Post on X",
            Self::Linkedin => "LinkedIn Post",
            Self::Github => "GitHub Repository",
        }
    }

    pub fn link_label(&self) -> String {
        format!("View on {}", self.display_name())
    }
}

impl fmt::Display for EmbedPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
