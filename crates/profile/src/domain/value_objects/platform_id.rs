// crates/profile/src/domain/value_objects/platform_id.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Plateforme sociale utilisée pour étiqueter les clics sortants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    Whatsapp,
    Linkedin,
    Instagram,
    Github,
    Youtube,
    Tiktok,
    Facebook,
    Dribbble,
    Behance,
    Snapchat,
    Reddit,
    X,
}

impl PlatformId {
    /// Résolution depuis le type de section ; `None` pour tout le reste.
    pub fn from_section_type(section_type: &str) -> Option<Self> {
        let platform = match section_type {
            "whatsapp" => Self::Whatsapp,
            "linkedin" => Self::Linkedin,
            "instagram" => Self::Instagram,
            "github" => Self::Github,
            "youtube" => Self::Youtube,
            "tiktok" => Self::Tiktok,
            "facebook" => Self::Facebook,
            "dribbble" => Self::Dribbble,
            "behance" => Self::Behance,
            "snapchat" => Self::Snapchat,
            "reddit" => Self::Reddit,
            "x" => Self::X,
            _ => return None,
        };
        Some(platform)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Whatsapp => "whatsapp",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
            Self::Github => "github",
            Self::Youtube => "youtube",
            Self::Tiktok => "tiktok",
            Self::Facebook => "facebook",
            Self::Dribbble => "dribbble",
            Self::Behance => "behance",
            Self::Snapchat => "snapchat",
            Self::Reddit => "reddit",
            Self::X => "x",
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_section_types_map_to_platforms() {
        for name in [
            "whatsapp", "linkedin", "instagram", "github", "youtube", "tiktok",
            "facebook", "dribbble", "behance", "snapchat", "reddit", "x",
        ] {
            let platform = PlatformId::from_section_type(name)
                .unwrap_or_else(|| panic!("FAIL: '{name}' should map to a platform"));
            assert_eq!(platform.as_str(), name);
        }
    }

    #[test]
    fn test_other_section_types_have_no_platform() {
        assert_eq!(PlatformId::from_section_type("experience"), None);
        assert_eq!(PlatformId::from_section_type("twitter"), None);
        assert_eq!(PlatformId::from_section_type("LinkedIn"), None);
    }
}
