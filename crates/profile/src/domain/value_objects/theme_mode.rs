// crates/profile/src/domain/value_objects/theme_mode.rs

use serde::{Deserialize, Serialize};

/// Mode d'affichage de la carte.
///
/// Un drapeau explicite `theme` est prioritaire ; à défaut, le mode est déduit
/// de la luminance relative de la couleur de fond (WCAG), quelle qu'elle soit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    const DARK_LUMINANCE_THRESHOLD: f64 = 0.4;

    pub fn parse_flag(flag: &str) -> Option<Self> {
        match flag.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// `#rgb` ou `#rrggbb` ; `None` si la couleur n'est pas lisible.
    pub fn from_background(hex: &str) -> Option<Self> {
        let luminance = relative_luminance(hex)?;
        if luminance < Self::DARK_LUMINANCE_THRESHOLD {
            Some(Self::Dark)
        } else {
            Some(Self::Light)
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

fn relative_luminance(hex: &str) -> Option<f64> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };

    let channel = |i: usize| -> Option<f64> {
        let value = u8::from_str_radix(&expanded[i..i + 2], 16).ok()? as f64 / 255.0;
        // Linéarisation sRGB
        Some(if value <= 0.03928 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        })
    };

    Some(0.2126 * channel(0)? + 0.7152 * channel(2)? + 0.0722 * channel(4)?)
}
