// crates/profile/src/domain/value_objects/profile_field_name.rs

use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;

/// Forme attendue d'un champ une fois normalisé.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    List,
    Object,
}

/// Colonnes JSON de la table `profiles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileFieldName {
    GithubHighlights,
    TiktokHighlights,
    YoutubeHighlights,
    XHighlights,
    LinkedinHighlights,
    Experience,
    Education,
    Certifications,
    Projects,
    Skills,
    Testimonials,
    Publications,
    Gallery,
    Appointments,
    FeaturedVideo,
    DribbbleProfile,
}

impl ProfileFieldName {
    pub const ALL: [ProfileFieldName; 16] = [
        Self::GithubHighlights,
        Self::TiktokHighlights,
        Self::YoutubeHighlights,
        Self::XHighlights,
        Self::LinkedinHighlights,
        Self::Experience,
        Self::Education,
        Self::Certifications,
        Self::Projects,
        Self::Skills,
        Self::Testimonials,
        Self::Publications,
        Self::Gallery,
        Self::Appointments,
        Self::FeaturedVideo,
        Self::DribbbleProfile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GithubHighlights => "github_highlights",
            Self::TiktokHighlights => "tiktok_highlights",
            Self::YoutubeHighlights => "youtube_highlights",
            Self::XHighlights => "x_highlights",
            Self::LinkedinHighlights => "linkedin_highlights",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Certifications => "certifications",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Testimonials => "testimonials",
            Self::Publications => "publications",
            Self::Gallery => "gallery",
            Self::Appointments => "appointments",
            Self::FeaturedVideo => "featured_video",
            Self::DribbbleProfile => "dribbble_profile",
        }
    }

    pub fn shape(&self) -> FieldShape {
        match self {
            Self::Appointments | Self::FeaturedVideo | Self::DribbbleProfile => FieldShape::Object,
            _ => FieldShape::List,
        }
    }

    pub fn is_highlights(&self) -> bool {
        matches!(
            self,
            Self::GithubHighlights
                | Self::TiktokHighlights
                | Self::YoutubeHighlights
                | Self::XHighlights
                | Self::LinkedinHighlights
        )
    }
}

impl FromStr for ProfileFieldName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| DomainError::Validation {
                field: "profile_field",
                reason: format!("Unknown profile field '{}'", s),
            })
    }
}

impl fmt::Display for ProfileFieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
