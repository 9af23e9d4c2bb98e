// crates/profile/src/domain/registry/section_component.rs

use crate::domain::value_objects::{EmbedPlatform, PlatformId, ProfileFieldName};

/// Composant chargé du rendu d'une section de carte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionComponent {
    SocialLink(PlatformId),
    Website,
    Bio,
    Email,
    Phone,
    Experience,
    Education,
    Skills,
    Certifications,
    Projects,
    Testimonials,
    Publications,
    Gallery,
    Faq,
    Appointments,
    FeaturedVideo,
    Highlights(EmbedPlatform),
    DribbbleShowcase,
}

impl SectionComponent {
    /// Champ du profil édité par ce composant, s'il en possède un.
    pub fn backing_field(&self) -> Option<ProfileFieldName> {
        let field = match self {
            Self::Experience => ProfileFieldName::Experience,
            Self::Education => ProfileFieldName::Education,
            Self::Skills => ProfileFieldName::Skills,
            Self::Certifications => ProfileFieldName::Certifications,
            Self::Projects => ProfileFieldName::Projects,
            Self::Testimonials => ProfileFieldName::Testimonials,
            Self::Publications => ProfileFieldName::Publications,
            Self::Gallery => ProfileFieldName::Gallery,
            Self::Appointments => ProfileFieldName::Appointments,
            Self::FeaturedVideo => ProfileFieldName::FeaturedVideo,
            Self::Highlights(platform) => platform.highlights_field(),
            Self::DribbbleShowcase => ProfileFieldName::DribbbleProfile,
            Self::SocialLink(_) | Self::Website | Self::Bio | Self::Email | Self::Phone | Self::Faq => {
                return None
            }
        };
        Some(field)
    }

    /// Les liens sociaux portent une plateforme pour le suivi des clics.
    pub fn platform(&self) -> Option<PlatformId> {
        match self {
            Self::SocialLink(platform) => Some(*platform),
            _ => None,
        }
    }
}
