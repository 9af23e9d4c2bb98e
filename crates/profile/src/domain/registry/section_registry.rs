// crates/profile/src/domain/registry/section_registry.rs

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::registry::{SectionComponent, SectionDescriptor};
use crate::domain::value_objects::{CardVariant, EmbedPlatform, PlatformId};

#[derive(Debug, Clone, Copy)]
enum Availability {
    Both,
    ProOnly,
    BasicOnly,
}

impl Availability {
    fn includes(self, variant: CardVariant) -> bool {
        match self {
            Self::Both => true,
            Self::ProOnly => variant == CardVariant::Pro,
            Self::BasicOnly => variant == CardVariant::Basic,
        }
    }
}

use Availability::{BasicOnly, Both, ProOnly};
use SectionComponent as C;

/// Table unique : chaque ligne porte sa disponibilité par variante.
const ROWS: &[(&str, SectionComponent, Availability)] = &[
    ("whatsapp", C::SocialLink(PlatformId::Whatsapp), Both),
    ("linkedin", C::SocialLink(PlatformId::Linkedin), Both),
    ("instagram", C::SocialLink(PlatformId::Instagram), Both),
    ("github", C::SocialLink(PlatformId::Github), Both),
    ("youtube", C::SocialLink(PlatformId::Youtube), Both),
    ("tiktok", C::SocialLink(PlatformId::Tiktok), Both),
    ("facebook", C::SocialLink(PlatformId::Facebook), Both),
    ("dribbble", C::SocialLink(PlatformId::Dribbble), Both),
    ("behance", C::SocialLink(PlatformId::Behance), Both),
    ("snapchat", C::SocialLink(PlatformId::Snapchat), Both),
    ("reddit", C::SocialLink(PlatformId::Reddit), Both),
    ("x", C::SocialLink(PlatformId::X), Both),
    ("website", C::Website, Both),
    ("bio", C::Bio, Both),
    ("email", C::Email, Both),
    ("phone", C::Phone, ProOnly),
    ("experience", C::Experience, Both),
    ("education", C::Education, Both),
    ("skills", C::Skills, Both),
    ("certifications", C::Certifications, Both),
    ("projects", C::Projects, Both),
    ("testimonials", C::Testimonials, Both),
    ("publications", C::Publications, BasicOnly),
    ("gallery", C::Gallery, Both),
    ("faq", C::Faq, Both),
    ("appointments", C::Appointments, Both),
    ("featured_video", C::FeaturedVideo, BasicOnly),
    ("youtube_highlights", C::Highlights(EmbedPlatform::Youtube), Both),
    ("tiktok_highlights", C::Highlights(EmbedPlatform::Tiktok), Both),
    ("x_highlights", C::Highlights(EmbedPlatform::X), Both),
    ("linkedin_highlights", C::Highlights(EmbedPlatform::Linkedin), Both),
    ("github_highlights", C::Highlights(EmbedPlatform::Github), Both),
    ("dribbble_showcase", C::DribbbleShowcase, Both),
];

static REGISTRY: LazyLock<SectionRegistry> = LazyLock::new(SectionRegistry::build);

/// Résolution `(variante, type de section)` vers le composant de rendu.
pub struct SectionRegistry {
    components: HashMap<(CardVariant, &'static str), SectionComponent>,
}

impl SectionRegistry {
    fn build() -> Self {
        let mut components = HashMap::with_capacity(ROWS.len() * 2);
        for &(section_type, component, availability) in ROWS {
            for variant in CardVariant::ALL {
                if availability.includes(variant) {
                    components.insert((variant, section_type), component);
                }
            }
        }
        Self { components }
    }

    pub fn global() -> &'static SectionRegistry {
        &REGISTRY
    }

    /// `None` pour un type inconnu de la variante : l'appelant n'affiche rien.
    pub fn resolve_component(&self, section_type: &str, variant: CardVariant) -> Option<SectionComponent> {
        let component = self.components.get(&(variant, section_type)).copied();
        if component.is_none() {
            tracing::warn!(
                section_type = %section_type,
                variant = %variant,
                "No component registered for section type"
            );
        }
        component
    }

    /// Sections résolues dans l'ordre de la configuration, les inconnues ignorées.
    pub fn resolve_all<'a>(
        &self,
        sections: &'a [SectionDescriptor],
        variant: CardVariant,
    ) -> Vec<(&'a SectionDescriptor, SectionComponent)> {
        sections
            .iter()
            .filter_map(|section| {
                self.resolve_component(&section.section_type, variant)
                    .map(|component| (section, component))
            })
            .collect()
    }

    pub fn section_types(&self, variant: CardVariant) -> Vec<&'static str> {
        ROWS.iter()
            .filter(|(_, _, availability)| availability.includes(variant))
            .map(|(section_type, _, _)| *section_type)
            .collect()
    }
}

pub fn resolve_component(section_type: &str, variant: CardVariant) -> Option<SectionComponent> {
    SectionRegistry::global().resolve_component(section_type, variant)
}

pub fn resolve_platform(section_type: &str) -> Option<PlatformId> {
    PlatformId::from_section_type(section_type)
}
