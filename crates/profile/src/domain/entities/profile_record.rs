// crates/profile/src/domain/entities/profile_record.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::entries::{
    AppointmentSettings, Certification, DribbbleProfile, Education, Experience, FeaturedVideo,
    GalleryItem, HighlightEntry, ProfileEntry, ProfileRecordField, Project, Publication, Skill,
    Testimonial,
};
use crate::domain::normalization::{normalize_entries, normalize_record};
use crate::domain::value_objects::{EmbedPlatform, ProfileFieldName, ThemeMode};

/// Ligne de la table `profiles`, propriétaire unique de tous les champs JSON.
///
/// Les colonnes sont conservées brutes : la normalisation a lieu à la lecture,
/// et chaque écriture remplace le champ entier (jamais de patch partiel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_id: UserId,
    #[serde(flatten)]
    columns: Map<String, Value>,
}

impl ProfileRecord {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id, columns: Map::new() }
    }

    /// Reconstruction depuis une ligne du backend
    pub fn restore(user_id: UserId, columns: Map<String, Value>) -> Self {
        Self { user_id, columns }
    }

    pub fn with_column(mut self, name: impl Into<String>, value: Value) -> Self {
        self.columns.insert(name.into(), value);
        self
    }

    pub fn raw(&self, field: ProfileFieldName) -> Option<&Value> {
        self.columns.get(field.as_str())
    }

    pub fn columns(&self) -> &Map<String, Value> {
        &self.columns
    }

    // --- Lecture normalisée ---

    pub fn list<E: ProfileEntry>(&self, field: ProfileFieldName) -> Vec<E> {
        normalize_entries(self.raw(field))
    }

    pub fn record<T: ProfileRecordField>(&self) -> Option<T> {
        normalize_record(self.raw(T::FIELD))
    }

    pub fn highlights(&self, platform: EmbedPlatform) -> Vec<HighlightEntry> {
        self.list(platform.highlights_field())
    }

    pub fn experience(&self) -> Vec<Experience> { self.list(ProfileFieldName::Experience) }
    pub fn education(&self) -> Vec<Education> { self.list(ProfileFieldName::Education) }
    pub fn certifications(&self) -> Vec<Certification> { self.list(ProfileFieldName::Certifications) }
    pub fn projects(&self) -> Vec<Project> { self.list(ProfileFieldName::Projects) }
    pub fn skills(&self) -> Vec<Skill> { self.list(ProfileFieldName::Skills) }
    pub fn testimonials(&self) -> Vec<Testimonial> { self.list(ProfileFieldName::Testimonials) }
    pub fn publications(&self) -> Vec<Publication> { self.list(ProfileFieldName::Publications) }
    pub fn gallery(&self) -> Vec<GalleryItem> { self.list(ProfileFieldName::Gallery) }

    pub fn featured_video(&self) -> Option<FeaturedVideo> { self.record() }
    pub fn appointments(&self) -> Option<AppointmentSettings> { self.record() }
    pub fn dribbble_profile(&self) -> Option<DribbbleProfile> { self.record() }

    /// Drapeau `theme` explicite, sinon déduction depuis `background_color`.
    pub fn theme_mode(&self) -> ThemeMode {
        let explicit = self.columns.get("theme")
            .and_then(Value::as_str)
            .and_then(ThemeMode::parse_flag);

        explicit
            .or_else(|| {
                self.columns.get("background_color")
                    .and_then(Value::as_str)
                    .and_then(ThemeMode::from_background)
            })
            .unwrap_or_default()
    }

    // --- Écriture (remplacement complet) ---

    /// Remplace le champ liste par un tableau natif ; renvoie la valeur écrite.
    pub fn replace_list<E: ProfileEntry>(&mut self, field: ProfileFieldName, items: &[E]) -> Result<Value> {
        E::ensure_stored_in(field)?;
        let value = serde_json::to_value(items)?;
        self.columns.insert(field.as_str().to_string(), value.clone());
        Ok(value)
    }

    pub fn replace_record<T: ProfileRecordField>(&mut self, record: &T) -> Result<Value> {
        let value = serde_json::to_value(record)?;
        self.columns.insert(T::FIELD.as_str().to_string(), value.clone());
        Ok(value)
    }

    pub fn clear_field(&mut self, field: ProfileFieldName) {
        self.columns.insert(field.as_str().to_string(), Value::Null);
    }

    pub fn set_raw(&mut self, field: ProfileFieldName, value: Value) {
        self.columns.insert(field.as_str().to_string(), value);
    }
}

impl EntityMetadata for ProfileRecord {
    fn entity_name() -> &'static str { "Profile" }
}
