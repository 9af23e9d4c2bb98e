// crates/profile/src/application/edit_profile/profile_editor.rs

use std::future::Future;
use std::sync::Arc;
use serde_json::Value;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{DomainError, Result};
use tokio::sync::{mpsc, watch};

use crate::application::selector::ListSelector;
use crate::domain::entities::ProfileRecord;
use crate::domain::entries::{ProfileEntry, ProfileRecordField, Testimonial};
use crate::domain::repositories::{ChangeFeed, ProfileRepository, TestimonialRepository};
use crate::domain::value_objects::{FieldShape, ProfileFieldName};

pub const TESTIMONIALS_TABLE: &str = "testimonials";

/// Seul propriétaire des écritures d'un profil et de la synchronisation temps réel.
///
/// Les sélecteurs restent purs : ils remontent une liste complète, l'éditeur
/// l'écrit telle quelle (remplacement intégral du champ).
pub struct ProfileEditor {
    user_id: UserId,
    profiles: Arc<dyn ProfileRepository>,
    testimonials: Arc<dyn TestimonialRepository>,
    changes: Arc<dyn ChangeFeed>,
}

impl ProfileEditor {
    pub fn new(
        user_id: UserId,
        profiles: Arc<dyn ProfileRepository>,
        testimonials: Arc<dyn TestimonialRepository>,
        changes: Arc<dyn ChangeFeed>,
    ) -> Self {
        Self { user_id, profiles, testimonials, changes }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub async fn load(&self) -> Result<ProfileRecord> {
        self.profiles.find_by_user(&self.user_id)
            .await?
            .ok_or_not_found(self.user_id)
    }

    pub async fn save_list<E: ProfileEntry>(&self, field: ProfileFieldName, items: &[E]) -> Result<()> {
        if field.shape() != FieldShape::List {
            return Err(DomainError::Validation {
                field: "field",
                reason: format!("'{}' is not a list field", field),
            });
        }
        E::ensure_stored_in(field)?;

        let value = serde_json::to_value(items)?;
        self.profiles.save_field(&self.user_id, field, value).await
    }

    pub async fn save_record<T: ProfileRecordField>(&self, record: Option<&T>) -> Result<()> {
        let value = match record {
            Some(record) => {
                record.validate()?;
                serde_json::to_value(record)?
            }
            None => Value::Null,
        };

        self.profiles.save_field(&self.user_id, T::FIELD, value).await
    }

    pub async fn load_testimonials(&self) -> Result<Vec<Testimonial>> {
        self.testimonials.list_for_user(&self.user_id).await
    }

    pub async fn save_testimonials(&self, items: &[Testimonial]) -> Result<()> {
        self.testimonials.replace_for_user(&self.user_id, items).await
    }

    /// Sélecteur dont chaque liste validée est persistée en arrière-plan.
    ///
    /// Les écritures d'un même sélecteur passent par une seule tâche, dans
    /// l'ordre : une liste plus ancienne n'écrase jamais une plus récente.
    pub fn selector<E: ProfileEntry>(self: &Arc<Self>, profile: &ProfileRecord, field: ProfileFieldName) -> Result<ListSelector<E>> {
        E::ensure_stored_in(field)?;

        let editor = Arc::clone(self);
        let writer = spawn_ordered_writer(move |items: Vec<E>| {
            let editor = Arc::clone(&editor);
            async move {
                if let Err(e) = editor.save_list(field, &items).await {
                    tracing::error!(user_id = %editor.user_id, field = %field, error = %e, "Failed to persist list field");
                }
            }
        });

        Ok(ListSelector::new(profile.list(field), move |items: &[E]| {
            if writer.send(items.to_vec()).is_err() {
                tracing::warn!(field = %field, "List writer stopped, change not persisted");
            }
        }))
    }

    pub fn testimonial_selector(self: &Arc<Self>, items: Vec<Testimonial>) -> ListSelector<Testimonial> {
        let editor = Arc::clone(self);
        let writer = spawn_ordered_writer(move |items: Vec<Testimonial>| {
            let editor = Arc::clone(&editor);
            async move {
                if let Err(e) = editor.save_testimonials(&items).await {
                    tracing::error!(user_id = %editor.user_id, error = %e, "Failed to persist testimonials");
                }
            }
        });

        ListSelector::new(items, move |items: &[Testimonial]| {
            if writer.send(items.to_vec()).is_err() {
                tracing::warn!("Testimonial writer stopped, change not persisted");
            }
        })
    }

    /// Publie la liste des témoignages puis la recharge entièrement à chaque
    /// notification, jusqu'au signal d'arrêt ou la fermeture du flux.
    pub async fn watch_testimonials<S>(&self, publisher: watch::Sender<Vec<Testimonial>>, shutdown: S) -> Result<()>
    where
        S: Future<Output = ()> + Send,
    {
        // Abonnement avant le premier chargement : aucun changement perdu
        let mut notifications = self.changes.subscribe(TESTIMONIALS_TABLE, &self.user_id).await?;
        self.refresh_testimonials(&publisher).await;

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::debug!(user_id = %self.user_id, "Testimonial sync stopped");
                    break;
                }
                notification = notifications.recv() => match notification {
                    Some(change) => {
                        tracing::debug!(user_id = %self.user_id, kind = ?change.kind, "Testimonials changed, refetching");
                        self.refresh_testimonials(&publisher).await;
                    }
                    None => {
                        tracing::info!(user_id = %self.user_id, "Testimonial change feed closed");
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    async fn refresh_testimonials(&self, publisher: &watch::Sender<Vec<Testimonial>>) {
        match self.testimonials.list_for_user(&self.user_id).await {
            Ok(testimonials) => {
                publisher.send_replace(testimonials);
            }
            Err(e) => {
                tracing::warn!(user_id = %self.user_id, error = %e, "Failed to refetch testimonials");
            }
        }
    }
}

/// Tâche unique qui applique les listes reçues une par une.
///
/// Seule la plus récente des listes en attente est écrite ; la tâche s'arrête
/// quand le sélecteur (seul émetteur) est détruit.
fn spawn_ordered_writer<T, F, Fut>(mut write: F) -> mpsc::UnboundedSender<Vec<T>>
where
    T: Send + 'static,
    F: FnMut(Vec<T>) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<Vec<T>>();
    tokio::spawn(async move {
        while let Some(mut latest) = rx.recv().await {
            while let Ok(newer) = rx.try_recv() {
                latest = newer;
            }
            write(latest).await;
        }
    });
    tx
}
