// crates/profile/src/application/track_social_click/track_social_click_use_case.rs

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::application::ports::{ClickTracker, SocialClick};
use crate::application::track_social_click::TrackSocialClickCommand;
use crate::domain::registry::resolve_platform;

/// Suivi des clics sortants. Ne bloque ni ne fait échouer la navigation :
/// les erreurs sont journalisées puis abandonnées.
pub struct TrackSocialClickUseCase {
    tracker: Arc<dyn ClickTracker>,
}

impl TrackSocialClickUseCase {
    pub fn new(tracker: Arc<dyn ClickTracker>) -> Self {
        Self { tracker }
    }

    /// `true` si l'événement a été accepté par le service d'analytics.
    pub async fn execute(&self, cmd: TrackSocialClickCommand) -> bool {
        let Some(platform) = resolve_platform(&cmd.section_type) else {
            tracing::debug!(section_type = %cmd.section_type, "Section has no tracked platform");
            return false;
        };

        let click = SocialClick::new(cmd.profile_id, platform, cmd.source);
        match self.tracker.track(&click).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    profile_id = %click.profile_id,
                    platform = %click.platform,
                    clicked_at = %click.clicked_at,
                    error = %e,
                    "Failed to track social click"
                );
                false
            }
        }
    }

    /// Envoi en tâche de fond (fire-and-forget).
    pub fn dispatch(self: &Arc<Self>, cmd: TrackSocialClickCommand) -> JoinHandle<bool> {
        let use_case = Arc::clone(self);
        tokio::spawn(async move { use_case.execute(cmd).await })
    }
}
