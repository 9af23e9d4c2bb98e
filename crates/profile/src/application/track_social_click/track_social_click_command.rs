// crates/profile/src/application/track_social_click/track_social_click_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSocialClickCommand {
    pub profile_id: UserId,
    /// Type de la section cliquée (ex: "github", "website")
    pub section_type: String,
    /// Origine du clic (ex: "profile_card")
    pub source: String,
}
