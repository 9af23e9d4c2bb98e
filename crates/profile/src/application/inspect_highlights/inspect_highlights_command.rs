// crates/profile/src/application/inspect_highlights/inspect_highlights_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectHighlightsCommand {
    pub user_id: UserId,
}
