// crates/profile/src/domain/repositories/change_feed.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// Notification temps réel ; le contenu de la ligne n'est pas transporté.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeNotification {
    pub table: String,
    pub kind: ChangeKind,
}

impl ChangeNotification {
    pub fn new(table: impl Into<String>, kind: ChangeKind) -> Self {
        Self { table: table.into(), kind }
    }
}

/// Abonnement aux changements d'une table, filtrés par utilisateur.
/// La fermeture du canal termine l'abonnement.
#[async_trait]
pub trait ChangeFeed: Send + Sync {
    async fn subscribe(&self, table: &str, user_id: &UserId) -> Result<mpsc::Receiver<ChangeNotification>>;
}
