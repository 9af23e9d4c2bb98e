// crates/profile/src/domain/repositories/change_feed_stub.rs

use std::sync::Mutex;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;
use tokio::sync::mpsc;

use crate::domain::repositories::{ChangeFeed, ChangeNotification};

// --- STUB CHANGE FEED ---
// Conserve l'émetteur du dernier abonnement pour piloter les notifications.
#[derive(Default)]
pub struct ChangeFeedStub {
    sender: Mutex<Option<mpsc::Sender<ChangeNotification>>>,
    pub subscriptions: Mutex<Vec<String>>,
}

impl ChangeFeedStub {
    pub fn sender(&self) -> Option<mpsc::Sender<ChangeNotification>> {
        self.sender.lock().unwrap().clone()
    }

    /// Ferme le flux côté backend.
    pub fn close(&self) {
        self.sender.lock().unwrap().take();
    }
}

#[async_trait::async_trait]
impl ChangeFeed for ChangeFeedStub {
    async fn subscribe(&self, table: &str, _user_id: &UserId) -> Result<mpsc::Receiver<ChangeNotification>> {
        let (tx, rx) = mpsc::channel(16);
        *self.sender.lock().unwrap() = Some(tx);
        self.subscriptions.lock().unwrap().push(table.to_string());
        Ok(rx)
    }
}
