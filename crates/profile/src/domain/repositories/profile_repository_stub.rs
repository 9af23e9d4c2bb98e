// crates/profile/src/domain/repositories/profile_repository_stub.rs

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use serde_json::Value;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::ProfileRecord;
use crate::domain::repositories::ProfileRepository;
use crate::domain::value_objects::ProfileFieldName;

// --- STUB PROFILE REPOSITORY ---
#[derive(Default)]
pub struct ProfileRepositoryStub {
    pub profile_to_return: Mutex<Option<ProfileRecord>>,
    pub saved_fields: Mutex<Vec<(ProfileFieldName, Value)>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    /// Latence de chaque écriture successive (FIFO)
    pub write_delays: Mutex<VecDeque<Duration>>,
}

impl ProfileRepositoryStub {
    pub fn with_profile(profile: ProfileRecord) -> Self {
        Self {
            profile_to_return: Mutex::new(Some(profile)),
            ..Default::default()
        }
    }

    pub fn with_write_delays(self, delays: impl IntoIterator<Item = Duration>) -> Self {
        *self.write_delays.lock().unwrap() = delays.into_iter().collect();
        self
    }

    pub fn last_saved(&self) -> Option<(ProfileFieldName, Value)> {
        self.saved_fields.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl ProfileRepository for ProfileRepositoryStub {
    async fn find_by_user(&self, _user_id: &UserId) -> Result<Option<ProfileRecord>> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.profile_to_return.lock().unwrap().clone())
    }

    async fn save_field(&self, _user_id: &UserId, field: ProfileFieldName, value: Value) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        let delay = self.write_delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.saved_fields.lock().unwrap().push((field, value));
        Ok(())
    }
}
