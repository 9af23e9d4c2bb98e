// crates/profile/src/domain/repositories/profile_repository.rs

use async_trait::async_trait;
use serde_json::Value;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::entities::ProfileRecord;
use crate::domain::value_objects::ProfileFieldName;

/// Accès à la table `profiles` du backend.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<ProfileRecord>>;

    /// Écriture complète d'un champ : la valeur remplace l'existant.
    async fn save_field(&self, user_id: &UserId, field: ProfileFieldName, value: Value) -> Result<()>;
}
