// crates/profile/src/domain/repositories/media_storage.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::Url;
use shared_kernel::errors::Result;

/// Stockage objet (buckets publics).
#[async_trait]
pub trait MediaStorage: Send + Sync {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

    /// Dépose le fichier et renvoie son URL publique.
    async fn upload(&self, bucket: &str, path: &str, bytes: Vec<u8>, mime_type: &str) -> Result<Url>;
}
