// crates/profile/src/application/upload_media/upload_media_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::value_objects::{Url, UserId};
use shared_kernel::errors::{DomainError, Result};
use uuid::Uuid;

use crate::application::upload_media::{MediaKind, UploadMediaCommand};
use crate::domain::repositories::MediaStorage;

/// Buckets sondés, dans l'ordre, après le bucket préféré.
pub const FALLBACK_BUCKETS: [&str; 3] = ["project-media", "uploads", "avatars"];

pub struct UploadMediaUseCase {
    storage: Arc<dyn MediaStorage>,
}

impl UploadMediaUseCase {
    pub fn new(storage: Arc<dyn MediaStorage>) -> Self {
        Self { storage }
    }

    pub async fn execute(&self, cmd: UploadMediaCommand) -> Result<Url> {
        // 1. Validation locale, avant tout appel réseau
        let (user_id, kind, extension) = Self::validate(&cmd)?;

        // 2. Sondage des buckets
        let bucket = self.find_bucket(cmd.preferred_bucket.as_deref()).await?;

        // 3. Dépôt
        let path = format!("{}/{}.{}", user_id, Uuid::now_v7(), extension);
        let size = cmd.bytes.len();
        let url = self.storage.upload(&bucket, &path, cmd.bytes, &cmd.mime_type).await?;

        tracing::info!(
            user_id = %user_id,
            bucket = %bucket,
            kind = ?kind,
            file_name = %cmd.file_name,
            size,
            "Media uploaded"
        );
        Ok(url)
    }

    fn validate(cmd: &UploadMediaCommand) -> Result<(UserId, MediaKind, &'static str)> {
        let user_id = cmd.user_id.ok_or_else(|| DomainError::Unauthorized {
            reason: "You must be signed in to upload media".into(),
        })?;

        let not_allowed = || DomainError::Validation {
            field: "mime_type",
            reason: format!("File type '{}' is not allowed", cmd.mime_type),
        };
        let kind = MediaKind::from_mime(&cmd.mime_type).ok_or_else(not_allowed)?;
        let extension = MediaKind::extension(&cmd.mime_type).ok_or_else(not_allowed)?;

        if cmd.bytes.is_empty() {
            return Err(DomainError::Validation { field: "file", reason: "File is empty".into() });
        }

        if cmd.bytes.len() > kind.max_bytes() {
            return Err(DomainError::Validation {
                field: "file",
                reason: format!("File exceeds the {} MB limit", kind.max_bytes() / (1024 * 1024)),
            });
        }

        Ok((user_id, kind, extension))
    }

    async fn find_bucket(&self, preferred: Option<&str>) -> Result<String> {
        let mut candidates: Vec<&str> = Vec::with_capacity(FALLBACK_BUCKETS.len() + 1);
        for bucket in preferred.into_iter().chain(FALLBACK_BUCKETS) {
            if !bucket.trim().is_empty() && !candidates.contains(&bucket) {
                candidates.push(bucket);
            }
        }

        for bucket in &candidates {
            if self.storage.bucket_exists(bucket).await? {
                return Ok(bucket.to_string());
            }
            tracing::debug!(bucket = %bucket, "Storage bucket not found, trying next");
        }

        Err(DomainError::NotFound {
            entity: "StorageBucket",
            id: "No storage bucket available for media uploads".into(),
        })
    }
}
