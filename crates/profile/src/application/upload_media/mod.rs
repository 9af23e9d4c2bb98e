mod upload_media_command;
mod upload_media_use_case;

pub use upload_media_command::{MediaKind, UploadMediaCommand};
pub use upload_media_use_case::{UploadMediaUseCase, FALLBACK_BUCKETS};
