// crates/profile/src/application/upload_media/upload_media_command.rs

use shared_kernel::domain::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    const IMAGE_TYPES: [&'static str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];
    const VIDEO_TYPES: [&'static str; 3] = ["video/mp4", "video/webm", "video/quicktime"];

    /// `None` pour un type MIME non autorisé.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        let mime = mime_type.trim().to_ascii_lowercase();
        if Self::IMAGE_TYPES.contains(&mime.as_str()) {
            Some(Self::Image)
        } else if Self::VIDEO_TYPES.contains(&mime.as_str()) {
            Some(Self::Video)
        } else {
            None
        }
    }

    /// Extension de l'objet stocké, déduite du seul type MIME validé.
    pub fn extension(mime_type: &str) -> Option<&'static str> {
        let ext = match mime_type.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/webp" => "webp",
            "image/gif" => "gif",
            "video/mp4" => "mp4",
            "video/webm" => "webm",
            "video/quicktime" => "mov",
            _ => return None,
        };
        Some(ext)
    }

    pub fn max_bytes(&self) -> usize {
        match self {
            Self::Image => 5 * 1024 * 1024,
            Self::Video => 50 * 1024 * 1024,
        }
    }
}

/// Upload d'un média de profil (photo de témoignage, image de projet...).
#[derive(Debug, Clone)]
pub struct UploadMediaCommand {
    /// `None` : aucune session active
    pub user_id: Option<UserId>,
    /// Nom d'origine, pour les traces uniquement
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub preferred_bucket: Option<String>,
}
