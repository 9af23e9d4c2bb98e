mod card_variant;
mod embed_platform;
mod platform_id;
mod profile_field_name;
mod theme_mode;

pub use card_variant::CardVariant;
pub use embed_platform::EmbedPlatform;
pub use platform_id::PlatformId;
pub use profile_field_name::{FieldShape, ProfileFieldName};
pub use theme_mode::ThemeMode;
