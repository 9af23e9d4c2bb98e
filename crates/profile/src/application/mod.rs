pub mod edit_profile;
pub mod highlights;
pub mod inspect_highlights;
pub mod ports;
pub mod selector;
pub mod track_social_click;
pub mod upload_media;
