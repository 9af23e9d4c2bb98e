mod track_social_click_command;
mod track_social_click_use_case;

pub use track_social_click_command::TrackSocialClickCommand;
pub use track_social_click_use_case::TrackSocialClickUseCase;
