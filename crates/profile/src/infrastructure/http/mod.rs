mod http_click_tracker;
mod http_embed_fetcher;

pub use http_click_tracker::{HttpClickTracker, TRACK_SOCIAL_PATH};
pub use http_embed_fetcher::HttpEmbedFetcher;
