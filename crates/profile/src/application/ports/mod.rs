mod click_tracker;
mod embed_fetcher;

pub use click_tracker::{ClickTracker, SocialClick};
pub use embed_fetcher::{EmbedFetcher, EmbedMetadata};
