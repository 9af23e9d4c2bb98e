pub mod click_tracker_stub;
pub mod embed_fetcher_stub;

pub use click_tracker_stub::ClickTrackerStub;
pub use embed_fetcher_stub::{EmbedFetcherStub, StubOutcome};
