mod carousel;
mod highlight_feed;
mod highlight_view;

pub use carousel::{Carousel, SwipeDirection, SWIPE_THRESHOLD_PX};
pub use highlight_feed::{HighlightFeed, DEFAULT_FETCH_TIMEOUT};
pub use highlight_view::HighlightView;
