// crates/profile/src/application/highlights/highlight_feed.rs

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::application::highlights::{Carousel, HighlightView, SwipeDirection};
use crate::application::ports::{EmbedFetcher, EmbedMetadata};
use crate::domain::entries::HighlightEntry;
use crate::domain::value_objects::EmbedPlatform;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Default)]
struct FeedState {
    entries: Vec<HighlightEntry>,
    cache: HashMap<String, EmbedMetadata>,
    failed: HashSet<String>,
    in_flight: HashSet<String>,
    carousel: Carousel,
}

impl FeedState {
    fn has_any_metadata(&self) -> bool {
        self.entries.iter().any(|e| self.cache.contains_key(&e.url))
    }
}

/// URLs réservées par un `sync` et pas encore traitées.
///
/// Si le futur de `sync` est abandonné en cours de route, les réservations
/// restantes sont libérées : la vue ne reste pas bloquée sur `Loading` et un
/// prochain `sync` relance la récupération.
struct InFlightGuard<'a> {
    feed: &'a HighlightFeed,
    pending: VecDeque<String>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let mut state = self.feed.state();
        for url in &self.pending {
            state.in_flight.remove(url);
        }
    }
}

/// Flux de highlights d'une plateforme.
///
/// Le cache `url -> métadonnées` vit aussi longtemps que l'instance. Les
/// récupérations sont séquentielles, chacune bornée par un timeout ; un échec
/// ne concerne que son entrée. Le verrou d'état n'est jamais conservé pendant
/// un `await`, de sorte que `view()` reste observable pendant `sync()`.
pub struct HighlightFeed {
    platform: EmbedPlatform,
    fetcher: Arc<dyn EmbedFetcher>,
    fetch_timeout: Duration,
    state: Mutex<FeedState>,
}

impl HighlightFeed {
    pub fn new(platform: EmbedPlatform, fetcher: Arc<dyn EmbedFetcher>) -> Self {
        Self {
            platform,
            fetcher,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            state: Mutex::new(FeedState::default()),
        }
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn platform(&self) -> EmbedPlatform {
        self.platform
    }

    fn state(&self) -> MutexGuard<'_, FeedState> {
        // Collections simples : un verrou empoisonné reste exploitable
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Remplace les entrées puis récupère les métadonnées manquantes.
    pub async fn sync(&self, entries: Vec<HighlightEntry>) {
        let pending: Vec<String> = {
            let mut state = self.state();
            state.carousel.resize(entries.len());
            state.entries = entries;

            let mut seen = HashSet::new();
            let pending: Vec<String> = state.entries.iter()
                .map(|e| e.url.clone())
                .filter(|url| {
                    !state.cache.contains_key(url)
                        && !state.in_flight.contains(url)
                        && seen.insert(url.clone())
                })
                .collect();
            state.in_flight.extend(pending.iter().cloned());
            pending
        };

        let mut reserved = InFlightGuard { feed: self, pending: pending.into() };
        while let Some(url) = reserved.pending.front().cloned() {
            self.fetch_one(&url).await;
            reserved.pending.pop_front();
        }
    }

    async fn fetch_one(&self, url: &str) {
        let outcome = tokio::time::timeout(self.fetch_timeout, self.fetcher.fetch(self.platform, url)).await;

        let metadata = match outcome {
            Ok(Ok(Some(metadata))) => Some(metadata),
            Ok(Ok(None)) => {
                tracing::warn!(platform = %self.platform, url = %url, "No embed metadata returned");
                None
            }
            Ok(Err(err)) => {
                tracing::warn!(platform = %self.platform, url = %url, error = %err, "Embed fetch failed");
                None
            }
            Err(_) => {
                tracing::warn!(
                    platform = %self.platform,
                    url = %url,
                    timeout_ms = self.fetch_timeout.as_millis() as u64,
                    "Embed fetch timed out"
                );
                None
            }
        };

        let mut state = self.state();
        state.in_flight.remove(url);
        match metadata {
            Some(metadata) => {
                state.failed.remove(url);
                state.cache.insert(url.to_string(), metadata);
            }
            None => {
                state.failed.insert(url.to_string());
            }
        }
    }

    pub fn view(&self) -> HighlightView {
        let state = self.state();
        let total = state.entries.len();

        let Some(entry) = state.entries.get(state.carousel.current()) else {
            return HighlightView::empty(self.platform);
        };

        if !state.in_flight.is_empty() && !state.has_any_metadata() {
            return HighlightView::Loading;
        }

        let position = state.carousel.current();
        match state.cache.get(&entry.url) {
            Some(metadata) => HighlightView::rich(self.platform, entry.clone(), metadata.clone(), position, total),
            None => HighlightView::fallback(self.platform, entry, position, total),
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.state().in_flight.is_empty()
    }

    pub fn has_failed(&self, url: &str) -> bool {
        self.state().failed.contains(url)
    }

    pub fn cached(&self, url: &str) -> Option<EmbedMetadata> {
        self.state().cache.get(url).cloned()
    }

    pub fn carousel(&self) -> Carousel {
        self.state().carousel.clone()
    }

    // --- Navigation ---

    pub fn next(&self) {
        self.state().carousel.next();
    }

    pub fn previous(&self) {
        self.state().carousel.previous();
    }

    pub fn go_to(&self, index: usize) -> bool {
        self.state().carousel.go_to(index)
    }

    pub fn swipe(&self, start: (f64, f64), end: (f64, f64)) -> Option<SwipeDirection> {
        self.state().carousel.swipe(start, end)
    }
}
