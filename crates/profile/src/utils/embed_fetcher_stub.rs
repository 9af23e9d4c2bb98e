// crates/profile/src/utils/embed_fetcher_stub.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use shared_kernel::errors::{DomainError, Result};
use tokio::sync::Notify;

use crate::application::ports::{EmbedFetcher, EmbedMetadata};
use crate::domain::value_objects::EmbedPlatform;

#[derive(Debug, Clone)]
pub enum StubOutcome {
    Found(EmbedMetadata),
    Missing,
    Fail,
    /// Ne répond jamais (timeout)
    Hang,
}

// --- STUB EMBED FETCHER ---
// Réponse configurée par URL ; `Missing` par défaut.
#[derive(Default)]
pub struct EmbedFetcherStub {
    outcomes: Mutex<HashMap<String, StubOutcome>>,
    calls: Mutex<Vec<String>>,
    /// Signalé au début de chaque appel
    pub started: Arc<Notify>,
    /// Si présent, chaque appel attend une permission avant de répondre
    pub gate: Option<Arc<Notify>>,
}

impl EmbedFetcherStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gate(gate: Arc<Notify>) -> Self {
        Self { gate: Some(gate), ..Self::default() }
    }

    pub fn respond(self, url: &str, outcome: StubOutcome) -> Self {
        self.set_outcome(url, outcome);
        self
    }

    /// Change la réponse d'une URL en cours de test
    pub fn set_outcome(&self, url: &str, outcome: StubOutcome) {
        self.outcomes.lock().unwrap().insert(url.to_string(), outcome);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EmbedFetcher for EmbedFetcherStub {
    async fn fetch(&self, _platform: EmbedPlatform, url: &str) -> Result<Option<EmbedMetadata>> {
        self.calls.lock().unwrap().push(url.to_string());
        self.started.notify_one();

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let outcome = self.outcomes.lock().unwrap().get(url).cloned().unwrap_or(StubOutcome::Missing);
        match outcome {
            StubOutcome::Found(metadata) => Ok(Some(metadata)),
            StubOutcome::Missing => Ok(None),
            StubOutcome::Fail => Err(DomainError::Infrastructure("embed proxy unreachable".into())),
            StubOutcome::Hang => {
                std::future::pending::<()>().await;
                Ok(None)
            }
        }
    }
}
