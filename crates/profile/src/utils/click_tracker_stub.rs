// crates/profile/src/utils/click_tracker_stub.rs

use std::sync::Mutex;
use shared_kernel::errors::{DomainError, Result};

use crate::application::ports::{ClickTracker, SocialClick};

// --- STUB CLICK TRACKER ---
#[derive(Default)]
pub struct ClickTrackerStub {
    pub tracked: Mutex<Vec<SocialClick>>,
    pub error_to_return: Mutex<Option<DomainError>>,
}

impl ClickTrackerStub {
    pub fn failing() -> Self {
        Self {
            error_to_return: Mutex::new(Some(DomainError::Infrastructure("analytics down".into()))),
            ..Self::default()
        }
    }

    pub fn tracked(&self) -> Vec<SocialClick> {
        self.tracked.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ClickTracker for ClickTrackerStub {
    async fn track(&self, click: &SocialClick) -> Result<()> {
        self.tracked.lock().unwrap().push(click.clone());
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}
