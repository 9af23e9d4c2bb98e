// crates/profile/src/application/inspect_highlights/inspect_highlights_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

use crate::application::inspect_highlights::{HighlightReport, InspectHighlightsCommand};
use crate::domain::repositories::ProfileRepository;

pub struct InspectHighlightsUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl InspectHighlightsUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, cmd: InspectHighlightsCommand) -> Result<HighlightReport> {
        let profile = self.repo.find_by_user(&cmd.user_id)
            .await?
            .ok_or_not_found(cmd.user_id)?;

        let report = HighlightReport::from_record(&profile);
        tracing::debug!(user_id = %cmd.user_id, entries = report.total_entries(), "Highlights inspected");
        Ok(report)
    }
}
