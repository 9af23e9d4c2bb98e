mod highlight_report;
mod inspect_highlights_command;
mod inspect_highlights_use_case;

pub use highlight_report::{FieldInspection, HighlightReport};
pub use inspect_highlights_command::InspectHighlightsCommand;
pub use inspect_highlights_use_case::InspectHighlightsUseCase;
