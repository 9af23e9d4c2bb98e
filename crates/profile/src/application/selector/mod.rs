mod editing_state;
mod list_selector;

pub use editing_state::EditingState;
pub use list_selector::{ListSelector, OnChange};
