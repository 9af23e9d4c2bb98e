mod profile_editor;

pub use profile_editor::{ProfileEditor, TESTIMONIALS_TABLE};
