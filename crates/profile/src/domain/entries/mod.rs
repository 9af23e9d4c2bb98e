mod appointment_settings;
mod certification;
mod dribbble_profile;
mod education;
mod experience;
mod featured_video;
mod gallery_item;
mod highlight_entry;
mod lenient;
mod profile_entry;
mod project;
mod publication;
mod skill;
mod testimonial;


pub use appointment_settings::AppointmentSettings;
pub use certification::Certification;
pub use dribbble_profile::DribbbleProfile;
pub use education::Education;
pub use experience::Experience;
pub use featured_video::FeaturedVideo;
pub use gallery_item::GalleryItem;
pub use highlight_entry::HighlightEntry;
pub use profile_entry::{ProfileEntry, ProfileRecordField};
pub use project::Project;
pub use publication::Publication;
pub use skill::Skill;
pub use testimonial::Testimonial;
