mod change_feed;
mod media_storage;
mod profile_repository;
mod testimonial_repository;

pub use change_feed::{ChangeFeed, ChangeKind, ChangeNotification};
pub use media_storage::MediaStorage;
pub use profile_repository::ProfileRepository;
pub use testimonial_repository::TestimonialRepository;

#[cfg(test)]
mod change_feed_stub;
#[cfg(test)]
mod media_storage_stub;
#[cfg(test)]
mod profile_repository_stub;
#[cfg(test)]
mod testimonial_repository_stub;

#[cfg(test)]
pub use change_feed_stub::ChangeFeedStub;
#[cfg(test)]
pub use media_storage_stub::MediaStorageStub;
#[cfg(test)]
pub use profile_repository_stub::ProfileRepositoryStub;
#[cfg(test)]
pub use testimonial_repository_stub::TestimonialRepositoryStub;
