mod entry_id;
mod url;
mod user_id;
mod value_object;

pub use entry_id::EntryId;
pub use url::Url;
pub use user_id::UserId;
pub use value_object::ValueObject;
