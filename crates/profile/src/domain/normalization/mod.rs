mod field_normalizer;
mod predicates;

#[cfg(test)]
mod field_normalizer_test;

pub use field_normalizer::{normalize_entries, normalize_list, normalize_object, normalize_record};
pub use predicates::{has_truthy, has_truthy_url, is_object, is_truthy};
