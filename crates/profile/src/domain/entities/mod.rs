mod profile_record;

pub use profile_record::ProfileRecord;
