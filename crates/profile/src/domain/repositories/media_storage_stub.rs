// crates/profile/src/domain/repositories/media_storage_stub.rs

use std::sync::Mutex;
use shared_kernel::domain::value_objects::Url;
use shared_kernel::errors::Result;

use crate::domain::repositories::MediaStorage;

// --- STUB MEDIA STORAGE ---
#[derive(Default)]
pub struct MediaStorageStub {
    pub existing_buckets: Vec<String>,
    pub probed: Mutex<Vec<String>>,
    pub uploads: Mutex<Vec<(String, String, String)>>,
}

impl MediaStorageStub {
    pub fn with_buckets(buckets: &[&str]) -> Self {
        Self {
            existing_buckets: buckets.iter().map(|b| b.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }

    pub fn uploads(&self) -> Vec<(String, String, String)> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MediaStorage for MediaStorageStub {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        self.probed.lock().unwrap().push(bucket.to_string());
        Ok(self.existing_buckets.iter().any(|b| b == bucket))
    }

    async fn upload(&self, bucket: &str, path: &str, _bytes: Vec<u8>, mime_type: &str) -> Result<Url> {
        self.uploads.lock().unwrap().push((bucket.to_string(), path.to_string(), mime_type.to_string()));
        Ok(Url::new_unchecked(format!("https://storage.test/{bucket}/{path}")))
    }
}
