// crates/profile/src/domain/repositories/testimonial_repository_stub.rs

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entries::Testimonial;
use crate::domain::repositories::TestimonialRepository;

// --- STUB TESTIMONIAL REPOSITORY ---
#[derive(Default)]
pub struct TestimonialRepositoryStub {
    pub testimonials: Mutex<Vec<Testimonial>>,
    pub list_calls: AtomicUsize,
    pub error_to_return: Mutex<Option<DomainError>>,
}

impl TestimonialRepositoryStub {
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TestimonialRepository for TestimonialRepositoryStub {
    async fn list_for_user(&self, _user_id: &UserId) -> Result<Vec<Testimonial>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.testimonials.lock().unwrap().clone())
    }

    async fn replace_for_user(&self, _user_id: &UserId, testimonials: &[Testimonial]) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        *self.testimonials.lock().unwrap() = testimonials.to_vec();
        Ok(())
    }
}
