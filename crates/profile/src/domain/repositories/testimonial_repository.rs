// crates/profile/src/domain/repositories/testimonial_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::UserId;
use shared_kernel::errors::Result;

use crate::domain::entries::Testimonial;

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Testimonial>>;
    async fn replace_for_user(&self, user_id: &UserId, testimonials: &[Testimonial]) -> Result<()>;
}
