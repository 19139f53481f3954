use crate::model::{id::UserId, user::ReservationUser};
use async_trait::async_trait;
use shared::error::AppResult;

/// Lookup capability against the external users service.
#[async_trait]
pub trait UserClient: Send + Sync {
    async fn validate_user(&self, user_id: UserId) -> AppResult<ReservationUser>;
}
