use crate::model::{court::Court, id::CourtId};
use async_trait::async_trait;
use shared::error::AppResult;

/// Lookup capability against the external courts service.
#[async_trait]
pub trait CourtClient: Send + Sync {
    /// Resolves a court that exists and is enabled for booking. A disabled
    /// court surfaces as an error, never as a `Court`.
    async fn validate_court(&self, court_id: &CourtId) -> AppResult<Court>;
}
