use crate::model::{
    id::{CourtId, ReservationId, UserId},
    reservation::{
        event::{CreateReservation, UpdateReservation},
        BookedSlot, Reservation,
    },
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Persists a new reservation and returns the stored record with its
    /// assigned id and timestamps.
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    async fn find_all(&self) -> AppResult<Vec<Reservation>>;
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Reservation>>;
    async fn find_by_court_id(&self, court_id: &CourtId) -> AppResult<Vec<Reservation>>;
    async fn update(&self, event: UpdateReservation) -> AppResult<Reservation>;
    /// Soft delete: flips the status to cancelled, preserving the row.
    async fn mark_cancelled(&self, reservation_id: ReservationId) -> AppResult<Reservation>;
    /// Non-cancelled slots for a court on a date, used by the overlap check.
    async fn find_booked_slots(
        &self,
        court_id: &CourtId,
        date: NaiveDate,
    ) -> AppResult<Vec<BookedSlot>>;
}
