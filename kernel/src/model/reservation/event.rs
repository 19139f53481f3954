use crate::model::id::{CourtId, ReservationId, UserId};
use crate::model::reservation::ReservationStatus;
use chrono::NaiveDate;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateReservation {
    pub court_id: CourtId,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i32,
    pub status: ReservationStatus,
    pub total_price: f64,
    pub court_name: String,
    pub user_name: String,
}

#[derive(Debug, new)]
pub struct UpdateReservation {
    pub reservation_id: ReservationId,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i32,
    pub status: ReservationStatus,
    pub total_price: f64,
}
