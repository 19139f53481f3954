use crate::model::id::{CourtId, ReservationId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub mod event;

#[derive(Debug, Clone, Serialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub court_id: CourtId,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i32,
    pub status: ReservationStatus,
    pub total_price: f64,
    // Display caches captured from the collaborator responses.
    pub court_name: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    /// `cancelled` is terminal; every other status may still be mutated.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReservationStatus::Cancelled)
    }
}

/// Slot occupied by an existing non-cancelled reservation, as returned by
/// the store for the overlap check. `end_time` is only consulted when the
/// stored duration is absent or zero.
#[derive(Debug, Clone)]
pub struct BookedSlot {
    pub start_time: String,
    pub end_time: Option<String>,
    pub duration_minutes: Option<i32>,
    pub status: ReservationStatus,
}
