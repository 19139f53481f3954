use kernel::model::reservation::{BookedSlot, Reservation, ReservationStatus};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;
use uuid::Uuid;

/// One row of the `reservations` table.
#[derive(Debug, sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: Uuid,
    pub court_id: String,
    pub user_id: i64,
    pub reserved_on: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i32,
    pub status: String,
    pub total_price: f64,
    pub court_name: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(value: ReservationRow) -> Result<Self, Self::Error> {
        let ReservationRow {
            reservation_id,
            court_id,
            user_id,
            reserved_on,
            start_time,
            end_time,
            duration_minutes,
            status,
            total_price,
            court_name,
            user_name,
            created_at,
            updated_at,
        } = value;
        let status = ReservationStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!("unknown reservation status: {status}"))
        })?;
        Ok(Reservation {
            id: reservation_id.into(),
            court_id: court_id.into(),
            user_id: user_id.into(),
            date: reserved_on,
            start_time,
            end_time,
            duration_minutes,
            status,
            total_price,
            court_name,
            user_name,
            created_at,
            updated_at,
        })
    }
}

/// Projection used by the overlap check.
#[derive(Debug, sqlx::FromRow)]
pub struct BookedSlotRow {
    pub start_time: String,
    pub end_time: Option<String>,
    pub duration_minutes: Option<i32>,
    pub status: String,
}

impl TryFrom<BookedSlotRow> for BookedSlot {
    type Error = AppError;

    fn try_from(value: BookedSlotRow) -> Result<Self, Self::Error> {
        let status = ReservationStatus::from_str(&value.status).map_err(|_| {
            AppError::ConversionEntityError(format!(
                "unknown reservation status: {}",
                value.status
            ))
        })?;
        Ok(BookedSlot {
            start_time: value.start_time,
            end_time: value.end_time,
            duration_minutes: value.duration_minutes,
            status,
        })
    }
}
