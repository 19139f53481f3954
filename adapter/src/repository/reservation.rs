use crate::database::{
    model::reservation::{BookedSlotRow, ReservationRow},
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::{
    id::{CourtId, ReservationId, UserId},
    reservation::{
        event::{CreateReservation, UpdateReservation},
        BookedSlot, Reservation,
    },
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

const SELECT_COLUMNS: &str = r#"
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
    updated_at
"#;

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        let reservation_id = ReservationId::new();
        let row: ReservationRow = sqlx::query_as(&format!(
            r#"
                INSERT INTO reservations
                (reservation_id, court_id, user_id, reserved_on, start_time,
                 end_time, duration_minutes, status, total_price, court_name,
                 user_name)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(reservation_id.raw())
        .bind(event.court_id.as_str())
        .bind(event.user_id.inner())
        .bind(event.date)
        .bind(&event.start_time)
        .bind(&event.end_time)
        .bind(event.duration_minutes)
        .bind(event.status.to_string())
        .bind(event.total_price)
        .bind(&event.court_name)
        .bind(&event.user_name)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(map_slot_write_error)?;

        row.try_into()
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(&format!(
            r#"
                SELECT {SELECT_COLUMNS}
                FROM reservations
                WHERE reservation_id = $1
            "#
        ))
        .bind(reservation_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Reservation::try_from).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(&format!(
            r#"
                SELECT {SELECT_COLUMNS}
                FROM reservations
                ORDER BY reserved_on ASC, start_time ASC
            "#
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(&format!(
            r#"
                SELECT {SELECT_COLUMNS}
                FROM reservations
                WHERE user_id = $1
                ORDER BY reserved_on ASC, start_time ASC
            "#
        ))
        .bind(user_id.inner())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_by_court_id(&self, court_id: &CourtId) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(&format!(
            r#"
                SELECT {SELECT_COLUMNS}
                FROM reservations
                WHERE court_id = $1
                ORDER BY reserved_on ASC, start_time ASC
            "#
        ))
        .bind(court_id.as_str())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn update(&self, event: UpdateReservation) -> AppResult<Reservation> {
        let row: Option<ReservationRow> = sqlx::query_as(&format!(
            r#"
                UPDATE reservations
                SET
                    reserved_on = $2,
                    start_time = $3,
                    end_time = $4,
                    duration_minutes = $5,
                    status = $6,
                    total_price = $7,
                    updated_at = now()
                WHERE reservation_id = $1
                RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(event.reservation_id.raw())
        .bind(event.date)
        .bind(&event.start_time)
        .bind(&event.end_time)
        .bind(event.duration_minutes)
        .bind(event.status.to_string())
        .bind(event.total_price)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(map_slot_write_error)?;

        row.ok_or_else(|| AppError::EntityNotFound("reservation not found".into()))?
            .try_into()
    }

    async fn mark_cancelled(&self, reservation_id: ReservationId) -> AppResult<Reservation> {
        let row: Option<ReservationRow> = sqlx::query_as(&format!(
            r#"
                UPDATE reservations
                SET status = 'cancelled', updated_at = now()
                WHERE reservation_id = $1
                RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(reservation_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.ok_or_else(|| AppError::EntityNotFound("reservation not found".into()))?
            .try_into()
    }

    async fn find_booked_slots(
        &self,
        court_id: &CourtId,
        date: NaiveDate,
    ) -> AppResult<Vec<BookedSlot>> {
        let rows: Vec<BookedSlotRow> = sqlx::query_as(
            r#"
                SELECT start_time, end_time, duration_minutes, status
                FROM reservations
                WHERE court_id = $1
                  AND reserved_on = $2
                  AND status <> 'cancelled'
            "#,
        )
        .bind(court_id.as_str())
        .bind(date)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(BookedSlot::try_from).collect()
    }
}

// The partial unique index on (court_id, reserved_on, start_time) closes the
// check-then-write race between concurrent creations; a violation surfaces
// as the same conflict the availability check reports.
fn map_slot_write_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db) = e {
        if db.is_unique_violation() {
            return AppError::SlotConflict;
        }
    }
    AppError::SpecificOperationError(e)
}
