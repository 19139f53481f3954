use crate::client::{court::CourtClient, user::UserClient};
use crate::concurrent::{self, Check};
use crate::messaging::{Event, EventPublisher, EventType};
use crate::model::{
    court::Court,
    id::{CourtId, ReservationId, UserId},
    reservation::{
        event::{CreateReservation, UpdateReservation},
        Reservation, ReservationStatus,
    },
    user::ReservationUser,
};
use crate::repository::reservation::ReservationRepository;
use crate::schedule;
use chrono::{NaiveDate, Utc};
use derive_new::new;
use shared::error::{AppError, AppResult};
use std::str::FromStr;
use std::sync::Arc;

/// Reservation lifecycle: validation fan-out, slot normalization, pricing,
/// availability and persistence, with best-effort event publication.
#[derive(new, Clone)]
pub struct ReservationService {
    repository: Arc<dyn ReservationRepository>,
    user_client: Arc<dyn UserClient>,
    court_client: Arc<dyn CourtClient>,
    event_publisher: Arc<dyn EventPublisher>,
}

#[derive(Debug, Clone, new)]
pub struct CreateReservationCommand {
    pub court_id: String,
    pub user_id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, new)]
pub struct UpdateReservationCommand {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub status: Option<ReservationStatus>,
}

/// Typed result slot of one precondition check. Each check fills exactly one
/// variant, read only after all checks have joined.
enum Checked {
    User(ReservationUser),
    Court(Court),
    Duration(u32),
    Date(NaiveDate),
}

impl ReservationService {
    pub async fn create(&self, cmd: CreateReservationCommand) -> AppResult<Reservation> {
        let (all_valid, failures, outcomes) = self.run_precondition_checks(&cmd).await;
        if !all_valid {
            return Err(AppError::PreconditionFailed(failures));
        }

        let mut user = None;
        let mut court = None;
        let mut duration = None;
        let mut date = None;
        for outcome in outcomes {
            match outcome {
                Checked::User(u) => user = Some(u),
                Checked::Court(c) => court = Some(c),
                Checked::Duration(d) => duration = Some(d),
                Checked::Date(d) => date = Some(d),
            }
        }
        let user = user.ok_or_else(|| missing_check_result("user"))?;
        let court = court.ok_or_else(|| missing_check_result("court"))?;
        let duration = duration.ok_or_else(|| missing_check_result("duration"))?;
        let date = date.ok_or_else(|| missing_check_result("date"))?;

        // Alignment depends on the court's category, so the slot is
        // normalized once the court has been resolved.
        let slot =
            schedule::ensure_valid_slot(&court.category, &cmd.start_time, Some(&cmd.end_time))?;

        let total_price = calculate_price(court.price, duration);

        // Kept immediately before the insert: the check-then-write pair is
        // not atomic, and the store's unique index is the backstop for
        // concurrent creations racing on the same slot.
        let court_id = CourtId::from(cmd.court_id);
        let booked = self.repository.find_booked_slots(&court_id, date).await?;
        if !schedule::slot_is_available(&booked, slot.start_minutes, slot.end_minutes)? {
            return Err(AppError::SlotConflict);
        }

        let created = self
            .repository
            .create(CreateReservation::new(
                court_id,
                UserId::from(cmd.user_id),
                date,
                slot.start_time,
                slot.end_time,
                duration as i32,
                ReservationStatus::Confirmed,
                total_price,
                court.name,
                user.display_name(),
            ))
            .await?;

        self.publish(EventType::Create, &created).await;

        Ok(created)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Reservation> {
        let reservation_id = ReservationId::from_str(id)?;
        self.repository
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("reservation not found".into()))
    }

    pub async fn get_all(&self) -> AppResult<Vec<Reservation>> {
        self.repository.find_all().await
    }

    pub async fn get_by_user_id(&self, user_id: i64) -> AppResult<Vec<Reservation>> {
        self.repository.find_by_user_id(UserId::from(user_id)).await
    }

    pub async fn get_by_court_id(&self, court_id: &str) -> AppResult<Vec<Reservation>> {
        self.repository
            .find_by_court_id(&CourtId::from(court_id))
            .await
    }

    pub async fn update(&self, id: &str, cmd: UpdateReservationCommand) -> AppResult<Reservation> {
        let reservation_id = ReservationId::from_str(id)?;
        let mut existing = self
            .repository
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("reservation not found".into()))?;

        if existing.status.is_terminal() {
            return Err(AppError::CancelledImmutable);
        }

        let date_changed = cmd.date.is_some();
        let times_changed = cmd.start_time.is_some() || cmd.end_time.is_some();

        if let Some(date) = cmd.date {
            existing.date =
                schedule::parse_date(&date).map_err(AppError::UnprocessableEntity)?;
        }
        if let Some(start_time) = cmd.start_time {
            existing.start_time = start_time;
        }
        if let Some(end_time) = cmd.end_time {
            existing.end_time = end_time;
        }
        if let Some(status) = cmd.status {
            existing.status = status;
        }

        if times_changed {
            let duration =
                schedule::calculate_duration(&existing.start_time, &existing.end_time)?;
            existing.duration_minutes = duration as i32;

            let court = self.court_client.validate_court(&existing.court_id).await?;
            existing.total_price = calculate_price(court.price, duration);
        }

        if date_changed || times_changed {
            // The candidate set still contains the row being moved, so a
            // target slot overlapping the reservation's current one conflicts.
            let start = schedule::normalize_slot_minutes(&existing.start_time)?;
            let end = schedule::normalize_slot_minutes(&existing.end_time)?;
            let booked = self
                .repository
                .find_booked_slots(&existing.court_id, existing.date)
                .await?;
            if !schedule::slot_is_available(&booked, start, end)? {
                return Err(AppError::SlotConflict);
            }
        }

        let updated = self
            .repository
            .update(UpdateReservation::new(
                reservation_id,
                existing.date,
                existing.start_time,
                existing.end_time,
                existing.duration_minutes,
                existing.status,
                existing.total_price,
            ))
            .await?;

        self.publish(EventType::Update, &updated).await;

        Ok(updated)
    }

    pub async fn cancel(&self, id: &str) -> AppResult<()> {
        let reservation_id = ReservationId::from_str(id)?;
        let existing = self
            .repository
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("reservation not found".into()))?;

        if existing.status.is_terminal() {
            return Err(AppError::AlreadyCancelled);
        }

        let cancelled = self.repository.mark_cancelled(reservation_id).await?;

        self.publish(EventType::Cancel, &cancelled).await;

        Ok(())
    }

    /// Launches the four independent precondition checks and joins them all.
    async fn run_precondition_checks(
        &self,
        cmd: &CreateReservationCommand,
    ) -> (bool, Vec<String>, Vec<Checked>) {
        let user_check = {
            let client = Arc::clone(&self.user_client);
            let user_id = UserId::from(cmd.user_id);
            Check::new(
                "user_validation",
                Box::pin(async move {
                    client
                        .validate_user(user_id)
                        .await
                        .map(Checked::User)
                        .map_err(|e| format!("user validation failed: {e}"))
                }),
            )
        };

        let court_check = {
            let client = Arc::clone(&self.court_client);
            let court_id = CourtId::from(cmd.court_id.clone());
            Check::new(
                "court_validation",
                Box::pin(async move {
                    client
                        .validate_court(&court_id)
                        .await
                        .map(Checked::Court)
                        .map_err(|e| format!("court validation failed: {e}"))
                }),
            )
        };

        let duration_check = {
            let start_time = cmd.start_time.clone();
            let end_time = cmd.end_time.clone();
            Check::new(
                "duration_calculation",
                Box::pin(async move {
                    schedule::calculate_duration(&start_time, &end_time)
                        .map(Checked::Duration)
                        .map_err(|e| format!("duration calculation failed: {e}"))
                }),
            )
        };

        let date_check = {
            let date = cmd.date.clone();
            Check::new(
                "date_parsing",
                Box::pin(async move {
                    let parsed = schedule::parse_date(&date)
                        .map_err(|e| format!("date parsing failed: {e}"))?;
                    if parsed < Utc::now().date_naive() {
                        return Err("cannot make reservations for past dates".to_string());
                    }
                    Ok(Checked::Date(parsed))
                }),
            )
        };

        concurrent::run_checks(vec![user_check, court_check, duration_check, date_check]).await
    }

    /// Best-effort: a publish failure is logged, never surfaced, and the
    /// already committed mutation stays committed.
    async fn publish(&self, event_type: EventType, reservation: &Reservation) {
        match Event::for_reservation(event_type, reservation) {
            Ok(event) => {
                if let Err(e) = self.event_publisher.publish(event).await {
                    tracing::warn!(
                        reservation_id = %reservation.id,
                        %event_type,
                        error = %e,
                        "failed to publish reservation event"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    reservation_id = %reservation.id,
                    error = %e,
                    "failed to serialize reservation event"
                );
            }
        }
    }
}

/// The listed court price covers the whole turn; duration does not scale it.
fn calculate_price(price_per_turn: f64, _duration_minutes: u32) -> f64 {
    price_per_turn
}

fn missing_check_result(name: &str) -> AppError {
    AppError::UnexpectedError(anyhow::anyhow!(
        "validation reported success but the {name} result slot is empty"
    ))
}
