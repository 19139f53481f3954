use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::reservation::{Reservation, ReservationStatus};
use kernel::service::reservation::{CreateReservationCommand, UpdateReservationCommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(length(min = 1))]
    pub court_id: String,
    #[garde(range(min = 1))]
    pub user_id: i64,
    #[garde(length(min = 1))]
    pub date: String,
    #[garde(length(min = 1))]
    pub start_time: String,
    #[garde(length(min = 1))]
    pub end_time: String,
}

impl From<CreateReservationRequest> for CreateReservationCommand {
    fn from(value: CreateReservationRequest) -> Self {
        let CreateReservationRequest {
            court_id,
            user_id,
            date,
            start_time,
            end_time,
        } = value;
        CreateReservationCommand {
            court_id,
            user_id,
            date,
            start_time,
            end_time,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    #[garde(inner(length(min = 1)))]
    pub date: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub start_time: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub end_time: Option<String>,
    #[garde(skip)]
    pub status: Option<ReservationStatus>,
}

impl From<UpdateReservationRequest> for UpdateReservationCommand {
    fn from(value: UpdateReservationRequest) -> Self {
        let UpdateReservationRequest {
            date,
            start_time,
            end_time,
            status,
        } = value;
        UpdateReservationCommand {
            date,
            start_time,
            end_time,
            status,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: String,
    pub court_id: String,
    pub user_id: i64,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i32,
    pub status: ReservationStatus,
    pub total_price: f64,
    pub court_name: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            id,
            court_id,
            user_id,
            date,
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
        ReservationResponse {
            id: id.to_string(),
            court_id: court_id.to_string(),
            user_id: user_id.inner(),
            date,
            start_time,
            end_time,
            duration_minutes,
            status,
            total_price,
            court_name,
            user_name,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
    pub total: usize,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        let total = value.len();
        let items = value.into_iter().map(ReservationResponse::from).collect();
        ReservationsResponse { items, total }
    }
}
