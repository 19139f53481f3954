use crate::model::reservation::{
    CreateReservationRequest, ReservationResponse, ReservationsResponse, UpdateReservationRequest,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_reservation(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), AppError> {
    req.validate(&())?;

    registry
        .reservation_service()
        .create(req.into())
        .await
        .map(ReservationResponse::from)
        .map(|res| (StatusCode::CREATED, Json(res)))
}

pub async fn show_reservation_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_service()
        .get_all()
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn show_reservation(
    Path(reservation_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_service()
        .get_by_id(&reservation_id)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn show_reservations_by_user(
    Path(user_id): Path<i64>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_service()
        .get_by_user_id(user_id)
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn show_reservations_by_court(
    Path(court_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_service()
        .get_by_court_id(&court_id)
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn update_reservation(
    Path(reservation_id): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateReservationRequest>,
) -> AppResult<Json<ReservationResponse>> {
    req.validate(&())?;

    registry
        .reservation_service()
        .update(&reservation_id, req.into())
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn cancel_reservation(
    Path(reservation_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> Result<StatusCode, AppError> {
    registry
        .reservation_service()
        .cancel(&reservation_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
