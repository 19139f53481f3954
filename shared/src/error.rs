use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {}", .0.join("; "))]
    PreconditionFailed(Vec<String>),
    #[error(transparent)]
    ValidationError(#[from] garde::Report),
    #[error("court not available for the selected time slot")]
    SlotConflict,
    #[error("{0}")]
    EntityNotFound(String),
    #[error("cannot update a cancelled reservation")]
    CancelledImmutable,
    #[error("reservation already cancelled")]
    AlreadyCancelled,
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    ExternalServiceError(String),
    #[error("transaction failed")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::PreconditionFailed(_) | AppError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::SlotConflict => StatusCode::CONFLICT,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::CancelledImmutable
            | AppError::AlreadyCancelled
            | AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::ConversionEntityError(_)
            | AppError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
        } else {
            tracing::warn!(error.message = %self, "Request rejected");
        }

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("error"),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_failure_joins_all_messages() {
        let err = AppError::PreconditionFailed(vec![
            "user validation failed: user not found".into(),
            "court validation failed: court not found".into(),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("user validation failed"));
        assert!(msg.contains("court validation failed"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn lifecycle_errors_are_distinguishable() {
        assert_eq!(
            AppError::SlotConflict.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::EntityNotFound("reservation not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::CancelledImmutable.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::AlreadyCancelled.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
