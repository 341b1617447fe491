use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Internal server error")]
    Internal,
    #[error(transparent)]
    Reservation(#[from] ReservationError),
}

/// Outcomes of the availability and reservation resolver. All are recoverable
/// by the caller.
#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("Requested range is invalid")]
    InvalidRange,
    #[error("Spot has no availability defined")]
    NoAvailabilityDefined,
    #[error("Requested range is outside the spot's availability")]
    OutsideAvailability,
    #[error("Requested range conflicts with an existing reservation")]
    ConflictingReservation,
    #[error("Spot not found")]
    SpotNotFound,
    #[error("Reservation not found")]
    NotFound,
    #[error("Not permitted")]
    NotPermitted,
    #[error("Store error: {0}")]
    Store(Box<AppError>),
}

impl From<AppError> for ReservationError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Reservation(inner) => inner,
            other => ReservationError::Store(Box::new(other)),
        }
    }
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Database(e) => {
                if let Some(db_err) = e.as_database_error() {
                    let code = db_err.code().unwrap_or_default();

                    // 2067 = SQLite Unique Constraint
                    if code == "2067" {
                        return (StatusCode::CONFLICT, "Resource already exists (duplicate entry)".to_string());
                    }
                }

                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string()),
            AppError::Reservation(err) => match err {
                ReservationError::InvalidRange => (StatusCode::BAD_REQUEST, err.to_string()),
                ReservationError::NoAvailabilityDefined
                | ReservationError::OutsideAvailability
                | ReservationError::ConflictingReservation => (StatusCode::CONFLICT, err.to_string()),
                ReservationError::SpotNotFound | ReservationError::NotFound => (StatusCode::NOT_FOUND, err.to_string()),
                ReservationError::NotPermitted => (StatusCode::FORBIDDEN, err.to_string()),
                ReservationError::Store(inner) => inner.status_and_message(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
