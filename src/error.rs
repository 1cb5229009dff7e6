use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Rejections produced by the seat registry. None of them mutate state.
///
/// The `Display` text is the message returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    #[error("Invalid seat ID")]
    InvalidSeatId,

    #[error("Seat already booked")]
    AlreadyBooked,

    #[error("Seat is locked by another user")]
    AlreadyLocked,

    #[error("Seat is not locked")]
    NotLocked,

    #[error("Seat is locked by another user")]
    LockedByOther,

    #[error("Seat not locked by this user")]
    NotLockedByUser,

    #[error("Seat is not booked")]
    NotBooked,

    #[error("Seat not found")]
    NotFound,
}

/// Error type returned by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Reservation(#[from] ReservationError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Reservation(ReservationError::NotFound) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Reservation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
