use crate::types::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Date is required")]
    MissingParameter,
    #[error("All fields are required")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("This time slot is already booked")]
    SlotConflict,
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
    #[error("Not allowed by CORS")]
    OriginNotAllowed,
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl BookingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookingError::MissingParameter
            | BookingError::MissingFields
            | BookingError::InvalidEmail
            | BookingError::SlotConflict
            | BookingError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            BookingError::OriginNotAllowed => StatusCode::FORBIDDEN,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            // Internal details stay in the log
            BookingError::Internal(detail) => {
                error!(%detail, "Request failed with an internal error");
                String::from("Internal server error")
            }
            err => {
                warn!(%err, "Request rejected");
                err.to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
