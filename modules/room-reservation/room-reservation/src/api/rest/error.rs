//! REST error mapping for the room-reservation module.

use axum::http::StatusCode;

use super::problem::{FieldViolation, Problem};
use crate::domain::error::DomainError;

/// Map a domain error to an RFC 9457 Problem.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let (status, code, title, detail) = match e {
        DomainError::InvalidReservation { reason } => (
            StatusCode::BAD_REQUEST,
            "ROOM_RESERVATION_INVALID",
            "Invalid reservation",
            format!("{e} ({})", reason.code()),
        ),
        DomainError::Validation { .. } => (
            StatusCode::BAD_REQUEST,
            "ROOM_RESERVATION_VALIDATION",
            "Validation failed",
            e.to_string(),
        ),
        DomainError::UserNotFound { .. } => (
            StatusCode::NOT_FOUND,
            "ROOM_RESERVATION_USER_NOT_FOUND",
            "User not found",
            e.to_string(),
        ),
        DomainError::RoomNotFound { .. } => (
            StatusCode::NOT_FOUND,
            "ROOM_RESERVATION_ROOM_NOT_FOUND",
            "Room not found",
            e.to_string(),
        ),
        DomainError::ReservationNotFound { .. } => (
            StatusCode::NOT_FOUND,
            "ROOM_RESERVATION_NOT_FOUND",
            "Reservation not found",
            e.to_string(),
        ),
        DomainError::RoomInUse { .. } => (
            StatusCode::CONFLICT,
            "ROOM_RESERVATION_ROOM_IN_USE",
            "Room in use",
            e.to_string(),
        ),
        DomainError::EmailAlreadyExists { .. } => (
            StatusCode::CONFLICT,
            "ROOM_RESERVATION_EMAIL_EXISTS",
            "Email already registered",
            e.to_string(),
        ),
        DomainError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            "ROOM_RESERVATION_INVALID_CREDENTIALS",
            "Invalid credentials",
            e.to_string(),
        ),
        DomainError::Storage(err) => {
            tracing::error!(error = ?err, "Storage error in room_reservation");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ROOM_RESERVATION_INTERNAL",
                "Internal Server Error",
                "An internal error occurred".to_owned(),
            )
        }
    };

    let mut problem = Problem::new(status, title, detail)
        .with_code(code)
        .with_instance(instance);

    if let DomainError::Validation { field, message } = e {
        problem = problem.with_errors(vec![FieldViolation {
            field: field.clone(),
            message: message.clone(),
        }]);
    }

    problem
}

/// Implement From<DomainError> for Problem so `?` works in handlers
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/")
    }
}

pub fn unauthorized(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::UNAUTHORIZED, "Unauthorized", detail)
        .with_code("ROOM_RESERVATION_UNAUTHENTICATED")
}

pub fn forbidden(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::FORBIDDEN, "Forbidden", detail).with_code("ROOM_RESERVATION_FORBIDDEN")
}
