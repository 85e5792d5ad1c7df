use room_reservation_sdk::errors::ReservationError;
use room_reservation_sdk::{ReservationId, RoomId, UserId};

use super::validator::Rejection;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("reservation is invalid: {reason}")]
    InvalidReservation { reason: Rejection },

    #[error("user {id} does not exist")]
    UserNotFound { id: UserId },

    #[error("room {id} does not exist")]
    RoomNotFound { id: RoomId },

    #[error("reservation {id} does not exist")]
    ReservationNotFound { id: ReservationId },

    #[error("Validation error on field '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("room {id} is still referenced by reservations")]
    RoomInUse { id: RoomId },

    #[error("email '{email}' is already registered")]
    EmailAlreadyExists { email: String },

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub const fn invalid_reservation(reason: Rejection) -> Self {
        Self::InvalidReservation { reason }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<DomainError> for ReservationError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidReservation { reason } => {
                Self::invalid_reservation(reason.to_string())
            }
            DomainError::UserNotFound { id } => Self::UserNotFound { id },
            DomainError::RoomNotFound { id } => Self::RoomNotFound { id },
            DomainError::ReservationNotFound { id } => Self::ReservationNotFound { id },
            DomainError::Validation { field, message } => {
                Self::validation(format!("{field}: {message}"))
            }
            e @ (DomainError::RoomInUse { .. } | DomainError::EmailAlreadyExists { .. }) => {
                Self::conflict(e.to_string())
            }
            DomainError::InvalidCredentials => Self::InvalidCredentials,
            DomainError::Storage(_) => Self::internal(),
        }
    }
}
