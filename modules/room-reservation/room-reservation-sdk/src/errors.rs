//! Error types for the room-reservation SDK.

use thiserror::Error;

use crate::models::{ReservationId, RoomId, UserId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("reservation is invalid: {reason}")]
    InvalidReservation { reason: String },

    #[error("user {id} does not exist")]
    UserNotFound { id: UserId },

    #[error("room {id} does not exist")]
    RoomNotFound { id: RoomId },

    #[error("reservation {id} does not exist")]
    ReservationNotFound { id: ReservationId },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Internal error")]
    Internal,
}

impl ReservationError {
    #[must_use]
    pub fn invalid_reservation(reason: impl Into<String>) -> Self {
        Self::InvalidReservation {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }

    /// True for the error kinds that mean "the targeted entity is absent".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound { .. } | Self::RoomNotFound { .. } | Self::ReservationNotFound { .. }
        )
    }
}
