//! Admission rules for reservation requests.
//!
//! Rules are evaluated in a fixed order and the first failure wins:
//!
//! 1. the request is present;
//! 2. the check-in date is present;
//! 3. the check-out date is present;
//! 4. the check-in date is not before today;
//! 5. the check-out date is not before the check-in date;
//! 6. at least one person stays.
//!
//! The same rules apply to creation and to updates. On update only the
//! incoming payload is checked, never the stored values.

use chrono::NaiveDate;
use room_reservation_sdk::{Reservation, ReservationDraft};

/// The rule a rejected request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("reservation request is missing")]
    MissingRequest,

    #[error("check-in date is missing")]
    MissingCheckIn,

    #[error("check-out date is missing")]
    MissingCheckOut,

    #[error("check-in date {check_in} is before today ({today})")]
    CheckInInPast { check_in: NaiveDate, today: NaiveDate },

    #[error("check-out date {check_out} is before check-in date {check_in}")]
    CheckOutBeforeCheckIn {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("number of people must be at least 1, got {0}")]
    NoOccupants(i32),
}

impl Rejection {
    /// Stable machine-readable name of the failed rule.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingRequest => "missing_request",
            Self::MissingCheckIn => "missing_check_in",
            Self::MissingCheckOut => "missing_check_out",
            Self::CheckInInPast { .. } => "check_in_in_past",
            Self::CheckOutBeforeCheckIn { .. } => "check_out_before_check_in",
            Self::NoOccupants(_) => "no_occupants",
        }
    }
}

/// An admitted request: every field is present and consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_people: u32,
    pub approved: bool,
}

impl Stay {
    /// Overwrite the mutable fields of `prior`. Identifier, user and room are kept.
    #[must_use]
    pub fn apply_to(self, prior: Reservation) -> Reservation {
        Reservation {
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            number_of_people: self.number_of_people,
            approved: self.approved,
            ..prior
        }
    }
}

/// Decide whether `candidate` is admissible on `today`.
///
/// # Errors
///
/// Returns the first [`Rejection`] in rule order.
pub fn validate(candidate: Option<&ReservationDraft>, today: NaiveDate) -> Result<Stay, Rejection> {
    let draft = candidate.ok_or(Rejection::MissingRequest)?;
    let check_in = draft.check_in_date.ok_or(Rejection::MissingCheckIn)?;
    let check_out = draft.check_out_date.ok_or(Rejection::MissingCheckOut)?;

    if check_in < today {
        return Err(Rejection::CheckInInPast { check_in, today });
    }
    if check_out < check_in {
        return Err(Rejection::CheckOutBeforeCheckIn {
            check_in,
            check_out,
        });
    }

    let number_of_people = u32::try_from(draft.number_of_people)
        .ok()
        .filter(|n| *n >= 1)
        .ok_or(Rejection::NoOccupants(draft.number_of_people))?;

    Ok(Stay {
        check_in_date: check_in,
        check_out_date: check_out,
        number_of_people,
        approved: draft.approved,
    })
}
