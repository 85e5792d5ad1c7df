//! Public models for the room-reservation module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the room-reservation module and its consumers. Reservations
//! reference users and rooms by identifier only; resolution happens inside
//! the module through its directory and catalog.

use std::fmt;

use chrono::NaiveDate;

/// Store-assigned reservation identifier.
pub type ReservationId = i64;
/// Store-assigned user identifier.
pub type UserId = i64;
/// Store-assigned room identifier.
pub type RoomId = i64;

/// A stored booking of one room by one user over a date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: ReservationId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_people: u32,
    pub approved: bool,
}

/// The mutable part of a reservation request, as submitted by a caller.
///
/// Dates are optional and the occupant count is signed because the payload
/// is unchecked; the module's validator decides whether it is admissible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReservationDraft {
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub number_of_people: i32,
    pub approved: bool,
}

/// Request to book `room_id` for `user_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub user_id: UserId,
    pub room_id: RoomId,
    pub draft: ReservationDraft,
}

/// A freshly created reservation together with the entities it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub user: User,
    pub room: Room,
}

/// Role tag distinguishing ordinary users from administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile as exposed by the directory. Credentials are never part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub role: Role,
}

/// Registration data for a new user.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

/// A bookable room from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub max_people: u32,
}

/// Unchecked room attributes used for both registration and full replacement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewRoom {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub max_people: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_debug_hides_password() {
        let user = NewUser {
            name: "Harry".to_owned(),
            email: "harry@example.com".to_owned(),
            password: "hunter2".to_owned(),
            phone_number: "010-0000-0000".to_owned(),
        };

        let debug = format!("{user:?}");
        assert!(debug.contains("harry@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn role_defaults_to_user() {
        assert_eq!(Role::default(), Role::User);
        assert!(!Role::User.is_admin());
        assert!(Role::Admin.is_admin());
        assert_eq!(Role::Admin.to_string(), "admin");
    }
}
