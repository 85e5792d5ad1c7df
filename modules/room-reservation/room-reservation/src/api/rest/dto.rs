//! REST DTOs for the room-reservation module.

use axum::body::Bytes;
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use room_reservation_sdk::{
    NewReservation, NewRoom, NewUser, Reservation, ReservationDetails, ReservationDraft,
    ReservationId, Role, Room, RoomId, User, UserId,
};

use super::problem::{ApiResult, Problem};

/// Decode a JSON body that may be absent. An empty body and a literal
/// `null` both yield `None`.
///
/// # Errors
///
/// Returns a 400 Problem when the body is not valid JSON for `T`.
pub fn optional_json<T: DeserializeOwned>(body: &Bytes) -> ApiResult<Option<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body).map_err(malformed_body)
}

/// Decode a JSON body that must be present.
///
/// # Errors
///
/// Returns a 400 Problem when the body is empty or not valid JSON for `T`.
pub fn json_body<T: DeserializeOwned>(body: &Bytes) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(malformed_body)
}

fn malformed_body(e: serde_json::Error) -> Problem {
    Problem::new(StatusCode::BAD_REQUEST, "Malformed request body", e.to_string())
        .with_code("ROOM_RESERVATION_MALFORMED_BODY")
}

/// Payload of `POST /api/reservations`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReservationRequest {
    pub user_id: UserId,
    pub room_id: RoomId,
    #[serde(default)]
    pub check_in_date: Option<NaiveDate>,
    #[serde(default)]
    pub check_out_date: Option<NaiveDate>,
    #[serde(default)]
    pub number_of_people: i32,
    #[serde(default)]
    pub approved: bool,
}

impl From<CreateReservationRequest> for NewReservation {
    fn from(req: CreateReservationRequest) -> Self {
        Self {
            user_id: req.user_id,
            room_id: req.room_id,
            draft: ReservationDraft {
                check_in_date: req.check_in_date,
                check_out_date: req.check_out_date,
                number_of_people: req.number_of_people,
                approved: req.approved,
            },
        }
    }
}

/// Payload of `PUT /api/reservations/{id}`. User and room are not changeable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReservationRequest {
    #[serde(default)]
    pub check_in_date: Option<NaiveDate>,
    #[serde(default)]
    pub check_out_date: Option<NaiveDate>,
    #[serde(default)]
    pub number_of_people: i32,
    #[serde(default)]
    pub approved: bool,
}

impl From<UpdateReservationRequest> for ReservationDraft {
    fn from(req: UpdateReservationRequest) -> Self {
        Self {
            check_in_date: req.check_in_date,
            check_out_date: req.check_out_date,
            number_of_people: req.number_of_people,
            approved: req.approved,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDto {
    pub id: ReservationId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_people: u32,
    pub approved: bool,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            room_id: r.room_id,
            check_in_date: r.check_in_date,
            check_out_date: r.check_out_date,
            number_of_people: r.number_of_people,
            approved: r.approved,
        }
    }
}

/// Creation response: the reservation plus the entities it references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationDetailsDto {
    #[serde(flatten)]
    pub reservation: ReservationDto,
    pub user: UserDto,
    pub room: RoomDto,
}

impl From<ReservationDetails> for ReservationDetailsDto {
    fn from(d: ReservationDetails) -> Self {
        Self {
            reservation: d.reservation.into(),
            user: d.user.into(),
            room: d.room.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleDto {
    User,
    Admin,
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        match role {
            Role::User => Self::User,
            Role::Admin => Self::Admin,
        }
    }
}

/// Public user profile. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub role: RoleDto,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            phone_number: u.phone_number,
            role: u.role.into(),
        }
    }
}

#[derive(Clone, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone_number: String,
}

impl From<RegisterUserRequest> for NewUser {
    fn from(req: RegisterUserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
            phone_number: req.phone_number,
        }
    }
}

#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDto {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub max_people: u32,
}

impl From<Room> for RoomDto {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            price: r.price,
            max_people: r.max_people,
        }
    }
}

/// Payload of `POST /api/rooms` and `PUT /api/rooms/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    pub max_people: i32,
}

impl From<RoomRequest> for NewRoom {
    fn from(req: RoomRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            max_people: req.max_people,
        }
    }
}
