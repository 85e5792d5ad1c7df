//! Room Reservation Module Implementation
//!
//! The public API is defined in `room-reservation-sdk` and re-exported here.

pub use room_reservation_sdk::{
    NewReservation, NewRoom, NewUser, Reservation, ReservationDetails, ReservationDraft,
    ReservationError, Role, Room, RoomReservationApi, User,
};

pub mod module;
pub use module::RoomReservationModule;

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
