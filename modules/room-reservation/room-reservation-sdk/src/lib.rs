//! Room Reservation SDK
//!
//! This crate provides the public API for the room-reservation module:
//! - `RoomReservationApi` trait for in-process consumers
//! - Model types (`Reservation`, `ReservationDraft`, `User`, `Room`, ...)
//! - Error type (`ReservationError`)
//!
//! ```ignore
//! let client: Arc<dyn RoomReservationApi> = module.client();
//! let booked = client.create_reservation(Some(request)).await?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::RoomReservationApi;
pub use errors::ReservationError;
pub use models::{
    NewReservation, NewRoom, NewUser, Reservation, ReservationDetails, ReservationDraft,
    ReservationId, Role, Room, RoomId, User, UserId,
};
