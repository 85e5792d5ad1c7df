//! `RoomReservationApi` trait definition.
//!
//! This trait defines the public in-process API of the room-reservation
//! module. Authorization is a transport concern, so no security context is
//! threaded through these calls.

use async_trait::async_trait;

use crate::errors::ReservationError;
use crate::models::{
    NewReservation, Reservation, ReservationDetails, ReservationDraft, ReservationId, Room,
    RoomId, User, UserId,
};

/// Public API trait for the room-reservation module.
///
/// ```ignore
/// let client: Arc<dyn RoomReservationApi> = module.client();
/// let reservation = client.get_reservation(42).await?;
/// ```
#[async_trait]
pub trait RoomReservationApi: Send + Sync {
    /// Validate and store a new reservation.
    /// `None` stands for an absent request body and is always rejected.
    async fn create_reservation(
        &self,
        request: Option<NewReservation>,
    ) -> Result<ReservationDetails, ReservationError>;

    /// Get a single reservation by ID.
    async fn get_reservation(&self, id: ReservationId) -> Result<Reservation, ReservationError>;

    /// List every stored reservation.
    async fn list_reservations(&self) -> Result<Vec<Reservation>, ReservationError>;

    /// Replace dates, occupant count and approval of an existing reservation.
    async fn update_reservation(
        &self,
        id: ReservationId,
        draft: Option<ReservationDraft>,
    ) -> Result<Reservation, ReservationError>;

    /// Delete a reservation and return its last-known value.
    async fn cancel_reservation(&self, id: ReservationId)
    -> Result<Reservation, ReservationError>;

    /// Look up a user profile in the directory.
    async fn get_user(&self, id: UserId) -> Result<User, ReservationError>;

    /// Look up a room in the catalog.
    async fn get_room(&self, id: RoomId) -> Result<Room, ReservationError>;
}
