//! Local client implementing the `RoomReservationApi` trait.

use std::sync::Arc;

use async_trait::async_trait;
use room_reservation_sdk::{
    NewReservation, Reservation, ReservationDetails, ReservationDraft, ReservationError,
    ReservationId, Room, RoomId, RoomReservationApi, User, UserId,
};

use crate::domain::service::{ReservationService, RoomService, UserService};

/// In-process client for the room-reservation module.
///
/// Delegates to the domain services and converts domain errors into the
/// SDK's [`ReservationError`].
pub struct RoomReservationLocalClient {
    reservations: Arc<ReservationService>,
    users: Arc<UserService>,
    rooms: Arc<RoomService>,
}

impl RoomReservationLocalClient {
    #[must_use]
    pub fn new(
        reservations: Arc<ReservationService>,
        users: Arc<UserService>,
        rooms: Arc<RoomService>,
    ) -> Self {
        Self {
            reservations,
            users,
            rooms,
        }
    }
}

#[async_trait]
impl RoomReservationApi for RoomReservationLocalClient {
    async fn create_reservation(
        &self,
        request: Option<NewReservation>,
    ) -> Result<ReservationDetails, ReservationError> {
        self.reservations
            .create_reservation(request)
            .await
            .map_err(ReservationError::from)
    }

    async fn get_reservation(&self, id: ReservationId) -> Result<Reservation, ReservationError> {
        self.reservations
            .get_reservation(id)
            .await
            .map_err(ReservationError::from)
    }

    async fn list_reservations(&self) -> Result<Vec<Reservation>, ReservationError> {
        self.reservations
            .list_reservations()
            .await
            .map_err(ReservationError::from)
    }

    async fn update_reservation(
        &self,
        id: ReservationId,
        draft: Option<ReservationDraft>,
    ) -> Result<Reservation, ReservationError> {
        self.reservations
            .update_reservation(id, draft)
            .await
            .map_err(ReservationError::from)
    }

    async fn cancel_reservation(&self, id: ReservationId) -> Result<Reservation, ReservationError> {
        self.reservations
            .cancel_reservation(id)
            .await
            .map_err(ReservationError::from)
    }

    async fn get_user(&self, id: UserId) -> Result<User, ReservationError> {
        self.users.get_user(id).await.map_err(ReservationError::from)
    }

    async fn get_room(&self, id: RoomId) -> Result<Room, ReservationError> {
        self.rooms.get_room(id).await.map_err(ReservationError::from)
    }
}
