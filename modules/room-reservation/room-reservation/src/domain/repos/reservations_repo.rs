use async_trait::async_trait;
use room_reservation_sdk::{Reservation, ReservationId, RoomId, UserId};

use crate::domain::validator::Stay;

/// Repository trait for Reservation persistence operations.
///
/// Each call is atomic on its own; nothing spans several calls.
#[async_trait]
pub trait ReservationsRepository: Send + Sync {
    /// Find a reservation by ID.
    async fn get(&self, id: ReservationId) -> anyhow::Result<Option<Reservation>>;

    /// Every stored reservation, in store order.
    async fn list(&self) -> anyhow::Result<Vec<Reservation>>;

    /// Store a new reservation under a freshly assigned identifier.
    async fn create(
        &self,
        user_id: UserId,
        room_id: RoomId,
        stay: Stay,
    ) -> anyhow::Result<Reservation>;

    /// Replace an existing reservation. `None` if it no longer exists.
    async fn update(&self, reservation: Reservation) -> anyhow::Result<Option<Reservation>>;

    /// Remove a reservation, returning the removed value.
    async fn delete(&self, id: ReservationId) -> anyhow::Result<Option<Reservation>>;

    /// Number of reservations referencing `room_id`.
    async fn count_for_room(&self, room_id: RoomId) -> anyhow::Result<usize>;
}
