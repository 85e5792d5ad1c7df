use async_trait::async_trait;
use room_reservation_sdk::{Reservation, ReservationId, RoomId, UserId};

use crate::domain::repos::ReservationsRepository;
use crate::domain::validator::Stay;

use super::table::Table;

#[derive(Default)]
pub struct InMemoryReservationsRepository {
    table: Table<Reservation>,
}

impl InMemoryReservationsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationsRepository for InMemoryReservationsRepository {
    async fn get(&self, id: ReservationId) -> anyhow::Result<Option<Reservation>> {
        Ok(self.table.get(id))
    }

    async fn list(&self) -> anyhow::Result<Vec<Reservation>> {
        Ok(self.table.all())
    }

    async fn create(
        &self,
        user_id: UserId,
        room_id: RoomId,
        stay: Stay,
    ) -> anyhow::Result<Reservation> {
        Ok(self.table.insert_with(|id| Reservation {
            id,
            user_id,
            room_id,
            check_in_date: stay.check_in_date,
            check_out_date: stay.check_out_date,
            number_of_people: stay.number_of_people,
            approved: stay.approved,
        }))
    }

    async fn update(&self, reservation: Reservation) -> anyhow::Result<Option<Reservation>> {
        Ok(self.table.replace(reservation.id, reservation))
    }

    async fn delete(&self, id: ReservationId) -> anyhow::Result<Option<Reservation>> {
        Ok(self.table.remove(id))
    }

    async fn count_for_room(&self, room_id: RoomId) -> anyhow::Result<usize> {
        Ok(self.table.count(|r| r.room_id == room_id))
    }
}
