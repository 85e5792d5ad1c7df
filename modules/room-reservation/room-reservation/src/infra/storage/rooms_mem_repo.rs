use async_trait::async_trait;
use room_reservation_sdk::{Room, RoomId};

use crate::domain::repos::{RoomSpec, RoomsRepository};

use super::table::Table;

#[derive(Default)]
pub struct InMemoryRoomsRepository {
    table: Table<Room>,
}

impl InMemoryRoomsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomsRepository for InMemoryRoomsRepository {
    async fn get(&self, id: RoomId) -> anyhow::Result<Option<Room>> {
        Ok(self.table.get(id))
    }

    async fn list(&self) -> anyhow::Result<Vec<Room>> {
        Ok(self.table.all())
    }

    async fn create(&self, spec: RoomSpec) -> anyhow::Result<Room> {
        Ok(self.table.insert_with(|id| spec.into_room(id)))
    }

    async fn update(&self, id: RoomId, spec: RoomSpec) -> anyhow::Result<Option<Room>> {
        Ok(self.table.replace(id, spec.into_room(id)))
    }

    async fn delete(&self, id: RoomId) -> anyhow::Result<Option<Room>> {
        Ok(self.table.remove(id))
    }
}
