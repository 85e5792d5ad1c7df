use async_trait::async_trait;
use room_reservation_sdk::{Room, RoomId};

/// Validated room attributes, without an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSpec {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub max_people: u32,
}

impl RoomSpec {
    #[must_use]
    pub fn into_room(self, id: RoomId) -> Room {
        Room {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            max_people: self.max_people,
        }
    }
}

/// Repository trait for the room catalog.
#[async_trait]
pub trait RoomsRepository: Send + Sync {
    /// Find a room by ID.
    async fn get(&self, id: RoomId) -> anyhow::Result<Option<Room>>;

    /// Every room in the catalog.
    async fn list(&self) -> anyhow::Result<Vec<Room>>;

    /// Register a new room.
    async fn create(&self, spec: RoomSpec) -> anyhow::Result<Room>;

    /// Replace the attributes of an existing room. `None` if it does not exist.
    async fn update(&self, id: RoomId, spec: RoomSpec) -> anyhow::Result<Option<Room>>;

    /// Remove a room, returning the removed value.
    async fn delete(&self, id: RoomId) -> anyhow::Result<Option<Room>>;
}
