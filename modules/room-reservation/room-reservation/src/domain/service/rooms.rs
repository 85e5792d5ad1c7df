use std::sync::Arc;

use room_reservation_sdk::{NewRoom, Room, RoomId};
use tracing::{debug, info, instrument};

use super::ServiceConfig;
use crate::domain::error::DomainError;
use crate::domain::repos::{ReservationsRepository, RoomSpec, RoomsRepository};

/// Room catalog management.
pub struct RoomService {
    repo: Arc<dyn RoomsRepository>,
    reservations: Arc<dyn ReservationsRepository>,
    config: ServiceConfig,
}

impl RoomService {
    pub fn new(
        repo: Arc<dyn RoomsRepository>,
        reservations: Arc<dyn ReservationsRepository>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            reservations,
            config,
        }
    }

    #[instrument(skip(self, new_room), fields(name = %new_room.name))]
    pub async fn add_room(&self, new_room: NewRoom) -> Result<Room, DomainError> {
        info!("Adding room");

        let spec = self.check(new_room)?;
        let room = self.repo.create(spec).await?;

        info!(room_id = room.id, "Successfully added room");
        Ok(room)
    }

    #[instrument(skip(self))]
    pub async fn list_rooms(&self) -> Result<Vec<Room>, DomainError> {
        debug!("Listing rooms");
        Ok(self.repo.list().await?)
    }

    #[instrument(skip(self), fields(room_id = id))]
    pub async fn get_room(&self, id: RoomId) -> Result<Room, DomainError> {
        debug!("Getting room by id");

        self.repo
            .get(id)
            .await?
            .ok_or(DomainError::RoomNotFound { id })
    }

    #[instrument(skip(self, new_room), fields(room_id = id))]
    pub async fn update_room(&self, id: RoomId, new_room: NewRoom) -> Result<Room, DomainError> {
        info!("Updating room");

        if self.repo.get(id).await?.is_none() {
            return Err(DomainError::RoomNotFound { id });
        }
        let spec = self.check(new_room)?;

        let room = self
            .repo
            .update(id, spec)
            .await?
            .ok_or(DomainError::RoomNotFound { id })?;

        info!("Successfully updated room");
        Ok(room)
    }

    #[instrument(skip(self), fields(room_id = id))]
    pub async fn delete_room(&self, id: RoomId) -> Result<(), DomainError> {
        info!("Deleting room");

        if self.repo.get(id).await?.is_none() {
            return Err(DomainError::RoomNotFound { id });
        }
        if self.reservations.count_for_room(id).await? > 0 {
            return Err(DomainError::RoomInUse { id });
        }
        if self.repo.delete(id).await?.is_none() {
            return Err(DomainError::RoomNotFound { id });
        }

        info!("Successfully deleted room");
        Ok(())
    }

    fn check(&self, new_room: NewRoom) -> Result<RoomSpec, DomainError> {
        self.config.validate_field("name", &new_room.name)?;
        self.config
            .validate_field("description", &new_room.description)?;

        let price = u64::try_from(new_room.price)
            .map_err(|_| DomainError::validation("price", "must be non-negative"))?;
        let max_people = u32::try_from(new_room.max_people)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| DomainError::validation("max_people", "must be at least 1"))?;

        Ok(RoomSpec {
            name: new_room.name,
            description: new_room.description,
            price,
            max_people,
        })
    }
}
