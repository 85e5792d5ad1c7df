//! Module declaration for the room-reservation module.

use std::sync::Arc;

use room_reservation_sdk::{NewUser, RoomReservationApi};
use tracing::{debug, info};

use crate::config::RoomReservationConfig;
use crate::domain::ports::Clock;
use crate::domain::service::{ReservationService, RoomService, UserService};
use crate::infra::storage::{
    InMemoryReservationsRepository, InMemoryRoomsRepository, InMemoryUsersRepository,
};
use crate::local_client::RoomReservationLocalClient;

/// Room-reservation module.
///
/// Wires the reservation lifecycle, the user directory and the room catalog
/// to their repositories, and exposes them over REST and as an in-process
/// [`RoomReservationApi`] client.
#[derive(Clone)]
pub struct RoomReservationModule {
    config: RoomReservationConfig,
    reservations: Arc<ReservationService>,
    users: Arc<UserService>,
    rooms: Arc<RoomService>,
}

impl RoomReservationModule {
    /// Build the module over in-memory storage.
    #[must_use]
    pub fn in_memory(config: &RoomReservationConfig, clock: Arc<dyn Clock>) -> Self {
        debug!(
            max_field_length = config.max_field_length,
            admins = config.admins.len(),
            "Loaded room_reservation config"
        );

        let reservations_repo = Arc::new(InMemoryReservationsRepository::new());
        let users_repo = Arc::new(InMemoryUsersRepository::new());
        let rooms_repo = Arc::new(InMemoryRoomsRepository::new());
        let service_config = config.service_config();

        let reservations = Arc::new(ReservationService::new(
            reservations_repo.clone(),
            users_repo.clone(),
            rooms_repo.clone(),
            clock,
        ));
        let users = Arc::new(UserService::new(users_repo, service_config.clone()));
        let rooms = Arc::new(RoomService::new(
            rooms_repo,
            reservations_repo,
            service_config,
        ));

        Self {
            config: config.clone(),
            reservations,
            users,
            rooms,
        }
    }

    /// Seed the configured administrator accounts.
    ///
    /// # Errors
    ///
    /// Fails when an administrator entry does not pass user validation.
    pub async fn init(&self) -> anyhow::Result<()> {
        info!("Initializing room_reservation module");

        for admin in &self.config.admins {
            let user = self
                .users
                .ensure_admin(NewUser {
                    name: admin.name.clone(),
                    email: admin.email.clone(),
                    password: admin.password.clone(),
                    phone_number: admin.phone_number.clone(),
                })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to seed admin '{}': {e}", admin.email))?;
            debug!(user_id = user.id, "Administrator account ready");
        }

        info!("Room reservation module initialized");
        Ok(())
    }

    /// Mount the module's REST routes onto `router`.
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering room_reservation REST routes");
        crate::api::rest::routes::register_routes(
            router,
            self.reservations.clone(),
            self.users.clone(),
            self.rooms.clone(),
        )
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn RoomReservationApi> {
        Arc::new(RoomReservationLocalClient::new(
            self.reservations.clone(),
            self.users.clone(),
            self.rooms.clone(),
        ))
    }

    #[must_use]
    pub fn reservations(&self) -> &Arc<ReservationService> {
        &self.reservations
    }

    #[must_use]
    pub fn users(&self) -> &Arc<UserService> {
        &self.users
    }

    #[must_use]
    pub fn rooms(&self) -> &Arc<RoomService> {
        &self.rooms
    }
}
