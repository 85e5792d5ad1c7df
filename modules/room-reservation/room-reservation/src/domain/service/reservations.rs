use std::sync::Arc;

use room_reservation_sdk::{
    NewReservation, Reservation, ReservationDetails, ReservationDraft, ReservationId,
};
use tracing::{debug, info, instrument, warn};

use crate::domain::error::DomainError;
use crate::domain::ports::Clock;
use crate::domain::repos::{ReservationsRepository, RoomsRepository, UsersRepository};
use crate::domain::validator::{self, Rejection, Stay};

/// Reservation lifecycle: validation, reference resolution and persistence.
///
/// User and room references are only resolved on creation. The
/// check-then-write sequences are not transactional.
pub struct ReservationService {
    reservations: Arc<dyn ReservationsRepository>,
    users: Arc<dyn UsersRepository>,
    rooms: Arc<dyn RoomsRepository>,
    clock: Arc<dyn Clock>,
}

impl ReservationService {
    pub fn new(
        reservations: Arc<dyn ReservationsRepository>,
        users: Arc<dyn UsersRepository>,
        rooms: Arc<dyn RoomsRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reservations,
            users,
            rooms,
            clock,
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create_reservation(
        &self,
        request: Option<NewReservation>,
    ) -> Result<ReservationDetails, DomainError> {
        info!("Creating reservation");

        let stay = self.admit(request.as_ref().map(|r| &r.draft))?;
        let Some(NewReservation {
            user_id, room_id, ..
        }) = request
        else {
            return Err(DomainError::invalid_reservation(Rejection::MissingRequest));
        };

        let user = self
            .users
            .get(user_id)
            .await?
            .ok_or(DomainError::UserNotFound { id: user_id })?;
        let room = self
            .rooms
            .get(room_id)
            .await?
            .ok_or(DomainError::RoomNotFound { id: room_id })?;

        let reservation = self.reservations.create(user.id, room.id, stay).await?;

        info!(
            reservation_id = reservation.id,
            user_id = user.id,
            room_id = room.id,
            "Successfully created reservation"
        );
        Ok(ReservationDetails {
            reservation,
            user,
            room,
        })
    }

    #[instrument(skip(self), fields(reservation_id = id))]
    pub async fn get_reservation(&self, id: ReservationId) -> Result<Reservation, DomainError> {
        debug!("Getting reservation by id");

        self.reservations
            .get(id)
            .await?
            .ok_or(DomainError::ReservationNotFound { id })
    }

    #[instrument(skip(self))]
    pub async fn list_reservations(&self) -> Result<Vec<Reservation>, DomainError> {
        debug!("Listing reservations");

        let all = self.reservations.list().await?;

        debug!("Successfully listed {} reservations", all.len());
        Ok(all)
    }

    #[instrument(skip(self, draft), fields(reservation_id = id))]
    pub async fn update_reservation(
        &self,
        id: ReservationId,
        draft: Option<ReservationDraft>,
    ) -> Result<Reservation, DomainError> {
        info!("Updating reservation");

        let existing = self
            .reservations
            .get(id)
            .await?
            .ok_or(DomainError::ReservationNotFound { id })?;

        let stay = self.admit(draft.as_ref())?;

        let updated = self
            .reservations
            .update(stay.apply_to(existing))
            .await?
            .ok_or(DomainError::ReservationNotFound { id })?;

        info!("Successfully updated reservation");
        Ok(updated)
    }

    #[instrument(skip(self), fields(reservation_id = id))]
    pub async fn cancel_reservation(&self, id: ReservationId) -> Result<Reservation, DomainError> {
        info!("Cancelling reservation");

        let removed = self
            .reservations
            .delete(id)
            .await?
            .ok_or(DomainError::ReservationNotFound { id })?;

        info!("Successfully cancelled reservation");
        Ok(removed)
    }

    fn admit(&self, draft: Option<&ReservationDraft>) -> Result<Stay, DomainError> {
        validator::validate(draft, self.clock.today()).map_err(|reason| {
            warn!(rule = reason.code(), %reason, "Reservation request rejected");
            DomainError::invalid_reservation(reason)
        })
    }
}
