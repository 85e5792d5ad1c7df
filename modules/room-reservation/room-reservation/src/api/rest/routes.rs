use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use super::handlers;
use crate::domain::service::{ReservationService, RoomService, UserService};

/// Mount the reservation, user and room routes onto `router`.
///
/// The services are installed as request extensions; the caller
/// extractors depend on the `UserService` one.
pub fn register_routes(
    router: Router,
    reservations: Arc<ReservationService>,
    users: Arc<UserService>,
    rooms: Arc<RoomService>,
) -> Router {
    let api = Router::new()
        .route(
            "/api/reservations",
            post(handlers::create_reservation).get(handlers::list_reservations),
        )
        .route(
            "/api/reservations/{id}",
            get(handlers::get_reservation)
                .put(handlers::update_reservation)
                .delete(handlers::cancel_reservation),
        )
        .route("/api/users/register", post(handlers::register_user))
        .route("/api/users/login", post(handlers::login))
        .route("/api/users", get(handlers::list_users))
        .route("/api/users/{id}", get(handlers::get_user))
        .route(
            "/api/rooms",
            post(handlers::add_room).get(handlers::list_rooms),
        )
        .route(
            "/api/rooms/{id}",
            get(handlers::get_room)
                .put(handlers::update_room)
                .delete(handlers::delete_room),
        )
        .layer(Extension(reservations))
        .layer(Extension(users))
        .layer(Extension(rooms));

    router.merge(api)
}
