mod reservations_repo;
mod rooms_repo;
mod users_repo;

pub use reservations_repo::ReservationsRepository;
pub use rooms_repo::{RoomSpec, RoomsRepository};
pub use users_repo::{UserAccount, UsersRepository};
