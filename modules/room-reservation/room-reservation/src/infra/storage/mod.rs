//! Infrastructure storage layer - in-process persistence.
//!
//! Each repository owns one [`Table`]: a lock-protected ordered map keyed by
//! a store-assigned identifier. Identifiers start at 1, grow monotonically and
//! are never reused, so a cancelled reservation cannot come back under the
//! same identifier. Listing returns rows in ascending identifier order.

mod reservations_mem_repo;
mod rooms_mem_repo;
mod table;
mod users_mem_repo;

pub use reservations_mem_repo::InMemoryReservationsRepository;
pub use rooms_mem_repo::InMemoryRoomsRepository;
pub use table::Table;
pub use users_mem_repo::InMemoryUsersRepository;
