mod reservations;
mod rooms;
mod users;

pub use reservations::ReservationService;
pub use rooms::RoomService;
pub use users::UserService;

use super::error::DomainError;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_field_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_field_length: 100,
        }
    }
}

impl ServiceConfig {
    fn validate_field(&self, field: &str, value: &str) -> Result<(), DomainError> {
        if value.chars().count() > self.max_field_length {
            return Err(DomainError::validation(
                field,
                format!("exceeds maximum length of {}", self.max_field_length),
            ));
        }
        Ok(())
    }
}
