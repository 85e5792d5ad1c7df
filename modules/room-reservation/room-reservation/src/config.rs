//! Configuration for the room-reservation module.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// Configuration for the room-reservation module.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct RoomReservationConfig {
    /// Upper bound, in characters, for free-text user and room fields.
    /// Default: 100
    pub max_field_length: usize,

    /// Administrator accounts created at startup when their email is not yet registered.
    pub admins: Vec<AdminAccountConfig>,
}

impl Default for RoomReservationConfig {
    fn default() -> Self {
        Self {
            max_field_length: 100,
            admins: Vec::new(),
        }
    }
}

impl RoomReservationConfig {
    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            max_field_length: self.max_field_length,
        }
    }
}

/// A seeded administrator account.
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct AdminAccountConfig {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub phone_number: String,
}

impl fmt::Debug for AdminAccountConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminAccountConfig")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phone_number", &self.phone_number)
            .finish()
    }
}
