use std::sync::Arc;

use room_reservation_sdk::{NewUser, Role, User, UserId};
use tracing::{debug, info, instrument, warn};

use super::ServiceConfig;
use crate::domain::error::DomainError;
use crate::domain::repos::UsersRepository;

/// User directory: registration, login and profile lookups.
pub struct UserService {
    repo: Arc<dyn UsersRepository>,
    config: ServiceConfig,
}

impl UserService {
    pub fn new(repo: Arc<dyn UsersRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    /// Self-service registration. Always creates an ordinary user.
    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub async fn register(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Registering user");
        self.create_with_role(new_user, Role::User).await
    }

    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, DomainError> {
        debug!("Authenticating user");

        let Some(account) = self.repo.find_account_by_email(email).await? else {
            warn!("Login failed: email is not registered");
            return Err(DomainError::InvalidCredentials);
        };
        if account.password != password {
            warn!(user_id = account.user.id, "Login failed: wrong password");
            return Err(DomainError::InvalidCredentials);
        }

        info!(user_id = account.user.id, "Successfully authenticated user");
        Ok(account.user)
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        debug!("Listing users");
        Ok(self.repo.list().await?)
    }

    #[instrument(skip(self), fields(user_id = id))]
    pub async fn get_user(&self, id: UserId) -> Result<User, DomainError> {
        debug!("Getting user by id");

        self.repo
            .get(id)
            .await?
            .ok_or(DomainError::UserNotFound { id })
    }

    /// Create an administrator account unless the email is already registered.
    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub async fn ensure_admin(&self, new_user: NewUser) -> Result<User, DomainError> {
        if let Some(existing) = self.repo.find_by_email(&new_user.email).await? {
            if !existing.role.is_admin() {
                warn!(
                    user_id = existing.id,
                    "Configured admin email belongs to an ordinary user"
                );
            }
            return Ok(existing);
        }

        info!("Seeding administrator account");
        self.create_with_role(new_user, Role::Admin).await
    }

    async fn create_with_role(&self, new_user: NewUser, role: Role) -> Result<User, DomainError> {
        if new_user.email.trim().is_empty() {
            return Err(DomainError::validation("email", "must not be empty"));
        }
        self.config.validate_field("name", &new_user.name)?;
        self.config.validate_field("email", &new_user.email)?;
        self.config.validate_field("phone_number", &new_user.phone_number)?;

        if self.repo.find_by_email(&new_user.email).await?.is_some() {
            return Err(DomainError::EmailAlreadyExists {
                email: new_user.email,
            });
        }

        let email = new_user.email.clone();
        let user = self
            .repo
            .create(new_user, role)
            .await?
            .ok_or(DomainError::EmailAlreadyExists { email })?;

        info!(user_id = user.id, role = %user.role, "Successfully created user");
        Ok(user)
    }
}
