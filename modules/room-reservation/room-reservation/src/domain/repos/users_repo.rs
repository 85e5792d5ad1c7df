use std::fmt;

use async_trait::async_trait;
use room_reservation_sdk::{NewUser, Role, User, UserId};

/// A directory entry: the public profile plus the stored credential.
#[derive(Clone)]
pub struct UserAccount {
    pub user: User,
    pub password: String,
}

impl fmt::Debug for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserAccount")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Repository trait for the user directory.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Find a user by ID.
    async fn get(&self, id: UserId) -> anyhow::Result<Option<User>>;

    /// Find a user by email (exact match).
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    /// Find a user together with its credential, for login.
    async fn find_account_by_email(&self, email: &str) -> anyhow::Result<Option<UserAccount>>;

    /// Every registered user.
    async fn list(&self) -> anyhow::Result<Vec<User>>;

    /// Store a new user unless the email is taken. `None` means it was.
    async fn create(&self, new_user: NewUser, role: Role) -> anyhow::Result<Option<User>>;
}
