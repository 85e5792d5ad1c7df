use async_trait::async_trait;
use room_reservation_sdk::{NewUser, Role, User, UserId};

use crate::domain::repos::{UserAccount, UsersRepository};

use super::table::Table;

#[derive(Default)]
pub struct InMemoryUsersRepository {
    table: Table<UserAccount>,
}

impl InMemoryUsersRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn get(&self, id: UserId) -> anyhow::Result<Option<User>> {
        Ok(self.table.get(id).map(|account| account.user))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .table
            .find(|account| account.user.email == email)
            .map(|account| account.user))
    }

    async fn find_account_by_email(&self, email: &str) -> anyhow::Result<Option<UserAccount>> {
        Ok(self.table.find(|account| account.user.email == email))
    }

    async fn list(&self) -> anyhow::Result<Vec<User>> {
        Ok(self
            .table
            .all()
            .into_iter()
            .map(|account| account.user)
            .collect())
    }

    async fn create(&self, new_user: NewUser, role: Role) -> anyhow::Result<Option<User>> {
        let NewUser {
            name,
            email,
            password,
            phone_number,
        } = new_user;

        let inserted = self.table.insert_unless(
            |account| account.user.email == email,
            |id| UserAccount {
                user: User {
                    id,
                    name,
                    email: email.clone(),
                    phone_number,
                    role,
                },
                password,
            },
        );

        Ok(inserted.map(|account| account.user))
    }
}
