//! `UserStore` backed by the users table.

use async_trait::async_trait;

use library_core::result::AppResult;
use library_database::repositories::UserRepository;
use library_entity::user::{NewUser, User};

use super::UserStore;

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        self.find_by_username(login).await
    }

    async fn insert(&self, user: NewUser) -> AppResult<User> {
        self.create(&user).await
    }
}
