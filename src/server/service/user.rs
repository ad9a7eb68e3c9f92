use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{message, AppError},
    model::user::User,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Gets a user by username
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - "User not found"
    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(message::USER_NOT_FOUND))
    }
}
