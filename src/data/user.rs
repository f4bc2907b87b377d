use sea_orm::{DatabaseConnection, EntityTrait};

use crate::{error::AppError, model::user::User};

/// Repository providing read access to user reference data.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all users. An empty catalogue yields an empty list.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users, in storage order
    /// - `Err(AppError)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let entities = entity::prelude::User::find().all(self.db).await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
