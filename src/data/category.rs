use sea_orm::{DatabaseConnection, EntityTrait};

use crate::{error::AppError, model::category::Category};

/// Repository providing read access to category reference data.
pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all categories. An empty catalogue yields an empty list.
    ///
    /// # Returns
    /// - `Ok(Vec<Category>)` - All categories, in storage order
    /// - `Err(AppError)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let entities = entity::prelude::Category::find().all(self.db).await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }
}
