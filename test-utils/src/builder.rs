use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (in dependency order, since foreign
/// keys are generated from entity relations), then call `build()` to create
/// the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Category, Review, User};
///
/// let test = TestBuilder::new()
///     .with_table(Category)
///     .with_table(User)
///     .with_table(Review)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. Tables with foreign keys must be added
    /// after their referenced tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all catalogue tables in dependency order.
    ///
    /// Adds Category, User, Review, and Comment. Use this for tests that
    /// cross entity boundaries (review listings with comment counts, comment
    /// creation, full-router tests).
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_catalogue_tables(self) -> Self {
        self.with_table(Category)
            .with_table(User)
            .with_table(Review)
            .with_table(Comment)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
