pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_category_table;
mod m20260815_000002_create_user_table;
mod m20260815_000003_create_review_table;
mod m20260815_000004_create_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_category_table::Migration),
            Box::new(m20260815_000002_create_user_table::Migration),
            Box::new(m20260815_000003_create_review_table::Migration),
            Box::new(m20260815_000004_create_comment_table::Migration),
        ]
    }
}
