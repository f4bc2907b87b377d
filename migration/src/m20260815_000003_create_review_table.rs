use sea_orm_migration::{prelude::*, schema::*};

use super::m20260815_000001_create_category_table::Category;
use super::m20260815_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::ReviewId))
                    .col(string(Review::Title))
                    .col(string(Review::Category))
                    .col(string(Review::Designer))
                    .col(string(Review::Owner))
                    .col(text(Review::ReviewBody))
                    .col(string(Review::ReviewImgUrl))
                    .col(timestamp_with_time_zone(Review::CreatedAt))
                    .col(integer(Review::Votes).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_category")
                            .from(Review::Table, Review::Category)
                            .to(Category::Table, Category::Slug),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_owner")
                            .from(Review::Table, Review::Owner)
                            .to(User::Table, User::Username),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    #[sea_orm(iden = "reviews")]
    Table,
    ReviewId,
    Title,
    Category,
    Designer,
    Owner,
    ReviewBody,
    ReviewImgUrl,
    CreatedAt,
    Votes,
}
