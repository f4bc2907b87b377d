use sea_orm_migration::{prelude::*, schema::*};

use super::m20260815_000002_create_user_table::User;
use super::m20260815_000003_create_review_table::Review;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::CommentId))
                    .col(string(Comment::Author))
                    .col(integer(Comment::ReviewId))
                    .col(text(Comment::Body))
                    .col(integer(Comment::Votes).default(0))
                    .col(timestamp_with_time_zone(Comment::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_author")
                            .from(Comment::Table, Comment::Author)
                            .to(User::Table, User::Username),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_review")
                            .from(Comment::Table, Comment::ReviewId)
                            .to(Review::Table, Review::ReviewId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    #[sea_orm(iden = "comments")]
    Table,
    CommentId,
    Author,
    ReviewId,
    Body,
    Votes,
    CreatedAt,
}
