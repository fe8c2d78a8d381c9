use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PendingIssue::Table)
                    .if_not_exists()
                    .col(string(PendingIssue::Id).primary_key())
                    .col(string(PendingIssue::AuthorId))
                    .col(string(PendingIssue::Title))
                    .col(text(PendingIssue::Description))
                    .col(text(PendingIssue::Labels))
                    .col(
                        timestamp(PendingIssue::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PendingIssue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PendingIssue {
    Table,
    Id,
    AuthorId,
    Title,
    Description,
    Labels,
    CreatedAt,
}
