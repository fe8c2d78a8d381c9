use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000001_create_pending_issue_table::PendingIssue;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PendingIssueFile::Table)
                    .if_not_exists()
                    .col(pk_auto(PendingIssueFile::Id))
                    .col(string(PendingIssueFile::PendingIssueId))
                    .col(string(PendingIssueFile::Filename))
                    .col(string(PendingIssueFile::Url))
                    .col(string_null(PendingIssueFile::DiscordUrl))
                    .col(
                        timestamp(PendingIssueFile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pending_issue_file_pending_issue_id")
                            .from(PendingIssueFile::Table, PendingIssueFile::PendingIssueId)
                            .to(PendingIssue::Table, PendingIssue::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pending_issue_file_pending_issue_id")
                    .table(PendingIssueFile::Table)
                    .col(PendingIssueFile::PendingIssueId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_pending_issue_file_pending_issue_id")
                    .table(PendingIssueFile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PendingIssueFile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PendingIssueFile {
    Table,
    Id,
    PendingIssueId,
    Filename,
    Url,
    DiscordUrl,
    CreatedAt,
}
