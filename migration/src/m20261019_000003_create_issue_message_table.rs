use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IssueMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(IssueMessage::Id))
                    .col(string(IssueMessage::IssueId))
                    .col(string(IssueMessage::ChannelId))
                    .col(string(IssueMessage::MessageId))
                    .col(
                        timestamp(IssueMessage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One tracked message per pending issue
        manager
            .create_index(
                Index::create()
                    .name("idx_issue_message_issue_id")
                    .table(IssueMessage::Table)
                    .col(IssueMessage::IssueId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_issue_message_issue_id")
                    .table(IssueMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(IssueMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum IssueMessage {
    Table,
    Id,
    IssueId,
    ChannelId,
    MessageId,
    CreatedAt,
}
