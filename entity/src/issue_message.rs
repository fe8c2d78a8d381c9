use sea_orm::entity::prelude::*;

/// Channel message displaying a pending issue.
///
/// Not linked to `pending_issue`; rows that outlive their issue are swept by the
/// orphaned-message cleanup.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "issue_message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub issue_id: String,
    pub channel_id: String,
    pub message_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
