use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pending_issue")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub author_id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// JSON-encoded list of label names.
    #[sea_orm(column_type = "Text")]
    pub labels: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pending_issue_file::Entity")]
    PendingIssueFile,
}

impl Related<super::pending_issue_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PendingIssueFile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
