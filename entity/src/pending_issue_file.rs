use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pending_issue_file")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pending_issue_id: String,
    pub filename: String,
    pub url: String,
    pub discord_url: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pending_issue::Entity",
        from = "Column::PendingIssueId",
        to = "super::pending_issue::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PendingIssue,
}

impl Related<super::pending_issue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PendingIssue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
