//! Issue message repository.
//!
//! Tracks which channel message displays each pending issue so the message can be
//! re-rendered after an upload, replaced after validation, and swept once its issue
//! is gone.

use chrono::Utc;
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::issue_message::{IssueMessage, UpsertIssueMessageParam},
};

pub struct IssueMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IssueMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the message displaying an issue, replacing any previous record.
    ///
    /// # Returns
    /// - `Ok(IssueMessage)` - The stored record
    /// - `Err(AppError)` - Database error
    pub async fn upsert(&self, param: UpsertIssueMessageParam) -> Result<IssueMessage, AppError> {
        let existing = entity::prelude::IssueMessage::find()
            .filter(entity::issue_message::Column::IssueId.eq(&param.issue_id))
            .one(self.db)
            .await?;

        let model = match existing {
            Some(existing) => {
                let mut active: entity::issue_message::ActiveModel = existing.into();
                active.channel_id = ActiveValue::Set(param.channel_id.to_string());
                active.message_id = ActiveValue::Set(param.message_id.to_string());
                active.update(self.db).await?
            }
            None => {
                entity::issue_message::ActiveModel {
                    issue_id: ActiveValue::Set(param.issue_id),
                    channel_id: ActiveValue::Set(param.channel_id.to_string()),
                    message_id: ActiveValue::Set(param.message_id.to_string()),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        IssueMessage::from_entity(model)
    }

    /// Gets the message displaying an issue.
    ///
    /// # Returns
    /// - `Ok(Some(IssueMessage))` - The issue has a tracked message
    /// - `Ok(None)` - Nothing tracked for this issue
    pub async fn get_by_issue_id(&self, issue_id: &str) -> Result<Option<IssueMessage>, AppError> {
        entity::prelude::IssueMessage::find()
            .filter(entity::issue_message::Column::IssueId.eq(issue_id))
            .one(self.db)
            .await?
            .map(IssueMessage::from_entity)
            .transpose()
    }

    /// Stops tracking the message of an issue.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records removed (0 or 1)
    pub async fn delete_by_issue_id(&self, issue_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::IssueMessage::delete_many()
            .filter(entity::issue_message::Column::IssueId.eq(issue_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Gets tracked messages whose issue is no longer pending, oldest first.
    pub async fn get_orphaned(&self) -> Result<Vec<IssueMessage>, AppError> {
        let pending_ids = Query::select()
            .column(entity::pending_issue::Column::Id)
            .from(entity::prelude::PendingIssue)
            .to_owned();

        entity::prelude::IssueMessage::find()
            .filter(entity::issue_message::Column::IssueId.not_in_subquery(pending_ids))
            .order_by_asc(entity::issue_message::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(IssueMessage::from_entity)
            .collect()
    }
}
