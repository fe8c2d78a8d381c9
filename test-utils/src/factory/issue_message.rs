//! Issue message factory for creating tracked channel messages.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating tracked issue messages.
pub struct IssueMessageFactory<'a> {
    db: &'a DatabaseConnection,
    issue_id: String,
    channel_id: u64,
    message_id: u64,
}

impl<'a> IssueMessageFactory<'a> {
    /// Creates a new IssueMessageFactory for the given issue id.
    ///
    /// Defaults:
    /// - channel_id: `200000000000000000`
    /// - message_id: `300000000000000000 + counter`
    pub fn new(db: &'a DatabaseConnection, issue_id: impl Into<String>) -> Self {
        Self {
            db,
            issue_id: issue_id.into(),
            channel_id: 200_000_000_000_000_000,
            message_id: 300_000_000_000_000_000 + next_id(),
        }
    }

    pub fn channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn message_id(mut self, message_id: u64) -> Self {
        self.message_id = message_id;
        self
    }

    pub async fn build(self) -> Result<entity::issue_message::Model, DbErr> {
        entity::issue_message::ActiveModel {
            issue_id: ActiveValue::Set(self.issue_id),
            channel_id: ActiveValue::Set(self.channel_id.to_string()),
            message_id: ActiveValue::Set(self.message_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tracked message for the issue with default channel and message ids.
pub async fn create_issue_message(
    db: &DatabaseConnection,
    issue_id: &str,
) -> Result<entity::issue_message::Model, DbErr> {
    IssueMessageFactory::new(db, issue_id).build().await
}
