//! Domain models for the channel messages that display pending issues.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Channel message showing a pending issue with its review buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueMessage {
    pub issue_id: String,
    pub channel_id: u64,
    pub message_id: u64,
    pub created_at: DateTime<Utc>,
}

impl IssueMessage {
    /// Converts an entity model to an issue message at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(IssueMessage)` - The converted domain model
    /// - `Err(AppError::InternalErr)` - Stored channel or message id is not a snowflake
    pub fn from_entity(entity: entity::issue_message::Model) -> Result<Self, AppError> {
        Ok(Self {
            issue_id: entity.issue_id,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            message_id: parse_u64_from_string(entity.message_id)?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for recording which message displays a pending issue.
#[derive(Debug, Clone)]
pub struct UpsertIssueMessageParam {
    pub issue_id: String,
    pub channel_id: u64,
    pub message_id: u64,
}
