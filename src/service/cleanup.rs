//! Removes channel messages of issues that are no longer pending.

use std::future::Future;

use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, MessageId},
    http::Http,
};

use crate::{
    data::issue_message::IssueMessageRepository, error::AppError,
    model::issue_message::IssueMessage, util::discord::is_not_found,
};

/// What happened when deleting one orphaned message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Discord no longer knows the message.
    Gone,
    Failed,
}

/// Counts reported by a cleanup run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupReport {
    /// Tracking records dropped (message deleted or already gone).
    pub removed: usize,
    /// Records kept because deletion failed; retried on the next run.
    pub kept: usize,
}

/// Deletes the Discord messages of every issue that is no longer pending.
///
/// A message that was deleted, or that Discord reports as unknown, stops being
/// tracked. Any other failure is logged and the record is kept for the next run.
pub async fn cleanup_orphaned_messages(
    db: &DatabaseConnection,
    http: &Http,
) -> Result<CleanupReport, AppError> {
    sweep(db, |message| async move {
        let channel_id = ChannelId::new(message.channel_id);
        match channel_id
            .delete_message(http, MessageId::new(message.message_id))
            .await
        {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) if is_not_found(&e) => DeleteOutcome::Gone,
            Err(e) => {
                tracing::warn!(
                    "Failed to delete message of issue {}: {}",
                    message.issue_id,
                    e
                );
                DeleteOutcome::Failed
            }
        }
    })
    .await
}

async fn sweep<F, Fut>(db: &DatabaseConnection, delete: F) -> Result<CleanupReport, AppError>
where
    F: Fn(IssueMessage) -> Fut,
    Fut: Future<Output = DeleteOutcome>,
{
    let repo = IssueMessageRepository::new(db);
    let mut report = CleanupReport::default();

    for message in repo.get_orphaned().await? {
        let issue_id = message.issue_id.clone();
        match delete(message).await {
            DeleteOutcome::Deleted | DeleteOutcome::Gone => {
                repo.delete_by_issue_id(&issue_id).await?;
                report.removed += 1;
            }
            DeleteOutcome::Failed => report.kept += 1,
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that deleted and vanished messages stop being tracked.
    ///
    /// Expected: both orphaned records removed, the pending issue's record kept
    #[tokio::test]
    async fn drops_deleted_and_gone_messages() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_pending_issue_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let pending = factory::pending_issue::create_pending_issue(db).await?;
        factory::issue_message::create_issue_message(db, &pending.id).await?;
        factory::issue_message::IssueMessageFactory::new(db, "1_1")
            .message_id(10)
            .build()
            .await?;
        factory::issue_message::IssueMessageFactory::new(db, "2_2")
            .message_id(20)
            .build()
            .await?;

        let report = sweep(db, |message| async move {
            if message.message_id == 10 {
                DeleteOutcome::Deleted
            } else {
                DeleteOutcome::Gone
            }
        })
        .await?;

        assert_eq!(report, CleanupReport { removed: 2, kept: 0 });
        let repo = IssueMessageRepository::new(db);
        assert!(repo.get_orphaned().await?.is_empty());
        assert!(repo.get_by_issue_id(&pending.id).await?.is_some());

        Ok(())
    }

    /// Tests that a failed deletion keeps the record for the next run.
    ///
    /// Expected: record still tracked and reported as kept
    #[tokio::test]
    async fn keeps_records_when_deletion_fails() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_pending_issue_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::issue_message::create_issue_message(db, "3_3").await?;

        let report = sweep(db, |_| async { DeleteOutcome::Failed }).await?;

        assert_eq!(report, CleanupReport { removed: 0, kept: 1 });
        let orphaned = IssueMessageRepository::new(db).get_orphaned().await?;
        assert_eq!(orphaned.len(), 1);
        assert_eq!(orphaned[0].issue_id, "3_3");

        Ok(())
    }

    /// Tests that nothing is deleted while every issue is pending.
    ///
    /// Expected: empty report and the record still tracked
    #[tokio::test]
    async fn ignores_pending_issues() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_pending_issue_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let pending = factory::pending_issue::create_pending_issue(db).await?;
        factory::issue_message::create_issue_message(db, &pending.id).await?;

        let report = sweep(db, |_| async { DeleteOutcome::Failed }).await?;

        assert_eq!(report, CleanupReport::default());
        assert!(IssueMessageRepository::new(db)
            .get_by_issue_id(&pending.id)
            .await?
            .is_some());

        Ok(())
    }
}
