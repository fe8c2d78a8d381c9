use super::*;

/// Tests that messages of handled issues are reported as orphaned.
///
/// Creates one tracked message for a pending issue and one for an issue id that
/// is no longer stored.
///
/// Expected: Ok with only the message of the missing issue
#[tokio::test]
async fn returns_messages_without_pending_issue() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::pending_issue::create_pending_issue(db).await?;
    factory::issue_message::create_issue_message(db, &pending.id).await?;
    factory::issue_message::IssueMessageFactory::new(db, "9_1700000000")
        .message_id(77)
        .build()
        .await?;

    let orphaned = IssueMessageRepository::new(db).get_orphaned().await?;

    assert_eq!(orphaned.len(), 1);
    assert_eq!(orphaned[0].issue_id, "9_1700000000");
    assert_eq!(orphaned[0].message_id, 77);

    Ok(())
}

/// Tests that deleting a pending issue orphans its message.
///
/// Expected: Ok with the message listed after the issue is deleted
#[tokio::test]
async fn includes_message_after_issue_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let issue = factory::pending_issue::create_pending_issue(db).await?;
    factory::issue_message::create_issue_message(db, &issue.id).await?;

    let repo = IssueMessageRepository::new(db);
    assert!(repo.get_orphaned().await?.is_empty());

    entity::prelude::PendingIssue::delete_by_id(issue.id.clone())
        .exec(db)
        .await?;

    let orphaned = repo.get_orphaned().await?;
    assert_eq!(orphaned.len(), 1);
    assert_eq!(orphaned[0].issue_id, issue.id);

    Ok(())
}

/// Tests an empty store.
///
/// Expected: Ok with no messages
#[tokio::test]
async fn empty_when_nothing_tracked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::pending_issue::create_pending_issue(db).await?;

    let orphaned = IssueMessageRepository::new(db).get_orphaned().await?;
    assert!(orphaned.is_empty());

    Ok(())
}
