use super::*;

/// Tests recording the first message of an issue.
///
/// Expected: Ok with the stored channel and message ids
#[tokio::test]
async fn inserts_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let issue = factory::pending_issue::create_pending_issue(db).await?;

    let message = IssueMessageRepository::new(db)
        .upsert(UpsertIssueMessageParam {
            issue_id: issue.id.clone(),
            channel_id: 111,
            message_id: 222,
        })
        .await?;

    assert_eq!(message.issue_id, issue.id);
    assert_eq!(message.channel_id, 111);
    assert_eq!(message.message_id, 222);

    Ok(())
}

/// Tests that a reposted message replaces the tracked one.
///
/// Expected: Ok with a single record pointing at the new message
#[tokio::test]
async fn replaces_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let issue = factory::pending_issue::create_pending_issue(db).await?;
    factory::issue_message::IssueMessageFactory::new(db, &issue.id)
        .message_id(1)
        .build()
        .await?;

    let repo = IssueMessageRepository::new(db);
    repo.upsert(UpsertIssueMessageParam {
        issue_id: issue.id.clone(),
        channel_id: 333,
        message_id: 2,
    })
    .await?;

    let count = entity::prelude::IssueMessage::find().count(db).await?;
    assert_eq!(count, 1);

    let stored = repo.get_by_issue_id(&issue.id).await?.unwrap();
    assert_eq!(stored.channel_id, 333);
    assert_eq!(stored.message_id, 2);

    Ok(())
}

/// Tests looking up an issue without a tracked message.
///
/// Expected: Ok(None)
#[tokio::test]
async fn get_returns_none_when_untracked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let issue = factory::pending_issue::create_pending_issue(db).await?;

    let stored = IssueMessageRepository::new(db)
        .get_by_issue_id(&issue.id)
        .await?;
    assert!(stored.is_none());

    Ok(())
}
