use super::*;

/// Tests removing the tracking record of one issue.
///
/// Expected: Ok(1) and the other issue's record kept
#[tokio::test]
async fn removes_only_matching_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::pending_issue::create_pending_issue(db).await?;
    let second = factory::pending_issue::create_pending_issue(db).await?;
    factory::issue_message::create_issue_message(db, &first.id).await?;
    factory::issue_message::create_issue_message(db, &second.id).await?;

    let repo = IssueMessageRepository::new(db);
    assert_eq!(repo.delete_by_issue_id(&first.id).await?, 1);

    assert!(repo.get_by_issue_id(&first.id).await?.is_none());
    assert!(repo.get_by_issue_id(&second.id).await?.is_some());

    Ok(())
}

/// Tests removing a record that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_untracked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let removed = IssueMessageRepository::new(db)
        .delete_by_issue_id("1_1")
        .await?;
    assert_eq!(removed, 0);

    Ok(())
}
