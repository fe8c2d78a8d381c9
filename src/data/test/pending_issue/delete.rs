use super::*;

/// Tests deleting a pending issue with files.
///
/// Expected: Ok(true), issue and file rows removed
#[tokio::test]
async fn deletes_issue_and_files() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::pending_issue::PendingIssueFactory::new(db)
        .file("shot.png", "https://example.com/shot.png")
        .build()
        .await?;

    let repo = PendingIssueRepository::new(db);
    assert!(repo.delete(&created.id).await?);

    assert!(!repo.exists(&created.id).await?);
    let file_count = entity::prelude::PendingIssueFile::find().count(db).await?;
    assert_eq!(file_count, 0);

    Ok(())
}

/// Tests that deleting twice reports the second call as a no-op.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_delete_returns_false() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::pending_issue::create_pending_issue(db).await?;

    let repo = PendingIssueRepository::new(db);
    assert!(repo.delete(&created.id).await?);
    assert!(!repo.delete(&created.id).await?);

    Ok(())
}

/// Tests that deleting one issue leaves the others pending.
///
/// Expected: Ok with the other issue still present
#[tokio::test]
async fn keeps_other_issues() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::pending_issue::create_pending_issue(db).await?;
    let second = factory::pending_issue::create_pending_issue(db).await?;

    let repo = PendingIssueRepository::new(db);
    repo.delete(&first.id).await?;

    assert!(repo.exists(&second.id).await?);
    let count = entity::prelude::PendingIssue::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
