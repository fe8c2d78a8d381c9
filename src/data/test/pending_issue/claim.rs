use super::*;

/// Tests claiming a pending issue with files.
///
/// Expected: Some(issue) with its files in order, issue and file rows removed
#[tokio::test]
async fn claims_issue_with_files() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::pending_issue::PendingIssueFactory::new(db)
        .title("Crash on login")
        .file("first.png", "https://example.com/first.png")
        .file("second.mp4", "https://example.com/second.mp4")
        .build()
        .await?;

    let repo = PendingIssueRepository::new(db);
    let claimed = repo.claim(&created.id).await?.unwrap();

    assert_eq!(claimed.id, created.id);
    assert_eq!(claimed.title, "Crash on login");
    let names: Vec<&str> = claimed.files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, ["first.png", "second.mp4"]);

    assert!(!repo.exists(&created.id).await?);
    let file_count = entity::prelude::PendingIssueFile::find().count(db).await?;
    assert_eq!(file_count, 0);

    Ok(())
}

/// Tests that an issue can only be claimed once.
///
/// Expected: Some on the first claim, None on the second
#[tokio::test]
async fn second_claim_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::pending_issue::create_pending_issue(db).await?;

    let repo = PendingIssueRepository::new(db);
    assert!(repo.claim(&created.id).await?.is_some());
    assert!(repo.claim(&created.id).await?.is_none());

    Ok(())
}

/// Tests that a rejected issue cannot be claimed for validation.
///
/// Expected: delete wins, claim returns None
#[tokio::test]
async fn claim_after_delete_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::pending_issue::create_pending_issue(db).await?;

    let repo = PendingIssueRepository::new(db);
    assert!(repo.delete(&created.id).await?);
    assert!(repo.claim(&created.id).await?.is_none());

    Ok(())
}

/// Tests claiming an id that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_issue_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let claimed = PendingIssueRepository::new(db).claim("42_1700000000").await?;
    assert!(claimed.is_none());

    Ok(())
}
