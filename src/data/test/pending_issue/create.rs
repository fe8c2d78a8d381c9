use super::*;

/// Tests storing a pending issue with its initial files.
///
/// Verifies that the issue fields, labels and file order round-trip through the
/// repository.
///
/// Expected: Ok with all files in submission order
#[tokio::test]
async fn creates_issue_with_files() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PendingIssueRepository::new(db);
    let issue = repo
        .create(CreatePendingIssueParam {
            id: "42_1700000000".to_string(),
            author_id: 42,
            title: "Crash on launch".to_string(),
            description: "Open the game, it closes".to_string(),
            labels: vec!["bug".to_string()],
            files: vec![uploaded("first.png"), uploaded("second.mp4")],
        })
        .await?;

    assert_eq!(issue.id, "42_1700000000");
    assert_eq!(issue.author_id, 42);
    assert_eq!(issue.labels, vec!["bug".to_string()]);
    assert_eq!(issue.files.len(), 2);
    assert_eq!(issue.files[0].filename, "first.png");
    assert_eq!(issue.files[1].filename, "second.mp4");

    Ok(())
}

/// Tests storing a pending issue without files.
///
/// Expected: Ok with empty file list and no file rows
#[tokio::test]
async fn creates_issue_without_files() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let issue = PendingIssueRepository::new(db)
        .create(CreatePendingIssueParam {
            id: "7_1700000001".to_string(),
            author_id: 7,
            title: "Typo".to_string(),
            description: "Main menu says 'Opitons'".to_string(),
            labels: Vec::new(),
            files: Vec::new(),
        })
        .await?;

    assert!(issue.files.is_empty());
    let file_count = entity::prelude::PendingIssueFile::find().count(db).await?;
    assert_eq!(file_count, 0);

    Ok(())
}

/// Tests that reusing an issue id fails instead of overwriting.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::pending_issue::create_pending_issue(db).await?;

    let result = PendingIssueRepository::new(db)
        .create(CreatePendingIssueParam {
            id: existing.id.clone(),
            author_id: 1,
            title: "Duplicate".to_string(),
            description: "Same id".to_string(),
            labels: Vec::new(),
            files: Vec::new(),
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
