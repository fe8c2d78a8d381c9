use super::*;

/// Tests appending files after submission.
///
/// Verifies that new files come after the ones stored at submission.
///
/// Expected: Ok(1) and three files in order
#[tokio::test]
async fn appends_files_after_existing_ones() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::pending_issue::PendingIssueFactory::new(db)
        .file("one.png", "https://example.com/one.png")
        .file("two.png", "https://example.com/two.png")
        .build()
        .await?;

    let repo = PendingIssueRepository::new(db);
    let added = repo.add_files(&created.id, &[uploaded("three.mov")]).await?;
    assert_eq!(added, 1);

    let issue = repo.get_by_id(&created.id).await?.unwrap();
    let names: Vec<&str> = issue.files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, vec!["one.png", "two.png", "three.mov"]);
    assert!(issue.files[2].discord_url.is_some());

    Ok(())
}

/// Tests appending files to an issue that was already handled.
///
/// Expected: Err(AppError::NotFound) and no file row written
#[tokio::test]
async fn fails_for_missing_issue() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PendingIssueRepository::new(db)
        .add_files("5_1700000000", &[uploaded("late.png")])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    let file_count = entity::prelude::PendingIssueFile::find().count(db).await?;
    assert_eq!(file_count, 0);

    Ok(())
}
