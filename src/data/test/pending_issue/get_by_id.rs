use super::*;

/// Tests retrieving a pending issue with its files.
///
/// Expected: Ok(Some) with files ordered by upload
#[tokio::test]
async fn returns_issue_with_files() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::pending_issue::PendingIssueFactory::new(db)
        .author_id(99)
        .title("Lag spikes")
        .file("a.png", "https://example.com/a.png")
        .file("b.png", "https://example.com/b.png")
        .build()
        .await?;

    let issue = PendingIssueRepository::new(db)
        .get_by_id(&created.id)
        .await?
        .unwrap();

    assert_eq!(issue.author_id, 99);
    assert_eq!(issue.title, "Lag spikes");
    let names: Vec<&str> = issue.files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, vec!["a.png", "b.png"]);
    assert_eq!(issue.files[0].url, "https://example.com/a.png");

    Ok(())
}

/// Tests that files of other issues are not mixed in.
///
/// Expected: Ok(Some) with only the queried issue's file
#[tokio::test]
async fn returns_only_files_of_issue() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::pending_issue::PendingIssueFactory::new(db)
        .file("mine.png", "https://example.com/mine.png")
        .build()
        .await?;
    factory::pending_issue::PendingIssueFactory::new(db)
        .file("other.png", "https://example.com/other.png")
        .build()
        .await?;

    let issue = PendingIssueRepository::new(db)
        .get_by_id(&first.id)
        .await?
        .unwrap();

    assert_eq!(issue.files.len(), 1);
    assert_eq!(issue.files[0].filename, "mine.png");

    Ok(())
}

/// Tests retrieving an issue that is not pending.
///
/// Expected: Ok(None), and exists() is false
#[tokio::test]
async fn returns_none_for_unknown_issue() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PendingIssueRepository::new(db);

    assert!(repo.get_by_id("1_1").await?.is_none());
    assert!(!repo.exists("1_1").await?);

    Ok(())
}
