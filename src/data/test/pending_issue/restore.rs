use super::*;

/// Tests putting a claimed issue back after a failed validation.
///
/// Expected: the issue is pending again with the same content, time and files
#[tokio::test]
async fn restores_claimed_issue() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PendingIssueRepository::new(db);
    let created = repo
        .create(CreatePendingIssueParam {
            id: "42_1700000000".to_string(),
            author_id: 42,
            title: "Crash".to_string(),
            description: "On start".to_string(),
            labels: vec!["bug".to_string()],
            files: vec![uploaded("a.png"), uploaded("b.png")],
        })
        .await?;

    let claimed = repo.claim(&created.id).await?.unwrap();
    repo.restore(&claimed).await?;

    let restored = repo.get_by_id(&created.id).await?.unwrap();
    assert_eq!(restored.title, created.title);
    assert_eq!(restored.labels, created.labels);
    assert_eq!(restored.created_at, created.created_at);
    assert_eq!(restored.files, created.files);

    Ok(())
}

/// Tests restoring over an id that is still pending.
///
/// Expected: Err(DbErr), the stored issue is untouched
#[tokio::test]
async fn fails_when_still_pending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pending_issue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PendingIssueRepository::new(db);
    let created = repo
        .create(CreatePendingIssueParam {
            id: "42_1700000000".to_string(),
            author_id: 42,
            title: "Crash".to_string(),
            description: "On start".to_string(),
            labels: Vec::new(),
            files: Vec::new(),
        })
        .await?;

    let result = repo.restore(&created).await;
    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert!(repo.exists(&created.id).await?);

    Ok(())
}
