//! Submission and upload flow of pending issues.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{issue_message::IssueMessageRepository, pending_issue::PendingIssueRepository},
    error::AppError,
    model::{
        issue_message::{IssueMessage, UpsertIssueMessageParam},
        pending_issue::{CreatePendingIssueParam, PendingIssue, UploadedFile},
    },
};

/// Trims the form fields and rejects blank ones.
///
/// # Returns
/// - `Ok((title, description))` - Both fields trimmed and non-empty
/// - `Err(AppError::BadRequest)` - Either field is blank
pub fn validate_submission(title: &str, description: &str) -> Result<(String, String), AppError> {
    let title = title.trim();
    let description = description.trim();

    if title.is_empty() || description.is_empty() {
        return Err(AppError::BadRequest(
            "Title and description are required.".to_string(),
        ));
    }

    Ok((title.to_string(), description.to_string()))
}

pub struct PendingIssueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PendingIssueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a submitted issue.
    ///
    /// # Arguments
    /// - `author_id` - Discord user who filled the form
    /// - `title`, `description` - Form fields, already validated
    /// - `files` - Media uploaded from the command message
    /// - `now` - Submission time, part of the issue id
    ///
    /// # Returns
    /// - `Ok(PendingIssue)` - The stored issue
    /// - `Err(AppError::DbErr)` - Insert failed, e.g. the same author submitted twice
    ///   within one second
    pub async fn submit(
        &self,
        author_id: u64,
        title: String,
        description: String,
        files: Vec<UploadedFile>,
        now: DateTime<Utc>,
    ) -> Result<PendingIssue, AppError> {
        let issue = PendingIssueRepository::new(self.db)
            .create(CreatePendingIssueParam {
                id: PendingIssue::new_id(author_id, now),
                author_id,
                title,
                description,
                labels: Vec::new(),
                files,
            })
            .await?;

        tracing::info!(
            "Stored pending issue {} with {} files",
            issue.id,
            issue.files.len()
        );

        Ok(issue)
    }

    /// Appends uploaded files and returns the updated issue.
    ///
    /// # Returns
    /// - `Ok(PendingIssue)` - The issue with all its files
    /// - `Err(AppError::NotFound)` - The issue was handled meanwhile
    pub async fn attach(
        &self,
        issue_id: &str,
        files: &[UploadedFile],
    ) -> Result<PendingIssue, AppError> {
        let repo = PendingIssueRepository::new(self.db);
        repo.add_files(issue_id, files).await?;

        repo.get_by_id(issue_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pending issue {} not found", issue_id)))
    }

    /// Records the channel message showing an issue.
    pub async fn track_message(
        &self,
        issue_id: &str,
        channel_id: u64,
        message_id: u64,
    ) -> Result<IssueMessage, AppError> {
        IssueMessageRepository::new(self.db)
            .upsert(UpsertIssueMessageParam {
                issue_id: issue_id.to_string(),
                channel_id,
                message_id,
            })
            .await
    }
}
