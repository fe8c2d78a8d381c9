//! Domain models for issues awaiting review in the issues channel.

use chrono::{DateTime, Utc};

use crate::{
    error::{internal::InternalError, AppError},
    util::parse::parse_u64_from_string,
};

/// Bug report submitted through the issue form and not yet validated or rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingIssue {
    /// `"{author_id}_{unix_seconds}"`, also embedded in component custom ids.
    pub id: String,
    /// Discord user who submitted the form.
    pub author_id: u64,
    pub title: String,
    pub description: String,
    /// Labels applied to the GitHub issue on creation.
    pub labels: Vec<String>,
    /// Media already copied to the repository, in upload order.
    pub files: Vec<UploadedFile>,
    pub created_at: DateTime<Utc>,
}

impl PendingIssue {
    /// Builds the identifier of a new pending issue.
    ///
    /// # Arguments
    /// - `author_id` - Discord ID of the submitting user
    /// - `now` - Submission time; only whole seconds are kept
    pub fn new_id(author_id: u64, now: DateTime<Utc>) -> String {
        format!("{}_{}", author_id, now.timestamp())
    }

    /// Converts entity models to a pending issue at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The pending issue row
    /// - `files` - The rows of its uploaded files, already ordered
    ///
    /// # Returns
    /// - `Ok(PendingIssue)` - The converted domain model
    /// - `Err(AppError::InternalErr)` - Author id or labels could not be decoded
    pub fn from_entity(
        entity: entity::pending_issue::Model,
        files: Vec<entity::pending_issue_file::Model>,
    ) -> Result<Self, AppError> {
        let labels: Vec<String> =
            serde_json::from_str(&entity.labels).map_err(|e| InternalError::LabelsJson {
                issue_id: entity.id.clone(),
                source: e,
            })?;

        Ok(Self {
            author_id: parse_u64_from_string(entity.author_id)?,
            id: entity.id,
            title: entity.title,
            description: entity.description,
            labels,
            files: files.into_iter().map(UploadedFile::from_entity).collect(),
            created_at: entity.created_at,
        })
    }
}

/// Screenshot or video copied from Discord into the GitHub repository.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub filename: String,
    /// Raw download URL in the repository, used in the issue body.
    pub url: String,
    /// Original Discord CDN URL, preferred for previews in Discord embeds.
    pub discord_url: Option<String>,
}

impl UploadedFile {
    pub fn from_entity(entity: entity::pending_issue_file::Model) -> Self {
        Self {
            filename: entity.filename,
            url: entity.url,
            discord_url: entity.discord_url,
        }
    }

    /// URL shown inside Discord: the CDN copy when known, else the repository copy.
    pub fn preview_url(&self) -> &str {
        self.discord_url.as_deref().unwrap_or(&self.url)
    }
}

/// Parameters for storing a freshly submitted issue.
#[derive(Debug, Clone)]
pub struct CreatePendingIssueParam {
    pub id: String,
    pub author_id: u64,
    pub title: String,
    pub description: String,
    pub labels: Vec<String>,
    pub files: Vec<UploadedFile>,
}
