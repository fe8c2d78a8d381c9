//! Pending issue factory for creating test pending-issue records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating pending issues, optionally with uploaded files.
///
/// # Example
///
/// ```rust,ignore
/// let issue = PendingIssueFactory::new(&db)
///     .author_id(42)
///     .title("Button does nothing")
///     .build()
///     .await?;
/// ```
pub struct PendingIssueFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    author_id: u64,
    title: String,
    description: String,
    labels: Vec<String>,
    files: Vec<(String, String)>,
}

impl<'a> PendingIssueFactory<'a> {
    /// Creates a new PendingIssueFactory with default values.
    ///
    /// Defaults:
    /// - id: `"{author_id}_{counter}"`
    /// - author_id: `100000000000000000 + counter`
    /// - title: `"Issue {counter}"`
    /// - description: `"Steps to reproduce"`
    /// - no labels, no files
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let counter = next_id();
        let author_id = 100_000_000_000_000_000 + counter;
        Self {
            db,
            id: format!("{}_{}", author_id, counter),
            author_id,
            title: format!("Issue {}", counter),
            description: "Steps to reproduce".to_string(),
            labels: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn author_id(mut self, author_id: u64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Adds an uploaded file with the given name and GitHub URL.
    pub fn file(mut self, filename: impl Into<String>, url: impl Into<String>) -> Self {
        self.files.push((filename.into(), url.into()));
        self
    }

    /// Inserts the pending issue and its files.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created pending issue row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pending_issue::Model, DbErr> {
        let labels = serde_json::to_string(&self.labels)
            .map_err(|e| DbErr::Custom(format!("Failed to encode labels: {}", e)))?;

        let issue = entity::pending_issue::ActiveModel {
            id: ActiveValue::Set(self.id.clone()),
            author_id: ActiveValue::Set(self.author_id.to_string()),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            labels: ActiveValue::Set(labels),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        for (filename, url) in self.files {
            entity::pending_issue_file::ActiveModel {
                pending_issue_id: ActiveValue::Set(self.id.clone()),
                discord_url: ActiveValue::Set(Some(format!(
                    "https://cdn.discordapp.com/attachments/1/2/{}",
                    filename
                ))),
                filename: ActiveValue::Set(filename),
                url: ActiveValue::Set(url),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(issue)
    }
}

/// Creates a pending issue with default values.
pub async fn create_pending_issue(
    db: &DatabaseConnection,
) -> Result<entity::pending_issue::Model, DbErr> {
    PendingIssueFactory::new(db).build().await
}
