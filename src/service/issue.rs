//! Turns pending issues into GitHub issues.

use sea_orm::DatabaseConnection;

use crate::{
    data::{issue_message::IssueMessageRepository, pending_issue::PendingIssueRepository},
    error::AppError,
    model::{
        github::{GitHubIssue, StatusField},
        pending_issue::{PendingIssue, UploadedFile},
    },
    service::github::GitHubService,
};

/// Renders the Markdown body of the GitHub issue.
///
/// Files are embedded with their repository URL, in upload order, followed by a
/// horizontal rule. Without files the body is just the description block.
pub fn render_issue_body(description: &str, files: &[UploadedFile]) -> String {
    let mut body = format!("**Description:**\n{}\n\n", description);

    if !files.is_empty() {
        body.push_str("**Attached Images:**\n\n");
        for file in files {
            body.push_str(&format!("![{}]({})\n\n", file.filename, file.url));
        }
        body.push_str("---\n");
    }

    body
}

/// Result of placing a freshly created issue on the project board.
#[derive(Debug, Clone, PartialEq)]
pub enum KanbanOutcome {
    /// Added to the named column.
    Added(String),
    /// The issue exists on GitHub but is not on the board.
    Failed(String),
}

pub struct IssueService<'a> {
    db: &'a DatabaseConnection,
    github: &'a GitHubService,
}

impl<'a> IssueService<'a> {
    pub fn new(db: &'a DatabaseConnection, github: &'a GitHubService) -> Self {
        Self { db, github }
    }

    /// Takes a pending issue for validation.
    ///
    /// Only one caller gets the issue; a concurrent validation or a rejection that got
    /// there first leaves `None`. Hand the issue back with `release` if GitHub fails.
    pub async fn claim(&self, issue_id: &str) -> Result<Option<PendingIssue>, AppError> {
        PendingIssueRepository::new(self.db).claim(issue_id).await
    }

    /// Makes a claimed issue pending again after its GitHub issue could not be created.
    ///
    /// Failures are logged; the moderator has already been told validation failed.
    pub async fn release(&self, issue: &PendingIssue) {
        if let Err(e) = PendingIssueRepository::new(self.db).restore(issue).await {
            tracing::error!("Failed to restore pending issue {}: {}", issue.id, e);
        }
    }

    /// Creates the GitHub issue for a claimed pending issue.
    pub async fn create_github_issue(&self, issue: &PendingIssue) -> Result<GitHubIssue, AppError> {
        let body = render_issue_body(&issue.description, &issue.files);
        let created = self
            .github
            .create_issue(&issue.title, &body, &issue.labels)
            .await?;

        tracing::info!(
            "Created GitHub issue #{} from pending issue {}",
            created.number,
            issue.id
        );

        Ok(created)
    }

    /// Returns the GraphQL node id of a created issue.
    ///
    /// Uses the id from the creation response and asks GitHub only when it is absent.
    pub async fn resolve_node_id(&self, issue: &GitHubIssue) -> Result<String, AppError> {
        match &issue.node_id {
            Some(node_id) => Ok(node_id.clone()),
            None => self.github.get_issue_node_id(issue.number).await,
        }
    }

    /// Adds a created issue to the project board in the chosen column.
    ///
    /// Never fails: problems are logged and reported as `KanbanOutcome::Failed` with
    /// the text shown to moderators.
    ///
    /// # Arguments
    /// - `issue` - The created GitHub issue
    /// - `project_id` - ProjectV2 node id
    /// - `status_field` - Field holding the columns
    /// - `option_id` - Selected column
    pub async fn add_to_project(
        &self,
        issue: &GitHubIssue,
        project_id: &str,
        status_field: &StatusField,
        option_id: &str,
    ) -> KanbanOutcome {
        let Some(column) = status_field.option(option_id) else {
            return KanbanOutcome::Failed("Column not found".to_string());
        };

        let node_id = match self.resolve_node_id(issue).await {
            Ok(node_id) => node_id,
            Err(e) => {
                tracing::error!("Failed to resolve node id of issue #{}: {}", issue.number, e);
                return KanbanOutcome::Failed(
                    "Issue created but unable to fetch its id for the kanban".to_string(),
                );
            }
        };

        match self
            .github
            .add_issue_to_project(project_id, &node_id, &status_field.id, &column.id)
            .await
        {
            Ok(item_id) => {
                tracing::info!(
                    "Added issue #{} to column {} as item {}",
                    issue.number,
                    column.name,
                    item_id
                );
                KanbanOutcome::Added(column.name.clone())
            }
            Err(e) => {
                tracing::error!("Failed to add issue #{} to project: {}", issue.number, e);
                KanbanOutcome::Failed(
                    "Issue created but error while adding to the kanban".to_string(),
                )
            }
        }
    }

    /// Forgets a handled issue: its message tracking and, if still there, its record.
    pub async fn finalize(&self, issue_id: &str) -> Result<(), AppError> {
        PendingIssueRepository::new(self.db).delete(issue_id).await?;
        IssueMessageRepository::new(self.db)
            .delete_by_issue_id(issue_id)
            .await?;
        Ok(())
    }
}
