use reqwest::Method;
use serde_json::json;

use crate::{
    error::{github::GitHubError, AppError},
    model::github::{GitHubIssue, IssueStateFilter},
};

use super::{ensure_status, GitHubService};

impl GitHubService {
    /// Opens a new issue in the repository.
    ///
    /// # Returns
    /// - `Ok(GitHubIssue)` - The created issue, including its number and URL
    /// - `Err(AppError::GitHubErr)` - GitHub rejected the request
    pub async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<GitHubIssue, AppError> {
        let url = self.repo_endpoint(&["issues"])?;
        let endpoint = url.path().to_string();

        let response = self
            .rest(Method::POST, url)
            .json(&json!({ "title": title, "body": body, "labels": labels }))
            .send()
            .await?;
        let response = ensure_status(response, &endpoint, |status| status.is_success()).await?;

        Ok(response.json().await?)
    }

    /// Lists repository issues, most recently updated first.
    ///
    /// # Arguments
    /// - `state` - Which issues to include
    /// - `per_page` - Page size
    /// - `page` - 1-based page number
    pub async fn list_issues(
        &self,
        state: IssueStateFilter,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<GitHubIssue>, AppError> {
        let url = self.repo_endpoint(&["issues"])?;
        let endpoint = url.path().to_string();

        let response = self
            .rest(Method::GET, url)
            .query(&[
                ("state", state.as_str().to_string()),
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
                ("sort", "updated".to_string()),
                ("direction", "desc".to_string()),
            ])
            .send()
            .await?;
        let response = ensure_status(response, &endpoint, |status| status.is_success()).await?;

        Ok(response.json().await?)
    }

    pub async fn get_issue(&self, number: u64) -> Result<GitHubIssue, AppError> {
        let url = self.repo_endpoint(&["issues", &number.to_string()])?;
        let endpoint = url.path().to_string();

        let response = self.rest(Method::GET, url).send().await?;
        let response = ensure_status(response, &endpoint, |status| status.is_success()).await?;

        Ok(response.json().await?)
    }

    /// Gets the GraphQL node id of an issue, needed to place it on a project board.
    pub async fn get_issue_node_id(&self, number: u64) -> Result<String, AppError> {
        self.get_issue(number)
            .await?
            .node_id
            .ok_or_else(|| GitHubError::MissingField("node_id").into())
    }
}
