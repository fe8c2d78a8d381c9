use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{github::GitHubError, AppError},
    model::github::ProjectInfo,
};

use super::GitHubService;

const PROJECT_INFO_QUERY: &str = r#"
query($projectId: ID!) {
  node(id: $projectId) {
    ... on ProjectV2 {
      id
      title
      fields(first: 20) {
        nodes {
          ... on ProjectV2Field {
            id
            name
          }
          ... on ProjectV2SingleSelectField {
            id
            name
            options {
              id
              name
            }
          }
        }
      }
    }
  }
}
"#;

const ADD_ITEM_MUTATION: &str = r#"
mutation($projectId: ID!, $contentId: ID!) {
  addProjectV2ItemById(input: { projectId: $projectId, contentId: $contentId }) {
    item {
      id
    }
  }
}
"#;

const SET_STATUS_MUTATION: &str = r#"
mutation($projectId: ID!, $itemId: ID!, $fieldId: ID!, $value: ProjectV2FieldValue!) {
  updateProjectV2ItemFieldValue(input: {
    projectId: $projectId
    itemId: $itemId
    fieldId: $fieldId
    value: $value
  }) {
    projectV2Item {
      id
    }
  }
}
"#;

#[derive(Deserialize)]
struct ProjectNode {
    node: Option<ProjectInfo>,
}

#[derive(Deserialize)]
struct AddItemData {
    #[serde(rename = "addProjectV2ItemById")]
    add_item: Option<AddItemPayload>,
}

#[derive(Deserialize)]
struct AddItemPayload {
    item: Option<ProjectItem>,
}

#[derive(Deserialize)]
struct ProjectItem {
    id: String,
}

impl GitHubService {
    /// Fetches a ProjectV2 node with its first 20 fields and their options.
    ///
    /// # Returns
    /// - `Ok(ProjectInfo)` - The project and its fields
    /// - `Err(AppError::GitHubErr)` - Non-200 status, GraphQL errors, or no such project
    pub async fn get_project_info(&self, project_id: &str) -> Result<ProjectInfo, AppError> {
        let data: Option<ProjectNode> = self
            .graphql(PROJECT_INFO_QUERY, json!({ "projectId": project_id }))
            .await?;

        let project = data
            .and_then(|data| data.node)
            .ok_or(GitHubError::MissingField("node"))?;

        tracing::debug!(
            "Fetched project {} ({}) with {} fields",
            project.title,
            project.id,
            project.fields.nodes.len()
        );

        Ok(project)
    }

    /// Adds an issue to a project board and moves it into a column.
    ///
    /// Runs two mutations: `addProjectV2ItemById`, then
    /// `updateProjectV2ItemFieldValue` on the returned item. Either failing fails the
    /// whole operation; an item added by the first call is left in place.
    ///
    /// # Arguments
    /// - `project_id` - ProjectV2 node id
    /// - `content_id` - GraphQL node id of the issue
    /// - `field_id` - Single-select field holding the columns
    /// - `option_id` - Column to put the issue in
    ///
    /// # Returns
    /// - `Ok(String)` - Id of the project item
    /// - `Err(AppError)` - Any status, GraphQL or shape error from either call
    pub async fn add_issue_to_project(
        &self,
        project_id: &str,
        content_id: &str,
        field_id: &str,
        option_id: &str,
    ) -> Result<String, AppError> {
        let data: Option<AddItemData> = self
            .graphql(
                ADD_ITEM_MUTATION,
                json!({ "projectId": project_id, "contentId": content_id }),
            )
            .await?;

        let item_id = data
            .and_then(|data| data.add_item)
            .and_then(|payload| payload.item)
            .map(|item| item.id)
            .ok_or(GitHubError::MissingField("addProjectV2ItemById.item.id"))?;

        let _: Option<Value> = self
            .graphql(
                SET_STATUS_MUTATION,
                json!({
                    "projectId": project_id,
                    "itemId": item_id,
                    "fieldId": field_id,
                    "value": { "singleSelectOptionId": option_id },
                }),
            )
            .await?;

        Ok(item_id)
    }
}
