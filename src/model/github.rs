//! GitHub REST and GraphQL payloads used by the bot.

use serde::Deserialize;

/// Issue as returned by the REST issues endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GitHubIssue {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    /// GraphQL node id, needed to add the issue to a project.
    #[serde(default)]
    pub node_id: Option<String>,
    /// `"open"` or `"closed"`.
    pub state: String,
    #[serde(default)]
    pub labels: Vec<GitHubLabel>,
}

impl GitHubIssue {
    pub fn is_open(&self) -> bool {
        self.state == "open"
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GitHubLabel {
    pub name: String,
}

/// `state` filter of the issue listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueStateFilter {
    Open,
    Closed,
    All,
}

impl IssueStateFilter {
    /// Parses a user-supplied state, falling back to `Open` for anything unknown.
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "closed" => Self::Closed,
            "all" => Self::All,
            _ => Self::Open,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::All => "All",
        }
    }
}

/// ProjectV2 node with its first fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectInfo {
    pub id: String,
    pub title: String,
    pub fields: ProjectFieldConnection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectFieldConnection {
    pub nodes: Vec<ProjectField>,
}

/// Project field; every member is optional because field types the query has no
/// fragment for come back as empty objects.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectField {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub options: Vec<StatusOption>,
}

impl ProjectInfo {
    /// Finds the single-select field whose options are the kanban columns.
    ///
    /// A field with the right name but no options does not qualify.
    pub fn status_field(&self, name: &str) -> Option<StatusField> {
        self.fields.nodes.iter().find_map(|field| {
            let (Some(id), Some(field_name)) = (&field.id, &field.name) else {
                return None;
            };
            if field_name != name || field.options.is_empty() {
                return None;
            }
            Some(StatusField {
                id: id.clone(),
                name: field_name.clone(),
                options: field.options.clone(),
            })
        })
    }

    /// Finds a status field by its node id.
    pub fn status_field_by_id(&self, field_id: &str) -> Option<StatusField> {
        let name = self
            .fields
            .nodes
            .iter()
            .find(|field| field.id.as_deref() == Some(field_id))?
            .name
            .clone()?;
        self.status_field(&name)
            .filter(|field| field.id == field_id)
    }
}

/// Single-select project field used as the kanban column selector.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusField {
    pub id: String,
    pub name: String,
    pub options: Vec<StatusOption>,
}

impl StatusField {
    pub fn option(&self, option_id: &str) -> Option<&StatusOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

/// One kanban column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusOption {
    pub id: String,
    pub name: String,
}
