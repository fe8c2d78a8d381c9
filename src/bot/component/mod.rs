//! Message components and modals of the issue workflow.
//!
//! Every button, select menu and modal carries its action and the id of the issue
//! (or draft) it belongs to in its custom id, `issue:<verb>:<id>[:<extra>]`. Routing
//! an interaction only needs the custom id and the stores, so buttons keep working
//! after a restart.

pub mod channel;
pub mod form;
pub mod modal;
pub mod validation;

use std::{fmt, str::FromStr};

use serenity::all::{
    CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage,
};

use crate::error::internal::InternalError;

const PREFIX: &str = "issue";

/// Action behind a button or select menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentAction {
    /// "Create Issue" under the form prompt.
    OpenForm { draft_id: u64 },
    /// "Upload File" on a pending issue.
    Upload { issue_id: String },
    /// "Validate Issue" on a pending issue.
    Validate { issue_id: String },
    /// "Reject" on a pending issue.
    Reject { issue_id: String },
    /// "Validate and send to Kanban" in the validation choice.
    ValidateWithKanban { issue_id: String },
    /// "Validate only" in the validation choice.
    ValidateOnly { issue_id: String },
    /// Column picked in the kanban select menu.
    SelectColumn { issue_id: String, field_id: String },
}

/// Action behind a modal submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    SubmitIssue { draft_id: u64 },
}

impl fmt::Display for ComponentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenForm { draft_id } => write!(f, "{}:open:{}", PREFIX, draft_id),
            Self::Upload { issue_id } => write!(f, "{}:upload:{}", PREFIX, issue_id),
            Self::Validate { issue_id } => write!(f, "{}:validate:{}", PREFIX, issue_id),
            Self::Reject { issue_id } => write!(f, "{}:reject:{}", PREFIX, issue_id),
            Self::ValidateWithKanban { issue_id } => write!(f, "{}:kanban:{}", PREFIX, issue_id),
            Self::ValidateOnly { issue_id } => write!(f, "{}:validate_only:{}", PREFIX, issue_id),
            Self::SelectColumn { issue_id, field_id } => {
                write!(f, "{}:column:{}:{}", PREFIX, issue_id, field_id)
            }
        }
    }
}

impl FromStr for ComponentAction {
    type Err = InternalError;

    fn from_str(custom_id: &str) -> Result<Self, Self::Err> {
        let unknown = || InternalError::UnknownCustomId(custom_id.to_string());

        let (verb, id) = split_custom_id(custom_id).ok_or_else(unknown)?;
        let issue_id = id.to_string();

        let action = match verb {
            "open" => Self::OpenForm {
                draft_id: id.parse().map_err(|_| unknown())?,
            },
            "upload" => Self::Upload { issue_id },
            "validate" => Self::Validate { issue_id },
            "reject" => Self::Reject { issue_id },
            "kanban" => Self::ValidateWithKanban { issue_id },
            "validate_only" => Self::ValidateOnly { issue_id },
            "column" => {
                let (issue_id, field_id) = id
                    .split_once(':')
                    .filter(|(issue_id, field_id)| !issue_id.is_empty() && !field_id.is_empty())
                    .ok_or_else(unknown)?;
                Self::SelectColumn {
                    issue_id: issue_id.to_string(),
                    field_id: field_id.to_string(),
                }
            }
            _ => return Err(unknown()),
        };

        Ok(action)
    }
}

impl fmt::Display for ModalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubmitIssue { draft_id } => write!(f, "{}:submit:{}", PREFIX, draft_id),
        }
    }
}

impl FromStr for ModalAction {
    type Err = InternalError;

    fn from_str(custom_id: &str) -> Result<Self, Self::Err> {
        let unknown = || InternalError::UnknownCustomId(custom_id.to_string());

        match split_custom_id(custom_id).ok_or_else(unknown)? {
            ("submit", id) => Ok(Self::SubmitIssue {
                draft_id: id.parse().map_err(|_| unknown())?,
            }),
            _ => Err(unknown()),
        }
    }
}

/// Initial response visible only to the user who interacted.
pub fn ephemeral_response(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

/// Follow-up visible only to the user who interacted.
pub fn ephemeral_followup(content: impl Into<String>) -> CreateInteractionResponseFollowup {
    CreateInteractionResponseFollowup::new()
        .content(content)
        .ephemeral(true)
}

/// Splits `issue:<verb>:<rest>` into verb and rest.
fn split_custom_id(custom_id: &str) -> Option<(&str, &str)> {
    let rest = custom_id.strip_prefix(PREFIX)?.strip_prefix(':')?;
    let (verb, id) = rest.split_once(':')?;
    (!id.is_empty()).then_some((verb, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that every action survives formatting and parsing.
    ///
    /// Expected: parse(display(action)) == action
    #[test]
    fn component_ids_parse_back() {
        let actions = [
            ComponentAction::OpenForm { draft_id: 1234567890 },
            ComponentAction::Upload { issue_id: "42_1700000000".to_string() },
            ComponentAction::Validate { issue_id: "42_1700000000".to_string() },
            ComponentAction::Reject { issue_id: "42_1700000000".to_string() },
            ComponentAction::ValidateWithKanban { issue_id: "42_1700000000".to_string() },
            ComponentAction::ValidateOnly { issue_id: "42_1700000000".to_string() },
            ComponentAction::SelectColumn {
                issue_id: "42_1700000000".to_string(),
                field_id: "PVTSSF_lADOBm".to_string(),
            },
        ];

        for action in actions {
            let custom_id = action.to_string();
            assert!(custom_id.len() <= 100, "{} too long", custom_id);
            assert_eq!(custom_id.parse::<ComponentAction>().unwrap(), action);
        }
    }

    /// Tests the exact shape of the ids stored on channel messages.
    ///
    /// Expected: `issue:<verb>:<issue id>`
    #[test]
    fn channel_button_ids_are_stable() {
        let issue_id = "42_1700000000".to_string();
        assert_eq!(
            ComponentAction::Validate { issue_id: issue_id.clone() }.to_string(),
            "issue:validate:42_1700000000"
        );
        assert_eq!(
            ComponentAction::Upload { issue_id }.to_string(),
            "issue:upload:42_1700000000"
        );
    }

    /// Tests the modal id.
    ///
    /// Expected: round-trips; component ids are not modal ids
    #[test]
    fn modal_ids_parse_back() {
        let action = ModalAction::SubmitIssue { draft_id: 99 };
        assert_eq!(action.to_string(), "issue:submit:99");
        assert_eq!("issue:submit:99".parse::<ModalAction>().unwrap(), action);
        assert!("issue:open:99".parse::<ModalAction>().is_err());
    }

    /// Tests malformed custom ids.
    ///
    /// Expected: Err(UnknownCustomId) for each
    #[test]
    fn rejects_unknown_ids() {
        for custom_id in [
            "",
            "issue",
            "issue:validate",
            "issue:validate:",
            "other:validate:1_1",
            "issue:merge:1_1",
            "issue:open:not-a-number",
            "issue:column:1_1",
            "issue:column:1_1:",
        ] {
            assert!(
                matches!(
                    custom_id.parse::<ComponentAction>(),
                    Err(InternalError::UnknownCustomId(_))
                ),
                "{} should not parse",
                custom_id
            );
        }
    }
}
