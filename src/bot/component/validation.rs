//! Validation choice and kanban column selection.
//!
//! Shown to a moderator as ephemeral messages after "Validate Issue" when a project
//! is configured. The pending issue is only claimed once a path is chosen, and put
//! back if GitHub refuses it.

use std::time::Duration;

use chrono::Utc;
use serenity::all::{
    ButtonStyle, ComponentInteraction, ComponentInteractionDataKind, Context, CreateActionRow,
    CreateButton, CreateInteractionResponse, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption,
};

use crate::{
    bot::{
        component::{
            channel::{clear_upload_prompt, close_tracked_message},
            ephemeral_followup, ComponentAction,
        },
        embed,
    },
    error::AppError,
    model::github::{GitHubIssue, ProjectInfo, StatusField},
    service::issue::{IssueService, KanbanOutcome},
    state::BotState,
    util::discord::delete_followup_later,
};

/// Discord caps select menus at 25 options.
const MAX_SELECT_OPTIONS: usize = 25;

const KANBAN_ERROR_DELETE_DELAY: Duration = Duration::from_secs(5);

const ISSUE_GONE: &str = "This issue no longer exists.";
const COLUMN_NOT_FOUND: &str = "Error: column not found";
const PROJECT_UNAVAILABLE: &str = "Error: unable to fetch the kanban project information";

pub fn choice_components(issue_id: &str) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(
            ComponentAction::ValidateWithKanban {
                issue_id: issue_id.to_string(),
            }
            .to_string(),
        )
        .label("Validate and send to Kanban")
        .style(ButtonStyle::Primary),
        CreateButton::new(
            ComponentAction::ValidateOnly {
                issue_id: issue_id.to_string(),
            }
            .to_string(),
        )
        .label("Validate only")
        .style(ButtonStyle::Secondary),
    ])]
}

/// Select menu listing the kanban columns, preselecting `default_column`.
pub fn column_select(
    issue_id: &str,
    status_field: &StatusField,
    default_column: &str,
) -> CreateActionRow {
    let options = status_field
        .options
        .iter()
        .take(MAX_SELECT_OPTIONS)
        .map(|option| {
            CreateSelectMenuOption::new(&option.name, &option.id)
                .description(format!("Send the issue to {}", option.name))
                .default_selection(option.name == default_column)
        })
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            ComponentAction::SelectColumn {
                issue_id: issue_id.to_string(),
                field_id: status_field.id.clone(),
            }
            .to_string(),
            CreateSelectMenuKind::String { options },
        )
        .placeholder("Choose a column..."),
    )
}

/// "Validate and send to Kanban": replaces the choice with the column select.
pub async fn handle_validate_with_kanban(
    ctx: &Context,
    state: &BotState,
    interaction: &ComponentInteraction,
    issue_id: &str,
) -> Result<(), AppError> {
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await?;

    let Some(project_id) = state.config.project_id.as_deref() else {
        interaction
            .create_followup(&ctx.http, ephemeral_followup(PROJECT_UNAVAILABLE))
            .await?;
        return Ok(());
    };

    let project = match state.github.get_project_info(project_id).await {
        Ok(project) => project,
        Err(e) => {
            tracing::error!("Failed to fetch project {}: {}", project_id, e);
            interaction
                .create_followup(&ctx.http, ephemeral_followup(PROJECT_UNAVAILABLE))
                .await?;
            return Ok(());
        }
    };

    let Some(status_field) = project.status_field(&state.config.project_field_status) else {
        interaction
            .create_followup(
                &ctx.http,
                ephemeral_followup("Error: Status field not found in the project"),
            )
            .await?;
        return Ok(());
    };

    interaction.delete_response(&ctx.http).await?;
    interaction
        .create_followup(
            &ctx.http,
            ephemeral_followup("Choose where to send the issue:").components(vec![
                column_select(issue_id, &status_field, &state.config.project_status_todo),
            ]),
        )
        .await?;

    Ok(())
}

/// "Validate only": creates the GitHub issue without touching the project.
pub async fn handle_validate_only(
    ctx: &Context,
    state: &BotState,
    interaction: &ComponentInteraction,
    issue_id: &str,
) -> Result<(), AppError> {
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await?;
    interaction.delete_response(&ctx.http).await?;

    let service = IssueService::new(&state.db, &state.github);
    let Some(issue) = service.claim(issue_id).await? else {
        interaction
            .create_followup(&ctx.http, ephemeral_followup(ISSUE_GONE))
            .await?;
        return Ok(());
    };

    let github_issue = match service.create_github_issue(&issue).await {
        Ok(github_issue) => github_issue,
        Err(e) => {
            tracing::error!("Failed to create GitHub issue for {}: {}", issue_id, e);
            service.release(&issue).await;
            interaction
                .create_followup(
                    &ctx.http,
                    ephemeral_followup("Error while creating the issue."),
                )
                .await?;
            return Ok(());
        }
    };

    show_created(ctx, state, interaction, issue_id, &github_issue, None).await;
    service.finalize(issue_id).await
}

/// Column picked: creates the GitHub issue and adds it to the chosen column.
///
/// A failure to reach the board does not undo the issue; the channel message shows
/// it and the moderator gets a short-lived notice.
pub async fn handle_select_column(
    ctx: &Context,
    state: &BotState,
    interaction: &ComponentInteraction,
    issue_id: &str,
    field_id: &str,
) -> Result<(), AppError> {
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await?;

    let option_id = match &interaction.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => values.first().cloned(),
        _ => None,
    };
    let (Some(option_id), Some(project_id)) = (option_id, state.config.project_id.as_deref())
    else {
        interaction
            .create_followup(&ctx.http, ephemeral_followup(COLUMN_NOT_FOUND))
            .await?;
        return Ok(());
    };

    let project = state
        .github
        .get_project_info(project_id)
        .await
        .inspect_err(|e| tracing::error!("Failed to fetch project {}: {}", project_id, e));
    let status_field = match selected_column(project, field_id, &option_id) {
        Ok(status_field) => status_field,
        Err(message) => {
            interaction
                .create_followup(&ctx.http, ephemeral_followup(message))
                .await?;
            return Ok(());
        }
    };

    let service = IssueService::new(&state.db, &state.github);
    let Some(issue) = service.claim(issue_id).await? else {
        interaction
            .create_followup(&ctx.http, ephemeral_followup(ISSUE_GONE))
            .await?;
        return Ok(());
    };

    let github_issue = match service.create_github_issue(&issue).await {
        Ok(github_issue) => github_issue,
        Err(e) => {
            tracing::error!("Failed to create GitHub issue for {}: {}", issue_id, e);
            service.release(&issue).await;
            interaction
                .create_followup(
                    &ctx.http,
                    ephemeral_followup("Error while creating the GitHub issue."),
                )
                .await?;
            return Ok(());
        }
    };

    let outcome = service
        .add_to_project(&github_issue, project_id, &status_field, &option_id)
        .await;

    show_created(ctx, state, interaction, issue_id, &github_issue, Some(&outcome)).await;

    if let Err(e) = interaction.delete_response(&ctx.http).await {
        tracing::warn!("Failed to delete column select of issue {}: {}", issue_id, e);
    }

    if let KanbanOutcome::Failed(_) = outcome {
        match interaction
            .create_followup(
                &ctx.http,
                ephemeral_followup("Issue created but error while adding to the kanban"),
            )
            .await
        {
            Ok(notice) => delete_followup_later(
                ctx.http.clone(),
                interaction.token.clone(),
                notice.id,
                KANBAN_ERROR_DELETE_DELAY,
            ),
            Err(e) => tracing::warn!("Failed to send kanban notice for {}: {}", issue_id, e),
        }
    }

    service.finalize(issue_id).await
}

/// Picks the status field holding the selected column.
///
/// # Returns
/// - `Ok(StatusField)` - The field still offers the selected option
/// - `Err(&str)` - Message for the moderator: the project could not be read, or the
///   field or column is gone
fn selected_column(
    project: Result<ProjectInfo, AppError>,
    field_id: &str,
    option_id: &str,
) -> Result<StatusField, &'static str> {
    let project = project.map_err(|_| PROJECT_UNAVAILABLE)?;

    project
        .status_field_by_id(field_id)
        .filter(|field| field.option(option_id).is_some())
        .ok_or(COLUMN_NOT_FOUND)
}

/// Shows the created issue on the channel message and drops the upload prompt.
///
/// The GitHub issue already exists at this point, so Discord failures are only logged.
async fn show_created(
    ctx: &Context,
    state: &BotState,
    interaction: &ComponentInteraction,
    issue_id: &str,
    github_issue: &GitHubIssue,
    kanban: Option<&KanbanOutcome>,
) {
    let result = match embed::created_with_kanban(
        github_issue,
        kanban,
        interaction.user.id.get(),
        Utc::now(),
    ) {
        Ok(embed) => close_tracked_message(ctx, state, issue_id, embed).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        tracing::error!("Failed to update message of issue {}: {}", issue_id, e);
    }

    clear_upload_prompt(ctx, state, issue_id).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::github::StatusOption;

    fn status_field(columns: usize) -> StatusField {
        StatusField {
            id: "PVTSSF_status".to_string(),
            name: "Status".to_string(),
            options: (0..columns)
                .map(|i| StatusOption {
                    id: format!("opt{}", i),
                    name: if i == 1 {
                        "Backlog".to_string()
                    } else {
                        format!("Column {}", i)
                    },
                })
                .collect(),
        }
    }

    /// Tests the column select built from a status field.
    ///
    /// Expected: custom id carries issue and field, the default column is preselected
    #[test]
    fn column_select_preselects_default() {
        let row = serde_json::to_value(column_select("42_1", &status_field(3), "Backlog")).unwrap();
        let menu = &row["components"][0];

        assert_eq!(menu["custom_id"], "issue:column:42_1:PVTSSF_status");
        assert_eq!(menu["placeholder"], "Choose a column...");

        let options = menu["options"].as_array().unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(options[1]["value"], "opt1");
        assert_eq!(options[1]["description"], "Send the issue to Backlog");
        assert_eq!(options[1]["default"], true);
        assert_eq!(options[0]["default"], false);
    }

    /// Tests that large projects are cut to what Discord accepts.
    ///
    /// Expected: 25 options
    #[test]
    fn column_select_caps_options() {
        let row = serde_json::to_value(column_select("42_1", &status_field(40), "Backlog")).unwrap();
        assert_eq!(
            row["components"][0]["options"].as_array().unwrap().len(),
            MAX_SELECT_OPTIONS
        );
    }

    fn project() -> ProjectInfo {
        serde_json::from_value(serde_json::json!({
            "id": "PVT_1",
            "title": "Roadmap",
            "fields": { "nodes": [
                {},
                {
                    "id": "PVTSSF_status",
                    "name": "Status",
                    "options": [
                        { "id": "opt_backlog", "name": "Backlog" },
                        { "id": "opt_done", "name": "Done" }
                    ]
                }
            ] }
        }))
        .unwrap()
    }

    /// Tests resolving the column picked in the select menu.
    ///
    /// Expected: the status field when it still has the option
    #[test]
    fn selected_column_finds_field() {
        let field = selected_column(Ok(project()), "PVTSSF_status", "opt_done").unwrap();
        assert_eq!(field.id, "PVTSSF_status");
        assert_eq!(field.option("opt_done").unwrap().name, "Done");
    }

    /// Tests a column removed from the project meanwhile.
    ///
    /// Expected: Err("Error: column not found")
    #[test]
    fn selected_column_reports_missing_column() {
        assert_eq!(
            selected_column(Ok(project()), "PVTSSF_status", "opt_gone"),
            Err(COLUMN_NOT_FOUND)
        );
        assert_eq!(
            selected_column(Ok(project()), "PVTSSF_other", "opt_done"),
            Err(COLUMN_NOT_FOUND)
        );
    }

    /// Tests a GitHub failure while reading the project.
    ///
    /// Expected: the project error message, not "column not found"
    #[test]
    fn selected_column_reports_unreachable_project() {
        let failure = Err(AppError::GitHubErr(
            crate::error::github::GitHubError::MissingField("node"),
        ));
        assert_eq!(
            selected_column(failure, "PVTSSF_status", "opt_done"),
            Err(PROJECT_UNAVAILABLE)
        );
    }

    /// Tests the validation choice buttons.
    ///
    /// Expected: kanban button first, both carry the issue id
    #[test]
    fn choice_buttons_route_to_issue() {
        let rows = choice_components("42_1");
        let row = serde_json::to_value(&rows[0]).unwrap();

        assert_eq!(row["components"][0]["custom_id"], "issue:kanban:42_1");
        assert_eq!(row["components"][1]["custom_id"], "issue:validate_only:42_1");
    }
}
