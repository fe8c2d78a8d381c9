//! The "Create New Issue" modal and its submission.

use chrono::Utc;
use serenity::all::{
    ActionRowComponent, Attachment, ChannelId, Context, CreateActionRow, CreateInputText,
    CreateMessage, CreateModal, EditInteractionResponse, InputTextStyle, ModalInteraction,
};

use crate::{
    bot::{
        component::{channel, ephemeral_response},
        embed,
    },
    data::pending_issue::PendingIssueRepository,
    error::AppError,
    model::pending_issue::PendingIssue,
    service::{
        attachment::AttachmentService,
        cleanup::cleanup_orphaned_messages,
        pending_issue::{validate_submission, PendingIssueService},
    },
    state::BotState,
    util::discord::is_not_found,
};

use super::ModalAction;

const TITLE_INPUT: &str = "title";
const DESCRIPTION_INPUT: &str = "description";

const FORM_EXPIRED: &str = "This form has expired. Run the command again to report the issue.";

pub fn issue_modal(draft_id: u64) -> CreateModal {
    CreateModal::new(
        ModalAction::SubmitIssue { draft_id }.to_string(),
        "Create New Issue",
    )
    .components(vec![
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Issue Title", TITLE_INPUT)
                .placeholder("e.g., Bug in login button")
                .max_length(100)
                .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(
                InputTextStyle::Paragraph,
                "Detailed Description",
                DESCRIPTION_INPUT,
            )
            .placeholder("Describe the problem, steps to reproduce, etc.")
            .max_length(2000)
            .required(true),
        ),
    ])
}

/// Handles a submitted issue form.
///
/// Blank fields and expired drafts are refused right away. Otherwise the response is deferred while
/// media is uploaded, the issue stored and posted for review; on success the
/// deferred response is removed so the submitter sees nothing.
pub async fn handle_submit(
    ctx: &Context,
    state: &BotState,
    interaction: &ModalInteraction,
    draft_id: u64,
) -> Result<(), AppError> {
    let (title, description) = match validate_submission(
        &input_value(interaction, TITLE_INPUT),
        &input_value(interaction, DESCRIPTION_INPUT),
    ) {
        Ok(fields) => fields,
        Err(AppError::BadRequest(message)) => {
            interaction
                .create_response(&ctx.http, ephemeral_response(message))
                .await?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let Some(draft) = state.drafts.take(draft_id).await else {
        interaction
            .create_response(&ctx.http, ephemeral_response(FORM_EXPIRED))
            .await?;
        return Ok(());
    };

    interaction.defer_ephemeral(&ctx.http).await?;

    match submit(ctx, state, interaction, &draft.attachments, title, description).await {
        Ok(issue) => {
            tracing::info!(
                "Issue {} submitted by {}",
                issue.id,
                interaction.user.id
            );
            interaction.delete_response(&ctx.http).await?;
        }
        Err(e) => {
            tracing::error!("Failed to create pending issue: {}", e);
            let message = match e {
                AppError::NotFound(_) => "Error: Issues channel not found.",
                _ => "Error creating issue.",
            };
            interaction
                .edit_response(&ctx.http, EditInteractionResponse::new().content(message))
                .await?;
        }
    }

    Ok(())
}

async fn submit(
    ctx: &Context,
    state: &BotState,
    interaction: &ModalInteraction,
    attachments: &[Attachment],
    title: String,
    description: String,
) -> Result<PendingIssue, AppError> {
    let channel_id = ChannelId::new(state.config.issues_channel_id);
    if let Err(e) = ctx.http.get_channel(channel_id).await {
        if is_not_found(&e) {
            return Err(AppError::NotFound(format!(
                "Issues channel {} not found",
                channel_id
            )));
        }
        return Err(e.into());
    }

    if let Err(e) = cleanup_orphaned_messages(&state.db, &ctx.http).await {
        tracing::warn!("Orphaned message cleanup failed: {}", e);
    }

    let files = AttachmentService::new(&state.http_client, &state.github)
        .upload_media(attachments)
        .await;

    let service = PendingIssueService::new(&state.db);
    let issue = service
        .submit(
            interaction.user.id.get(),
            title,
            description,
            files,
            Utc::now(),
        )
        .await?;

    let message = match channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new()
                .embed(embed::pending_issue(&issue)?)
                .components(channel::issue_components(&issue.id)),
        )
        .await
    {
        Ok(message) => message,
        Err(e) => {
            if let Err(delete_err) = PendingIssueRepository::new(&state.db)
                .delete(&issue.id)
                .await
            {
                tracing::error!(
                    "Failed to drop unposted pending issue {}: {}",
                    issue.id,
                    delete_err
                );
            }
            return Err(e.into());
        }
    };

    service
        .track_message(&issue.id, channel_id.get(), message.id.get())
        .await?;

    Ok(issue)
}

/// Reads a text input of the submitted modal; missing inputs read as empty.
fn input_value(interaction: &ModalInteraction, custom_id: &str) -> String {
    interaction
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == custom_id => {
                input.value.clone()
            }
            _ => None,
        })
        .unwrap_or_default()
}
