//! Buttons on the pending-issue messages of the issues channel.

use std::time::Duration;

use chrono::Utc;
use serenity::all::{
    ButtonStyle, ChannelId, ComponentInteraction, Context, CreateActionRow, CreateButton,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage, EditMessage,
    EditInteractionResponse, MessageCollector, MessageId,
};

use crate::{
    bot::{
        component::{ephemeral_followup, ephemeral_response, validation, ComponentAction},
        embed,
    },
    data::{issue_message::IssueMessageRepository, pending_issue::PendingIssueRepository},
    error::AppError,
    model::{github::GitHubIssue, pending_issue::PendingIssue},
    service::{
        attachment::{is_media, AttachmentService},
        issue::IssueService,
        pending_issue::PendingIssueService,
        permission::can_moderate,
    },
    state::BotState,
    util::discord::{delete_interaction_response, delete_upload_message},
};

/// How long the bot waits for media after "Upload File" is pressed.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(120);

const ISSUE_GONE: &str = "This issue no longer exists.";

pub fn issue_components(issue_id: &str) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(
            ComponentAction::Upload {
                issue_id: issue_id.to_string(),
            }
            .to_string(),
        )
        .label("📎 Upload File (Image/Video)")
        .style(ButtonStyle::Secondary),
        CreateButton::new(
            ComponentAction::Validate {
                issue_id: issue_id.to_string(),
            }
            .to_string(),
        )
        .label("✅ Validate Issue")
        .style(ButtonStyle::Success),
        CreateButton::new(
            ComponentAction::Reject {
                issue_id: issue_id.to_string(),
            }
            .to_string(),
        )
        .label("❌ Reject")
        .style(ButtonStyle::Danger),
    ])]
}

/// Collects one image or video from the user and attaches it to the issue.
///
/// Only one waiting prompt exists per issue: pressing the button again replaces the
/// previous prompt. The prompt is removed once the upload is handled or times out.
pub async fn handle_upload(
    ctx: &Context,
    state: &BotState,
    interaction: &ComponentInteraction,
    issue_id: &str,
) -> Result<(), AppError> {
    if !PendingIssueRepository::new(&state.db).exists(issue_id).await? {
        interaction
            .create_response(&ctx.http, ephemeral_response(ISSUE_GONE))
            .await?;
        return Ok(());
    }

    interaction
        .create_response(
            &ctx.http,
            ephemeral_response("Waiting for your image or video..."),
        )
        .await?;

    if let Some(previous) = state
        .upload_prompts
        .replace(issue_id, interaction.token.clone())
        .await
    {
        delete_interaction_response(&ctx.http, &previous).await;
    }

    let collected = MessageCollector::new(&ctx.shard)
        .author_id(interaction.user.id)
        .channel_id(interaction.channel_id)
        .filter(|message| {
            message
                .attachments
                .iter()
                .any(|attachment| is_media(attachment.content_type.as_deref()))
        })
        .timeout(UPLOAD_TIMEOUT)
        .next()
        .await;

    let Some(message) = collected else {
        tracing::debug!("Upload prompt for issue {} timed out", issue_id);
        if state
            .upload_prompts
            .take_if(issue_id, &interaction.token)
            .await
        {
            delete_interaction_response(&ctx.http, &interaction.token).await;
        }
        return Ok(());
    };

    let files = AttachmentService::new(&state.http_client, &state.github)
        .upload_media(&message.attachments)
        .await;

    if files.is_empty() {
        if let Err(e) = message.react(&ctx.http, '❌').await {
            tracing::warn!("Failed to react to upload message {}: {}", message.id, e);
        }
        clear_upload_prompt(ctx, state, issue_id).await;
        return Ok(());
    }

    let issue = match PendingIssueService::new(&state.db)
        .attach(issue_id, &files)
        .await
    {
        Ok(issue) => issue,
        Err(AppError::NotFound(_)) => {
            clear_upload_prompt(ctx, state, issue_id).await;
            interaction
                .create_followup(&ctx.http, ephemeral_followup(ISSUE_GONE))
                .await?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if let Err(e) = message.react(&ctx.http, '✅').await {
        tracing::warn!("Failed to react to upload message {}: {}", message.id, e);
    }

    interaction
        .message
        .channel_id
        .edit_message(
            &ctx.http,
            interaction.message.id,
            EditMessage::new().embed(embed::pending_issue(&issue)?),
        )
        .await?;

    clear_upload_prompt(ctx, state, issue_id).await;
    delete_upload_message(&ctx.http, &message).await;

    Ok(())
}

/// Validates a pending issue.
///
/// With a project configured the moderator first chooses whether the issue also goes
/// to the kanban; otherwise the GitHub issue is created right away.
pub async fn handle_validate(
    ctx: &Context,
    state: &BotState,
    interaction: &ComponentInteraction,
    issue_id: &str,
) -> Result<(), AppError> {
    if !can_moderate(
        ctx,
        interaction.member.as_ref(),
        &state.config.moderator_roles(),
    )
    .await?
    {
        interaction
            .create_response(
                &ctx.http,
                ephemeral_response("Only staff members or beta testers can validate issues."),
            )
            .await?;
        return Ok(());
    }

    if state.config.project_id.is_some() {
        if !PendingIssueRepository::new(&state.db).exists(issue_id).await? {
            interaction
                .create_response(&ctx.http, ephemeral_response(ISSUE_GONE))
                .await?;
            return Ok(());
        }

        interaction
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .content("Issue validation:")
                        .components(validation::choice_components(issue_id))
                        .ephemeral(true),
                ),
            )
            .await?;
        return Ok(());
    }

    let service = IssueService::new(&state.db, &state.github);
    let Some(issue) = service.claim(issue_id).await? else {
        interaction
            .create_response(&ctx.http, ephemeral_response(ISSUE_GONE))
            .await?;
        return Ok(());
    };

    if let Err(e) = interaction
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await
    {
        service.release(&issue).await;
        return Err(e.into());
    }

    let github_issue = match service.create_github_issue(&issue).await {
        Ok(github_issue) => github_issue,
        Err(e) => {
            tracing::error!("Failed to create GitHub issue for {}: {}", issue.id, e);
            service.release(&issue).await;
            interaction
                .create_followup(&ctx.http, ephemeral_followup("Error creating GitHub issue."))
                .await?;
            return Ok(());
        }
    };

    if let Err(e) = show_created(ctx, interaction, &issue, &github_issue).await {
        tracing::error!("Failed to update message of issue {}: {}", issue.id, e);
    }

    clear_upload_prompt(ctx, state, &issue.id).await;
    service.finalize(&issue.id).await
}

/// Replaces the pending embed of the clicked message with the "created" embed.
async fn show_created(
    ctx: &Context,
    interaction: &ComponentInteraction,
    issue: &PendingIssue,
    github_issue: &GitHubIssue,
) -> Result<(), AppError> {
    interaction
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new()
                .embed(embed::created(
                    &issue.title,
                    github_issue,
                    interaction.user.id.get(),
                    Utc::now(),
                )?)
                .components(Vec::new()),
        )
        .await?;

    Ok(())
}

/// Rejects a pending issue, dropping it without creating anything on GitHub.
pub async fn handle_reject(
    ctx: &Context,
    state: &BotState,
    interaction: &ComponentInteraction,
    issue_id: &str,
) -> Result<(), AppError> {
    if !can_moderate(
        ctx,
        interaction.member.as_ref(),
        &state.config.moderator_roles(),
    )
    .await?
    {
        interaction
            .create_response(
                &ctx.http,
                ephemeral_response("Only staff members or beta testers can reject issues."),
            )
            .await?;
        return Ok(());
    }

    let repo = PendingIssueRepository::new(&state.db);
    if !repo.delete(issue_id).await? {
        interaction
            .create_response(&ctx.http, ephemeral_response(ISSUE_GONE))
            .await?;
        return Ok(());
    }
    clear_upload_prompt(ctx, state, issue_id).await;

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::UpdateMessage(
                CreateInteractionResponseMessage::new()
                    .embed(embed::rejected(interaction.user.id.get(), Utc::now())?)
                    .components(Vec::new()),
            ),
        )
        .await?;

    IssueMessageRepository::new(&state.db)
        .delete_by_issue_id(issue_id)
        .await?;

    tracing::info!("Issue {} rejected by {}", issue_id, interaction.user.id);

    Ok(())
}

/// Replaces the embed of the channel message tracking an issue and removes its buttons.
///
/// Logs and returns when the issue has no tracked message.
pub(super) async fn close_tracked_message(
    ctx: &Context,
    state: &BotState,
    issue_id: &str,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    let Some(tracked) = IssueMessageRepository::new(&state.db)
        .get_by_issue_id(issue_id)
        .await?
    else {
        tracing::warn!("No channel message tracked for issue {}", issue_id);
        return Ok(());
    };

    ChannelId::new(tracked.channel_id)
        .edit_message(
            &ctx.http,
            MessageId::new(tracked.message_id),
            EditMessage::new().embed(embed).components(Vec::new()),
        )
        .await?;

    Ok(())
}

/// Drops the waiting upload prompt of an issue, if any.
pub(super) async fn clear_upload_prompt(ctx: &Context, state: &BotState, issue_id: &str) {
    if let Some(token) = state.upload_prompts.take(issue_id).await {
        delete_interaction_response(&ctx.http, &token).await;
    }
}
