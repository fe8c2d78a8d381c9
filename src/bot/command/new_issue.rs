//! `!new-issue`: posts the form prompt.

use std::time::Duration;

use serenity::all::{Context, CreateMessage, Message};

use crate::{
    bot::{component::form, embed},
    error::AppError,
    state::BotState,
    util::discord::delete_message_later,
};

const ERROR_DELETE_DELAY: Duration = Duration::from_secs(5);

/// Replaces the command message with the form prompt.
///
/// The command's attachments are kept as a draft keyed by the command message id
/// until the author submits the form or the draft expires.
pub async fn handle_new_issue(ctx: &Context, state: &BotState, message: &Message) {
    if let Err(e) = open_form(ctx, state, message).await {
        tracing::error!("Failed to open issue form for {}: {}", message.author.id, e);

        match message
            .channel_id
            .say(&ctx.http, "Error opening issue creation form.")
            .await
        {
            Ok(reply) => {
                delete_message_later(ctx.http.clone(), reply.channel_id, reply.id, ERROR_DELETE_DELAY)
            }
            Err(e) => tracing::error!("Failed to report form error: {}", e),
        }
    }
}

async fn open_form(ctx: &Context, state: &BotState, message: &Message) -> Result<(), AppError> {
    if let Err(e) = message.delete(&ctx.http).await {
        tracing::warn!("Failed to delete command message {}: {}", message.id, e);
    }

    let draft_id = message.id.get();
    state
        .drafts
        .insert(draft_id, message.author.id.get(), message.attachments.clone())
        .await;

    message
        .channel_id
        .send_message(
            &ctx.http,
            CreateMessage::new()
                .embed(embed::form_prompt())
                .components(form::prompt_components(draft_id)),
        )
        .await?;

    tracing::debug!(
        "Opened issue form {} for {} with {} attachments",
        draft_id,
        message.author.id,
        message.attachments.len()
    );

    Ok(())
}
