//! "Create Issue" button under the form prompt.

use serenity::all::{
    ButtonStyle, ComponentInteraction, Context, CreateActionRow, CreateButton,
    CreateInteractionResponse,
};

use crate::{
    bot::component::{ephemeral_response, modal, ComponentAction},
    error::AppError,
    service::draft::FormAccess,
    state::BotState,
};

pub fn prompt_components(draft_id: u64) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![CreateButton::new(
        ComponentAction::OpenForm { draft_id }.to_string(),
    )
    .label("Create Issue")
    .style(ButtonStyle::Primary)])]
}

/// Opens the issue modal for the author of the draft and removes the prompt.
///
/// Opening renews the draft so its attachments are still there when the modal is
/// submitted.
pub async fn handle_open_form(
    ctx: &Context,
    state: &BotState,
    interaction: &ComponentInteraction,
    draft_id: u64,
) -> Result<(), AppError> {
    let refusal = match state
        .drafts
        .open_form(draft_id, interaction.user.id.get())
        .await
    {
        FormAccess::Granted => None,
        FormAccess::NotAuthor => Some("Only the author of the message can create the issue."),
        FormAccess::Expired => Some("This form has expired."),
    };
    if let Some(message) = refusal {
        interaction
            .create_response(&ctx.http, ephemeral_response(message))
            .await?;
        return Ok(());
    }

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Modal(modal::issue_modal(draft_id)),
        )
        .await?;

    if let Err(e) = interaction.message.delete(&ctx.http).await {
        tracing::warn!("Failed to delete form prompt {}: {}", interaction.message.id, e);
    }

    Ok(())
}
