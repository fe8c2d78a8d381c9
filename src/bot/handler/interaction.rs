//! Routes component and modal interactions to their handlers.
//!
//! Handlers return `AppError` for failures they do not answer themselves. Those are
//! logged here and the user gets a generic ephemeral message, sent as the initial
//! response when none was sent yet and as a follow-up otherwise.

use serenity::{
    all::{ComponentInteraction, Context, Interaction, ModalInteraction},
    http::Http,
};

use crate::{
    bot::component::{
        channel, ephemeral_followup, ephemeral_response, form, modal, validation,
        ComponentAction, ModalAction,
    },
    error::AppError,
    state::BotState,
};

const GENERIC_ERROR: &str = "An error occurred while processing your request.";

pub async fn handle_interaction(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Component(component) => {
            if let Err(e) = dispatch_component(&ctx, state, &component).await {
                tracing::error!(
                    "Component interaction {} failed: {}",
                    component.data.custom_id,
                    e
                );
                report_component_error(&ctx.http, &component).await;
            }
        }
        Interaction::Modal(submission) => {
            if let Err(e) = dispatch_modal(&ctx, state, &submission).await {
                tracing::error!("Modal {} failed: {}", submission.data.custom_id, e);
                report_modal_error(&ctx.http, &submission).await;
            }
        }
        _ => {}
    }
}

async fn dispatch_component(
    ctx: &Context,
    state: &BotState,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let action: ComponentAction = interaction.data.custom_id.parse()?;

    match action {
        ComponentAction::OpenForm { draft_id } => {
            form::handle_open_form(ctx, state, interaction, draft_id).await
        }
        ComponentAction::Upload { issue_id } => {
            channel::handle_upload(ctx, state, interaction, &issue_id).await
        }
        ComponentAction::Validate { issue_id } => {
            channel::handle_validate(ctx, state, interaction, &issue_id).await
        }
        ComponentAction::Reject { issue_id } => {
            channel::handle_reject(ctx, state, interaction, &issue_id).await
        }
        ComponentAction::ValidateWithKanban { issue_id } => {
            validation::handle_validate_with_kanban(ctx, state, interaction, &issue_id).await
        }
        ComponentAction::ValidateOnly { issue_id } => {
            validation::handle_validate_only(ctx, state, interaction, &issue_id).await
        }
        ComponentAction::SelectColumn { issue_id, field_id } => {
            validation::handle_select_column(ctx, state, interaction, &issue_id, &field_id).await
        }
    }
}

async fn dispatch_modal(
    ctx: &Context,
    state: &BotState,
    interaction: &ModalInteraction,
) -> Result<(), AppError> {
    let action: ModalAction = interaction.data.custom_id.parse()?;

    match action {
        ModalAction::SubmitIssue { draft_id } => {
            modal::handle_submit(ctx, state, interaction, draft_id).await
        }
    }
}

async fn report_component_error(http: &Http, interaction: &ComponentInteraction) {
    if interaction
        .create_response(http, ephemeral_response(GENERIC_ERROR))
        .await
        .is_ok()
    {
        return;
    }
    if let Err(e) = interaction
        .create_followup(http, ephemeral_followup(GENERIC_ERROR))
        .await
    {
        tracing::warn!("Failed to report interaction error: {}", e);
    }
}

async fn report_modal_error(http: &Http, interaction: &ModalInteraction) {
    if interaction
        .create_response(http, ephemeral_response(GENERIC_ERROR))
        .await
        .is_ok()
    {
        return;
    }
    if let Err(e) = interaction
        .create_followup(http, ephemeral_followup(GENERIC_ERROR))
        .await
    {
        tracing::warn!("Failed to report interaction error: {}", e);
    }
}
