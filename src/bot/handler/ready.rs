//! Ready event handler.
//!
//! Logs the connection and checks that the issues channel is reachable, so a wrong
//! `ISSUES_CHANNEL_ID` shows up at startup instead of on the first submission.

use serenity::all::{ChannelId, Context, Ready};

use crate::{state::BotState, util::discord::is_not_found};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state holding the configuration
/// - `ctx` - Discord context used to resolve the issues channel
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let channel_id = ChannelId::new(state.config.issues_channel_id);
    match channel_id.to_channel(&ctx).await {
        Ok(channel) => tracing::info!("Issues channel found: {}", channel),
        Err(e) if is_not_found(&e) => {
            tracing::error!("Issues channel {} not found", channel_id)
        }
        Err(e) => tracing::error!("Failed to resolve issues channel {}: {}", channel_id, e),
    }
}
