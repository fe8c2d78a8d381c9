use std::sync::Arc;

use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};

use crate::{bot::handler::Handler, error::AppError, state::BotState};

/// Builds the Discord client without connecting.
///
/// The returned HTTP client is shared with the scheduler so it can delete messages
/// outside of any event.
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP handle
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(state: BotState) -> Result<(Client, Arc<Http>), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let token = state.config.discord_token.clone();
    let client = Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and processes events until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
