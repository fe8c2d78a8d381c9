use serenity::all::{Context, Message};

use crate::{
    bot::command::{issues, new_issue, parse_command, Command},
    state::BotState,
};

/// Handle a message sent in a channel the bot can read
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    // The bot's own replies never trigger commands
    if message.author.id == ctx.cache.current_user().id {
        return;
    }

    let Some(command) = parse_command(&message.content, &state.config.command_prefix) else {
        return;
    };

    tracing::debug!("Command {:?} from {}", command, message.author.id);

    match command {
        Command::NewIssue => new_issue::handle_new_issue(&ctx, state, &message).await,
        Command::Issues { args } => issues::handle_issues(&ctx, state, &message, &args).await,
    }
}
