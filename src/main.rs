mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use crate::{
    bot::start::{init_bot, start_bot},
    config::Config,
    error::AppError,
    scheduler::cleanup,
    service::github::GitHubService,
    state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let github = GitHubService::new(http_client.clone(), &config)?;

    tracing::info!(
        "Bridging Discord channel {} to {}/{}",
        config.issues_channel_id,
        config.github_owner,
        config.github_repo
    );
    if config.project_id.is_none() {
        tracing::info!("PROJECT_ID not set, kanban step disabled");
    }

    let state = BotState::new(db, http_client, github, config);

    let (bot_client, discord_http) = init_bot(state.clone()).await?;

    let scheduler_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = cleanup::start_scheduler(scheduler_state, discord_http).await {
            tracing::error!("Cleanup scheduler error: {}", e);
        }
    });

    start_bot(bot_client).await
}
