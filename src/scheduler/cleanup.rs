use std::sync::Arc;

use serenity::http::Http;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::cleanup::cleanup_orphaned_messages, state::BotState};

/// Starts the periodic cleanup scheduler
///
/// Each run deletes the channel messages of issues that are no longer pending and
/// drops expired issue-form drafts. The cron expression comes from
/// `CLEANUP_SCHEDULE` (every ten minutes by default).
///
/// # Arguments
/// - `state`: Shared bot state
/// - `discord_http`: Discord HTTP client for deleting messages
pub async fn start_scheduler(state: BotState, discord_http: Arc<Http>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let schedule = state.config.cleanup_schedule.clone();
    let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let state = state.clone();
        let http = discord_http.clone();

        Box::pin(async move {
            run_cleanup(&state, &http).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Cleanup scheduler started ({})", schedule);

    Ok(())
}

async fn run_cleanup(state: &BotState, http: &Http) {
    match cleanup_orphaned_messages(&state.db, http).await {
        Ok(report) if report.removed > 0 || report.kept > 0 => tracing::info!(
            "Orphaned messages: {} removed, {} kept for retry",
            report.removed,
            report.kept
        ),
        Ok(_) => {}
        Err(e) => tracing::error!("Error cleaning up orphaned messages: {}", e),
    }

    let expired = state.drafts.prune_expired().await;
    if expired > 0 {
        tracing::debug!("Dropped {} expired issue forms", expired);
    }
}
