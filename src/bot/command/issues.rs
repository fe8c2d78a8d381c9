//! `!issues [state] [page]`: lists repository issues.

use chrono::Utc;
use serenity::all::{Context, CreateMessage, Message};

use crate::{
    bot::embed, error::AppError, model::github::IssueStateFilter, state::BotState,
};

pub const ISSUES_PER_PAGE: u32 = 10;

/// Arguments of the listing command after defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssuesArgs {
    pub state: IssueStateFilter,
    /// 1-based.
    pub page: u32,
}

/// Reads `[state] [page]`; unknown states list open issues and a missing, invalid or
/// zero page shows the first one.
pub fn parse_args(args: &[&str]) -> IssuesArgs {
    let state = args
        .first()
        .map(|arg| IssueStateFilter::from_arg(&arg.to_lowercase()))
        .unwrap_or(IssueStateFilter::Open);
    let page = args
        .get(1)
        .and_then(|arg| arg.parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1);

    IssuesArgs { state, page }
}

pub async fn handle_issues(ctx: &Context, state: &BotState, message: &Message, args: &[&str]) {
    let args = parse_args(args);

    let reply = match list_issues(state, args).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("Failed to list {} issues: {}", args.state.as_str(), e);
            let content = if e.is_github() {
                "Error fetching issues from GitHub."
            } else {
                "An error occurred while fetching issues."
            };
            CreateMessage::new().content(content)
        }
    };

    if let Err(e) = message
        .channel_id
        .send_message(&ctx.http, reply.reference_message(message))
        .await
    {
        tracing::error!("Failed to answer issues command: {}", e);
    }
}

async fn list_issues(state: &BotState, args: IssuesArgs) -> Result<CreateMessage, AppError> {
    let issues = state
        .github
        .list_issues(args.state, ISSUES_PER_PAGE, args.page)
        .await?;

    if issues.is_empty() {
        return Ok(CreateMessage::new().content(format!(
            "No {} issues found.",
            args.state.as_str()
        )));
    }

    let embed = embed::issue_list(
        &issues,
        args.state,
        args.page,
        ISSUES_PER_PAGE as usize,
        &state.config.command_prefix,
        Utc::now(),
    )?;

    Ok(CreateMessage::new().embed(embed))
}
