//! Embeds posted by the bot.
//!
//! Builders are pure: they take domain models and return `CreateEmbed`, so their
//! output can be checked by serializing it.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedFooter};

use crate::{
    error::AppError,
    model::{
        github::{GitHubIssue, IssueStateFilter},
        pending_issue::{PendingIssue, UploadedFile},
    },
    service::issue::KanbanOutcome,
    util::discord::discord_timestamp,
};

const COLOR_PROMPT: u32 = 0x0099ff;
const COLOR_PENDING: u32 = 0xffaa00;
const COLOR_REJECTED: u32 = 0xff0000;
const COLOR_CREATED: u32 = 0x00ff00;

/// Longest embed field value Discord accepts.
const FIELD_VALUE_LIMIT: usize = 1024;
/// Issue titles longer than this are shortened in the issue list.
const LIST_TITLE_LIMIT: usize = 60;
/// Labels shown per issue in the list before summarizing the rest.
const LIST_LABEL_LIMIT: usize = 3;

pub fn form_prompt() -> CreateEmbed {
    CreateEmbed::new()
        .description("Click the button below to open the issue creation form.")
        .color(COLOR_PROMPT)
}

/// Embed of an issue awaiting review, re-rendered after each upload.
///
/// The thumbnail shows the first file, preferring its Discord CDN URL.
pub fn pending_issue(issue: &PendingIssue) -> Result<CreateEmbed, AppError> {
    let mut embed = CreateEmbed::new()
        .title("🔍 New Issue")
        .color(COLOR_PENDING)
        .timestamp(discord_timestamp(issue.created_at)?)
        .field("Title", &issue.title, false)
        .field(
            "Description",
            truncate_chars(&issue.description, FIELD_VALUE_LIMIT),
            false,
        )
        .field("Created by", mention(issue.author_id), true)
        .field("Attached Images", attached_files_text(&issue.files), false);

    if let Some(first) = issue.files.first() {
        embed = embed.thumbnail(first.preview_url());
    }

    Ok(embed)
}

pub fn rejected(moderator_id: u64, now: DateTime<Utc>) -> Result<CreateEmbed, AppError> {
    Ok(CreateEmbed::new()
        .title("❌ Issue Rejected")
        .color(COLOR_REJECTED)
        .timestamp(discord_timestamp(now)?)
        .field(
            "Status",
            format!("Rejected by {}", mention(moderator_id)),
            false,
        ))
}

/// Embed replacing a pending issue validated while the kanban step is disabled.
pub fn created(
    title: &str,
    github_issue: &GitHubIssue,
    moderator_id: u64,
    now: DateTime<Utc>,
) -> Result<CreateEmbed, AppError> {
    Ok(CreateEmbed::new()
        .title("✅ New Issue Created")
        .color(COLOR_CREATED)
        .timestamp(discord_timestamp(now)?)
        .field("Title", title, false)
        .field(
            "GitHub Issue",
            format!(
                "[#{} - View on GitHub]({})",
                github_issue.number, github_issue.html_url
            ),
            false,
        )
        .field("Validated by", mention(moderator_id), true))
}

/// Embed replacing a pending issue validated through the validation choice.
///
/// `kanban` is `None` for "Validate only".
pub fn created_with_kanban(
    github_issue: &GitHubIssue,
    kanban: Option<&KanbanOutcome>,
    moderator_id: u64,
    now: DateTime<Utc>,
) -> Result<CreateEmbed, AppError> {
    let mut embed = CreateEmbed::new()
        .title("✅ Issue created successfully")
        .color(COLOR_CREATED)
        .timestamp(discord_timestamp(now)?)
        .field(
            "GitHub Issue",
            format!(
                "[#{} - {}]({})",
                github_issue.number, github_issue.title, github_issue.html_url
            ),
            false,
        );

    match kanban {
        Some(KanbanOutcome::Added(column)) => {
            embed = embed.field("Kanban", format!("✅ Added to column **{}**", column), false);
        }
        Some(KanbanOutcome::Failed(error)) => {
            embed = embed.field("Kanban", format!("❌ {}", error), false);
        }
        None => {}
    }

    Ok(embed.field("Validated by", mention(moderator_id), true))
}

/// Embed answering `!issues`.
///
/// # Arguments
/// - `issues` - One page of issues, already fetched
/// - `state` - State filter the page was fetched with
/// - `page` - 1-based page number
/// - `per_page` - Page size; a full page advertises the next one
/// - `prefix` - Command prefix shown in the footer hint
pub fn issue_list(
    issues: &[GitHubIssue],
    state: IssueStateFilter,
    page: u32,
    per_page: usize,
    prefix: &str,
    now: DateTime<Utc>,
) -> Result<CreateEmbed, AppError> {
    let mut embed = CreateEmbed::new()
        .title(format!("{} Issues", state.title()))
        .color(state_color(state))
        .timestamp(discord_timestamp(now)?);

    for issue in issues {
        let status = if issue.is_open() { "🟢" } else { "🔴" };
        embed = embed.field(
            format!("{} #{} {}", status, issue.number, truncate_title(&issue.title)),
            format!("[View on GitHub]({}){}", issue.html_url, labels_text(issue)),
            false,
        );
    }

    Ok(embed.footer(CreateEmbedFooter::new(page_footer(
        state,
        page,
        issues.len() == per_page,
        prefix,
    ))))
}

pub fn state_color(state: IssueStateFilter) -> u32 {
    match state {
        IssueStateFilter::Open => 0x28a745,
        IssueStateFilter::Closed => 0x6f42c1,
        IssueStateFilter::All => 0x0366d6,
    }
}

/// Shortens titles over 60 characters to 57 characters plus "...".
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > LIST_TITLE_LIMIT {
        let short: String = title.chars().take(LIST_TITLE_LIMIT - 3).collect();
        format!("{}...", short)
    } else {
        title.to_string()
    }
}

/// Up to three labels as inline code, then ` +N` for the rest.
pub fn labels_text(issue: &GitHubIssue) -> String {
    if issue.labels.is_empty() {
        return String::new();
    }

    let shown: Vec<String> = issue
        .labels
        .iter()
        .take(LIST_LABEL_LIMIT)
        .map(|label| format!("`{}`", label.name))
        .collect();
    let mut text = format!(" {}", shown.join(" "));

    if issue.labels.len() > LIST_LABEL_LIMIT {
        text.push_str(&format!(" +{}", issue.labels.len() - LIST_LABEL_LIMIT));
    }

    text
}

pub fn page_footer(state: IssueStateFilter, page: u32, full_page: bool, prefix: &str) -> String {
    let mut footer = format!("Page {}", page);
    if full_page {
        footer.push_str(&format!(
            " | `{}issues {} {}` for next page",
            prefix,
            state.as_str(),
            page.saturating_add(1)
        ));
    }
    footer
}

/// Bullet list of attached files, or "None".
///
/// Lines that would push the value past Discord's field limit are summarized.
fn attached_files_text(files: &[UploadedFile]) -> String {
    if files.is_empty() {
        return "None".to_string();
    }

    let mut text = String::new();
    for (index, file) in files.iter().enumerate() {
        let line = format!("• **[{}]({})**\n", file.filename, file.preview_url());
        let remaining = files.len() - index;
        let summary_room = format!("…and {} more", remaining).len();

        if text.len() + line.len() + summary_room > FIELD_VALUE_LIMIT {
            text.push_str(&format!("…and {} more", remaining));
            break;
        }
        text.push_str(&line);
    }

    text
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

fn mention(user_id: u64) -> String {
    format!("<@{}>", user_id)
}
