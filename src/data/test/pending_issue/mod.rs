use crate::{
    data::pending_issue::PendingIssueRepository,
    error::AppError,
    model::pending_issue::{CreatePendingIssueParam, UploadedFile},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_files;
mod claim;
mod create;
mod delete;
mod get_by_id;
mod restore;

fn uploaded(filename: &str) -> UploadedFile {
    UploadedFile {
        filename: filename.to_string(),
        url: format!(
            "https://raw.githubusercontent.com/acme/game/main/assets/discord-images/{}",
            filename
        ),
        discord_url: Some(format!(
            "https://cdn.discordapp.com/attachments/1/2/{}",
            filename
        )),
    }
}
