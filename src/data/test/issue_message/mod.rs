use crate::{
    data::issue_message::IssueMessageRepository, error::AppError,
    model::issue_message::UpsertIssueMessageParam,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_by_issue_id;
mod get_orphaned;
mod upsert;
