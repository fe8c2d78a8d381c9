//! State shared by every event handler.
//!
//! Built once in `main` and cloned into the Discord event handler and the
//! scheduler. Every field is cheap to clone:
//! - `DatabaseConnection` is a connection pool
//! - `reqwest::Client` and `GitHubService` share one connection pool
//! - the stores wrap their maps in `Arc`

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    service::{draft::DraftStore, github::GitHubService, upload_prompt::UploadPromptStore},
};

#[derive(Clone)]
pub struct BotState {
    /// Pending-issue store.
    pub db: DatabaseConnection,

    /// Client used to download Discord attachments.
    pub http_client: reqwest::Client,

    pub github: GitHubService,

    pub config: Arc<Config>,

    /// Open `!new-issue` forms.
    pub drafts: DraftStore,

    /// "Waiting for your upload" prompts, one per pending issue.
    pub upload_prompts: UploadPromptStore,
}

impl BotState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        github: GitHubService,
        config: Config,
    ) -> Self {
        Self {
            db,
            http_client,
            github,
            config: Arc::new(config),
            drafts: DraftStore::new(),
            upload_prompts: UploadPromptStore::new(),
        }
    }
}
