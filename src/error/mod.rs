//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by services, repositories and bot
//! handlers. Handlers never surface it to Discord users directly: they log it and
//! answer with a short ephemeral message instead.

pub mod config;
pub mod github;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, github::GitHubError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates every error that can occur while handling a command or an interaction.
/// Most variants use `#[from]` so `?` works across layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// GitHub REST or GraphQL call returned something unusable.
    #[error(transparent)]
    GitHubErr(#[from] GitHubError),

    /// Unexpected state indicating a bug or corrupted stored data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Transport-level failure talking to GitHub (DNS, TLS, body decoding).
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid user input.
    ///
    /// # Fields
    /// - Message describing what was invalid about the input
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether the error came from talking to GitHub.
    pub fn is_github(&self) -> bool {
        matches!(self, Self::GitHubErr(_) | Self::ReqwestErr(_))
    }
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
