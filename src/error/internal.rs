use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Discord snowflakes are stored as strings; a row that fails to parse was
    /// written by something other than this bot.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Failure to convert Unix timestamp to Discord timestamp
    ///
    /// Occurs when a valid Unix timestamp is out of the range Discord accepts.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },

    /// Label list could not be converted to or from its stored JSON form.
    #[error("Invalid label JSON for pending issue {issue_id}: {source}")]
    LabelsJson {
        /// Pending issue owning the labels
        issue_id: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Component or modal custom id this bot does not know how to route.
    #[error("Unknown component custom id '{0}'")]
    UnknownCustomId(String),
}
