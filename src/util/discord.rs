//! Small helpers around Discord REST calls shared by the bot handlers.

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use serenity::{
    all::{ChannelId, Message, MessageId, Timestamp},
    http::Http,
};

use crate::error::{internal::InternalError, AppError};

/// Delay before removing a user's upload message once its files are stored.
const UPLOAD_MESSAGE_DELETE_DELAY: Duration = Duration::from_secs(2);

/// Extra delay before the single retry when deletion is forbidden.
const FORBIDDEN_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Converts a UTC time to an embed timestamp, keeping whole seconds.
pub fn discord_timestamp(time: DateTime<Utc>) -> Result<Timestamp, AppError> {
    Timestamp::from_unix_timestamp(time.timestamp()).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: time.timestamp(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Returns the HTTP status of a failed Discord REST call, if there is one.
pub fn http_status(err: &serenity::Error) -> Option<u16> {
    match err {
        serenity::Error::Http(http_err) => http_err.status_code().map(|status| status.as_u16()),
        _ => None,
    }
}

/// Whether Discord reported the target as already gone.
pub fn is_not_found(err: &serenity::Error) -> bool {
    http_status(err) == Some(404)
}

/// Deletes a channel message after `delay` without blocking the caller.
pub fn delete_message_later(
    http: Arc<Http>,
    channel_id: ChannelId,
    message_id: MessageId,
    delay: Duration,
) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Err(e) = channel_id.delete_message(&http, message_id).await {
            tracing::warn!("Failed to delete message {} in {}: {}", message_id, channel_id, e);
        }
    });
}

/// Deletes an interaction follow-up message after `delay` without blocking the caller.
///
/// Follow-ups are addressed through the interaction token, which also works for
/// ephemeral messages.
pub fn delete_followup_later(
    http: Arc<Http>,
    interaction_token: String,
    message_id: MessageId,
    delay: Duration,
) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Err(e) = http
            .delete_followup_message(&interaction_token, message_id)
            .await
        {
            tracing::warn!("Failed to delete follow-up message {}: {}", message_id, e);
        }
    });
}

/// Deletes the original response of an interaction, logging failures.
pub async fn delete_interaction_response(http: &Http, interaction_token: &str) {
    if let Err(e) = http
        .delete_original_interaction_response(interaction_token)
        .await
    {
        tracing::warn!("Failed to delete interaction response: {}", e);
    }
}

/// Removes a user's upload message from the channel.
///
/// Waits a couple of seconds first so the ✅ reaction is visible. A 403 gets one
/// more attempt after a longer delay; a 404 means someone else already removed it.
pub async fn delete_upload_message(http: &Http, message: &Message) {
    tokio::time::sleep(UPLOAD_MESSAGE_DELETE_DELAY).await;

    let Err(e) = message.channel_id.delete_message(http, message.id).await else {
        tracing::debug!("Upload message {} deleted", message.id);
        return;
    };

    match http_status(&e) {
        Some(404) => tracing::debug!("Upload message {} already deleted", message.id),
        Some(403) => {
            tracing::warn!(
                "Missing permission to delete messages in channel {}, retrying",
                message.channel_id
            );
            tokio::time::sleep(FORBIDDEN_RETRY_DELAY).await;
            if let Err(retry_err) = message.channel_id.delete_message(http, message.id).await {
                tracing::error!("Retry deleting upload message failed: {}", retry_err);
            }
        }
        _ => tracing::error!("Failed to delete upload message {}: {}", message.id, e),
    }
}
