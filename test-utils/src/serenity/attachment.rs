//! Test factory for creating Serenity Attachment objects.

use serenity::all::Attachment;

/// Creates a test message attachment.
///
/// The CDN URL is derived from the id and file name, the way Discord builds it.
///
/// # Arguments
/// - `attachment_id` - Discord attachment ID (snowflake)
/// - `filename` - File name as uploaded by the user
/// - `content_type` - MIME type reported by Discord, if any
///
/// # Panics
/// - If the JSON cannot be deserialized into an Attachment (indicates invalid test data)
pub fn create_test_attachment(
    attachment_id: u64,
    filename: &str,
    content_type: Option<&str>,
) -> Attachment {
    let url = format!(
        "https://cdn.discordapp.com/attachments/100/{}/{}",
        attachment_id, filename
    );

    serde_json::from_value(serde_json::json!({
        "id": attachment_id.to_string(),
        "filename": filename,
        "size": 1024,
        "url": url,
        "proxy_url": url.replace("cdn.discordapp.com", "media.discordapp.net"),
        "content_type": content_type,
        "ephemeral": false,
    }))
    .expect("Failed to create test attachment - invalid JSON structure")
}
