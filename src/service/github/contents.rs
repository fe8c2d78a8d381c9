use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::error::{github::GitHubError, AppError};

use super::{ensure_status, GitHubService};

#[derive(Deserialize)]
struct ContentsResponse {
    content: Option<ContentsEntry>,
}

#[derive(Deserialize)]
struct ContentsEntry {
    download_url: Option<String>,
}

impl GitHubService {
    /// Stores a file in the repository's asset folder through the contents API.
    ///
    /// The stored name is `{unix_seconds}_{sanitized filename}` so repeated uploads of
    /// `image.png` never collide.
    ///
    /// # Arguments
    /// - `data` - Raw file bytes
    /// - `filename` - Name of the attachment on Discord
    ///
    /// # Returns
    /// - `Ok(String)` - Raw download URL of the stored file
    /// - `Err(AppError::GitHubErr)` - GitHub answered with something other than 200/201,
    ///   or omitted the download URL
    /// - `Err(AppError::ReqwestErr)` - Transport failure
    pub async fn upload_file(&self, data: &[u8], filename: &str) -> Result<String, AppError> {
        let stored_name = format!("{}_{}", Utc::now().timestamp(), sanitize_filename(filename));

        let mut segments = vec!["contents"];
        segments.extend(self.asset_path.iter().map(String::as_str));
        segments.push(&stored_name);
        let url = self.repo_endpoint(&segments)?;
        let endpoint = url.path().to_string();

        let response = self
            .rest(Method::PUT, url)
            .json(&json!({
                "message": format!("Upload image from Discord: {}", filename),
                "content": STANDARD.encode(data),
            }))
            .send()
            .await?;
        let response = ensure_status(response, &endpoint, |status| {
            status == StatusCode::OK || status == StatusCode::CREATED
        })
        .await?;

        let payload: ContentsResponse = response.json().await?;
        payload
            .content
            .and_then(|entry| entry.download_url)
            .ok_or_else(|| GitHubError::MissingField("content.download_url").into())
    }
}

/// Replaces every character outside `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_filename(filename: &str) -> String {
    let sanitized: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() {
        "file".to_string()
    } else {
        sanitized
    }
}
