//! Copies media attached on Discord into the GitHub repository.

use serenity::all::Attachment;

use crate::{
    error::AppError, model::pending_issue::UploadedFile, service::github::GitHubService,
};

/// Whether an attachment's content type is an image or a video.
pub fn is_media(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|content_type| {
        content_type.starts_with("image/") || content_type.starts_with("video/")
    })
}

/// Keeps the attachments that can be embedded in an issue.
pub fn media_attachments(attachments: &[Attachment]) -> Vec<&Attachment> {
    attachments
        .iter()
        .filter(|attachment| is_media(attachment.content_type.as_deref()))
        .collect()
}

pub struct AttachmentService<'a> {
    http: &'a reqwest::Client,
    github: &'a GitHubService,
}

impl<'a> AttachmentService<'a> {
    /// Creates a new AttachmentService instance.
    ///
    /// # Arguments
    /// - `http` - Client used to download attachments from the Discord CDN
    /// - `github` - Client used to store them in the repository
    pub fn new(http: &'a reqwest::Client, github: &'a GitHubService) -> Self {
        Self { http, github }
    }

    /// Downloads every media attachment and uploads it to the repository.
    ///
    /// Attachments that are not images or videos are ignored. A file that fails to
    /// download or upload is logged and skipped; the others are still stored.
    ///
    /// # Returns
    /// - `Vec<UploadedFile>` - Stored files, in attachment order
    pub async fn upload_media(&self, attachments: &[Attachment]) -> Vec<UploadedFile> {
        let mut uploaded = Vec::new();

        for attachment in media_attachments(attachments) {
            match self.upload_one(attachment).await {
                Ok(file) => uploaded.push(file),
                Err(e) => tracing::warn!(
                    "Skipping attachment {} ({}): {}",
                    attachment.filename,
                    attachment.id,
                    e
                ),
            }
        }

        tracing::debug!(
            "Uploaded {} of {} attachments",
            uploaded.len(),
            attachments.len()
        );

        uploaded
    }

    async fn upload_one(&self, attachment: &Attachment) -> Result<UploadedFile, AppError> {
        let data = self
            .http
            .get(&attachment.url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let url = self.github.upload_file(&data, &attachment.filename).await?;

        Ok(UploadedFile {
            filename: attachment.filename.clone(),
            url,
            discord_url: Some(attachment.url.clone()),
        })
    }
}
