//! Tracks the "waiting for your upload" prompt shown for each pending issue.
//!
//! The prompt is the ephemeral response to the upload button. Only its
//! interaction token is kept, since ephemeral responses can only be deleted
//! through the interaction that created them.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct UploadPromptStore {
    prompts: Arc<RwLock<HashMap<String, String>>>,
}

impl UploadPromptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the prompt of an issue.
    ///
    /// # Returns
    /// - `Some(String)` - Token of the prompt this one replaces
    /// - `None` - No prompt was shown for the issue
    pub async fn replace(&self, issue_id: &str, interaction_token: String) -> Option<String> {
        self.prompts
            .write()
            .await
            .insert(issue_id.to_string(), interaction_token)
    }

    /// Removes and returns the prompt of an issue.
    pub async fn take(&self, issue_id: &str) -> Option<String> {
        self.prompts.write().await.remove(issue_id)
    }

    /// Removes the prompt of an issue if it is still the given one.
    ///
    /// A wait that ends after the user pressed the upload button again must not
    /// forget the newer prompt.
    pub async fn take_if(&self, issue_id: &str, interaction_token: &str) -> bool {
        let mut prompts = self.prompts.write().await;

        if prompts.get(issue_id).map(String::as_str) == Some(interaction_token) {
            prompts.remove(issue_id);
            return true;
        }

        false
    }
}
