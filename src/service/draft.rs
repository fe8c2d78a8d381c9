//! Draft store for issue forms opened with `!new-issue`.
//!
//! A draft remembers who ran the command and which files they attached, from the
//! moment the form prompt is posted until the modal is submitted. Drafts live in
//! memory with a 300-second TTL, like the button they belong to.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serenity::all::Attachment;
use tokio::sync::RwLock;

/// Time-to-live of a draft in seconds.
const DRAFT_TTL_SECONDS: u64 = 300;

/// Files and author of a `!new-issue` command waiting for its form.
#[derive(Clone, Debug)]
pub struct Draft {
    pub author_id: u64,
    pub attachments: Vec<Attachment>,
    expires_at: Instant,
}

impl Draft {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Result of a user pressing "Create Issue" on a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAccess {
    /// The author opened the form; the draft got a fresh TTL for the modal.
    Granted,
    /// Someone else pressed the button.
    NotAuthor,
    /// Unknown or expired draft.
    Expired,
}

/// Shared store of open drafts, keyed by the id of the command message.
#[derive(Clone)]
pub struct DraftStore {
    drafts: Arc<RwLock<HashMap<u64, Draft>>>,
    ttl: Duration,
}

impl DraftStore {
    /// Creates an empty store with the 300-second TTL.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(DRAFT_TTL_SECONDS))
    }

    /// Creates an empty store with a custom TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            drafts: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Opens a draft, replacing any draft with the same id.
    ///
    /// # Arguments
    /// - `draft_id` - Id of the `!new-issue` command message
    /// - `author_id` - User who ran the command
    /// - `attachments` - Files attached to the command message
    pub async fn insert(&self, draft_id: u64, author_id: u64, attachments: Vec<Attachment>) {
        let draft = Draft {
            author_id,
            attachments,
            expires_at: Instant::now() + self.ttl,
        };
        self.drafts.write().await.insert(draft_id, draft);
    }

    /// Lets the draft author open the form.
    ///
    /// Granting access restarts the TTL so the attachments outlive the modal being
    /// filled in, even across a scheduler prune.
    pub async fn open_form(&self, draft_id: u64, user_id: u64) -> FormAccess {
        let mut drafts = self.drafts.write().await;

        let Some(draft) = drafts.get_mut(&draft_id) else {
            return FormAccess::Expired;
        };
        if draft.is_expired() {
            drafts.remove(&draft_id);
            return FormAccess::Expired;
        }
        if draft.author_id != user_id {
            return FormAccess::NotAuthor;
        }

        draft.expires_at = Instant::now() + self.ttl;
        FormAccess::Granted
    }

    /// Removes a draft and returns it if it has not expired.
    pub async fn take(&self, draft_id: u64) -> Option<Draft> {
        self.drafts
            .write()
            .await
            .remove(&draft_id)
            .filter(|draft| !draft.is_expired())
    }

    /// Drops every expired draft.
    ///
    /// # Returns
    /// - `usize` - Number of drafts dropped
    pub async fn prune_expired(&self) -> usize {
        let mut drafts = self.drafts.write().await;
        let before = drafts.len();
        drafts.retain(|_, draft| !draft.is_expired());
        before - drafts.len()
    }
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::new()
    }
}
