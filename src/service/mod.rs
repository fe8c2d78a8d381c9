pub mod attachment;
pub mod cleanup;
pub mod draft;
pub mod github;
pub mod issue;
pub mod pending_issue;
pub mod permission;
pub mod upload_prompt;
