//! Domain models and parameter types.
//!
//! Entity models are converted to these types at the repository boundary; GitHub
//! response bodies are deserialized straight into the types in `github`.

pub mod github;
pub mod issue_message;
pub mod pending_issue;
