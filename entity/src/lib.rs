//! SeaORM entities for the pending-issue store.

pub mod prelude;

pub mod issue_message;
pub mod pending_issue;
pub mod pending_issue_file;
