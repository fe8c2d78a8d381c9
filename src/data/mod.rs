//! Database repository layer for the pending-issue store.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `crate::model`, keeping SeaORM out of the service and bot layers.

pub mod issue_message;
pub mod pending_issue;

#[cfg(test)]
mod test;
