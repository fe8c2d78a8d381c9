//! Factory methods for creating test data.
//!
//! Each factory module provides a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let issue = factory::pending_issue::create_pending_issue(&db).await?;
//!
//! let issue = factory::pending_issue::PendingIssueFactory::new(&db)
//!     .title("Crash on startup")
//!     .file("crash.png", "https://raw.githubusercontent.com/o/r/main/crash.png")
//!     .build()
//!     .await?;
//!
//! let message = factory::issue_message::create_issue_message(&db, &issue.id).await?;
//! ```

pub mod helpers;
pub mod issue_message;
pub mod pending_issue;
