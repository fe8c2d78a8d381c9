//! Issue Bridge Test Utils
//!
//! Provides shared testing utilities for the issue bridge bot. This crate offers a builder
//! pattern for creating test contexts backed by in-memory SQLite databases, factories for
//! pending-issue records, and factories for Serenity model objects.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//! - **serenity**: Serenity structs deserialized from Discord-shaped JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_pending_issue_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_pending_issue_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
