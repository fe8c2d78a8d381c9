//! Test factories for creating Serenity API objects.
//!
//! Serenity model structs have no public constructors, so these factories build them
//! by deserializing Discord-shaped JSON with sensible defaults for every field the
//! bot does not read.
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_attachment, create_test_role};
//!
//! let staff = create_test_role(111111111, "Staff");
//! let screenshot = create_test_attachment(222222222, "crash.png", Some("image/png"));
//! ```

pub mod attachment;
pub mod role;

pub use attachment::create_test_attachment;
pub use role::create_test_role;
