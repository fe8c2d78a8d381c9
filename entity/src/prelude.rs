pub use super::issue_message::Entity as IssueMessage;
pub use super::pending_issue::Entity as PendingIssue;
pub use super::pending_issue_file::Entity as PendingIssueFile;
