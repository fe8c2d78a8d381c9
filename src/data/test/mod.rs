mod issue_message;
mod pending_issue;
