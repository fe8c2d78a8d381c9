//! Prefix commands read from channel messages.

pub mod issues;
pub mod new_issue;

/// A recognized command with its raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// `new-issue` or `newissue`: opens the issue form.
    NewIssue,
    /// `issues [state] [page]`: lists repository issues.
    Issues { args: Vec<&'a str> },
}

/// Parses a message into a command.
///
/// The command name must follow the prefix directly and is matched
/// case-insensitively. Anything else is not a command.
pub fn parse_command<'a>(content: &'a str, prefix: &str) -> Option<Command<'a>> {
    let rest = content.strip_prefix(prefix)?;
    if rest.starts_with(char::is_whitespace) {
        return None;
    }
    let mut words = rest.split_whitespace();
    let name = words.next()?.to_lowercase();

    match name.as_str() {
        "new-issue" | "newissue" => Some(Command::NewIssue),
        "issues" => Some(Command::Issues {
            args: words.collect(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests both spellings of the form command.
    ///
    /// Expected: Some(NewIssue), trailing words ignored
    #[test]
    fn parses_new_issue() {
        assert_eq!(parse_command("!new-issue", "!"), Some(Command::NewIssue));
        assert_eq!(parse_command("!newissue", "!"), Some(Command::NewIssue));
        assert_eq!(parse_command("!New-Issue please", "!"), Some(Command::NewIssue));
    }

    /// Tests the listing command with and without arguments.
    ///
    /// Expected: arguments split on whitespace
    #[test]
    fn parses_issues_with_args() {
        assert_eq!(
            parse_command("!issues", "!"),
            Some(Command::Issues { args: vec![] })
        );
        assert_eq!(
            parse_command("!issues closed  2", "!"),
            Some(Command::Issues {
                args: vec!["closed", "2"]
            })
        );
    }

    /// Tests messages that are not commands.
    ///
    /// Expected: None
    #[test]
    fn ignores_other_messages() {
        for content in ["new-issue", "!", "! issues", "!help", "?issues", "hello !issues"] {
            assert_eq!(parse_command(content, "!"), None, "{}", content);
        }
    }

    /// Tests a multi-character prefix.
    ///
    /// Expected: only messages starting with the prefix match
    #[test]
    fn honors_custom_prefix() {
        assert_eq!(parse_command("bot!issues", "bot!"), Some(Command::Issues { args: vec![] }));
        assert_eq!(parse_command("!issues", "bot!"), None);
    }
}
