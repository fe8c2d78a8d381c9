use crate::error::{config::ConfigError, AppError};

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
const DEFAULT_GITHUB_ASSET_PATH: &str = "assets/discord-images";
const DEFAULT_DATABASE_URL: &str = "sqlite://issue-bridge.db?mode=rwc";
const DEFAULT_CLEANUP_SCHEDULE: &str = "0 */10 * * * *";

pub struct Config {
    pub discord_token: String,
    pub command_prefix: String,
    /// Channel receiving every submitted issue for review.
    pub issues_channel_id: u64,
    pub staff_role: String,
    pub beta_tester_role: String,

    pub github_token: String,
    pub github_owner: String,
    pub github_repo: String,
    pub github_api_url: String,
    /// Repository folder receiving uploaded screenshots and videos.
    pub github_asset_path: String,

    /// Projects (v2) node id; `None` disables the kanban step.
    pub project_id: Option<String>,
    pub project_field_status: String,
    pub project_status_todo: String,

    pub database_url: String,
    pub cleanup_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset so that `FOO=` in a `.env` file falls back
    /// to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| {
            get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional = |name: &str, default: &str| get(name).unwrap_or_else(|| default.to_string());

        let channel_value = required("ISSUES_CHANNEL_ID")?;
        let issues_channel_id = match channel_value.trim().parse::<u64>() {
            Ok(id) if id > 0 => id,
            _ => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "ISSUES_CHANNEL_ID".to_string(),
                    value: channel_value,
                }
                .into())
            }
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            command_prefix: optional("COMMAND_PREFIX", "!"),
            issues_channel_id,
            staff_role: optional("STAFF_ROLE", "Staff"),
            beta_tester_role: optional("BETA_TESTER_ROLE", "BetaTester"),
            github_token: required("GITHUB_TOKEN")?,
            github_owner: required("GITHUB_OWNER")?,
            github_repo: required("GITHUB_REPO")?,
            github_api_url: optional("GITHUB_API_URL", DEFAULT_GITHUB_API_URL),
            github_asset_path: optional("GITHUB_ASSET_PATH", DEFAULT_GITHUB_ASSET_PATH),
            project_id: get("PROJECT_ID"),
            project_field_status: optional("PROJECT_FIELD_STATUS", "Status"),
            project_status_todo: optional("PROJECT_STATUS_TODO", "Backlog"),
            database_url: optional("DATABASE_URL", DEFAULT_DATABASE_URL),
            cleanup_schedule: optional("CLEANUP_SCHEDULE", DEFAULT_CLEANUP_SCHEDULE),
        })
    }

    /// Role names allowed to validate or reject pending issues.
    pub fn moderator_roles(&self) -> [&str; 2] {
        [self.staff_role.as_str(), self.beta_tester_role.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DISCORD_TOKEN", "discord-token"),
            ("GITHUB_TOKEN", "github-token"),
            ("GITHUB_OWNER", "acme"),
            ("GITHUB_REPO", "game"),
            ("ISSUES_CHANNEL_ID", "123456789012345678"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<Config, AppError> {
        Config::from_lookup(|name| vars.get(name).map(|value| value.to_string()))
    }

    /// Tests that optional settings fall back to their defaults.
    ///
    /// Expected: Ok with default roles, prefix, status names and kanban disabled
    #[test]
    fn applies_defaults() {
        let config = load(&base_vars()).unwrap();

        assert_eq!(config.issues_channel_id, 123456789012345678);
        assert_eq!(config.command_prefix, "!");
        assert_eq!(config.moderator_roles(), ["Staff", "BetaTester"]);
        assert_eq!(config.project_field_status, "Status");
        assert_eq!(config.project_status_todo, "Backlog");
        assert_eq!(config.github_api_url, "https://api.github.com");
        assert!(config.project_id.is_none());
    }

    /// Tests that an empty PROJECT_ID keeps the kanban step disabled.
    ///
    /// Expected: Ok with project_id None
    #[test]
    fn empty_project_id_disables_kanban() {
        let mut vars = base_vars();
        vars.insert("PROJECT_ID", "");
        assert!(load(&vars).unwrap().project_id.is_none());

        vars.insert("PROJECT_ID", "PVT_kwDOAbc");
        assert_eq!(load(&vars).unwrap().project_id.as_deref(), Some("PVT_kwDOAbc"));
    }

    /// Tests that a missing token names the variable in the error.
    ///
    /// Expected: Err(MissingEnvVar("GITHUB_TOKEN"))
    #[test]
    fn reports_missing_variable() {
        let mut vars = base_vars();
        vars.remove("GITHUB_TOKEN");

        match load(&vars) {
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) => {
                assert_eq!(name, "GITHUB_TOKEN")
            }
            other => panic!("expected missing variable error, got {:?}", other.err()),
        }
    }

    /// Tests that a zero or non-numeric channel id is rejected.
    ///
    /// Expected: Err(InvalidEnvVar) for both values
    #[test]
    fn rejects_invalid_channel_id() {
        for value in ["0", "general"] {
            let mut vars = base_vars();
            vars.insert("ISSUES_CHANNEL_ID", value);
            assert!(matches!(
                load(&vars),
                Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
            ));
        }
    }
}
