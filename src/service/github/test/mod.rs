use std::collections::HashMap;

use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use crate::{
    config::Config,
    error::{github::GitHubError, AppError},
    service::github::GitHubService,
};


/// Builds a service for `acme/game` pointed at the mock server.
fn service(server: &MockServer) -> GitHubService {
    let vars = HashMap::from([
        ("DISCORD_TOKEN", "discord-token".to_string()),
        ("GITHUB_TOKEN", "gh-token".to_string()),
        ("GITHUB_OWNER", "acme".to_string()),
        ("GITHUB_REPO", "game".to_string()),
        ("ISSUES_CHANNEL_ID", "1".to_string()),
        ("GITHUB_API_URL", server.uri()),
    ]);
    let config = Config::from_lookup(|name| vars.get(name).cloned()).unwrap();

    GitHubService::new(reqwest::Client::new(), &config).unwrap()
}

fn issue_json(number: u64, title: &str, state: &str) -> serde_json::Value {
    json!({
        "number": number,
        "title": title,
        "html_url": format!("https://github.com/acme/game/issues/{}", number),
        "node_id": format!("I_kwDO{}", number),
        "state": state,
        "labels": [{ "name": "bug" }]
    })
}
