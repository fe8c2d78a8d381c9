//! GitHub API client.
//!
//! `GitHubService` talks to two surfaces of the same API root: the REST v3 endpoints
//! for repository contents and issues, and the GraphQL endpoint for Projects (v2).
//! Both authenticate with the same token but use different authorization schemes.

mod contents;
mod issues;
mod project;

#[cfg(test)]
mod test;

use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    Method, RequestBuilder, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use url::Url;

use crate::{
    config::Config,
    error::{github::GitHubError, AppError},
};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const BOT_USER_AGENT: &str = concat!("issue-bridge/", env!("CARGO_PKG_VERSION"));

/// Client for one GitHub repository and, optionally, its project board.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct GitHubService {
    http: reqwest::Client,
    api_url: Url,
    token: String,
    owner: String,
    repo: String,
    /// Repository folder receiving uploaded media, split into path segments.
    asset_path: Vec<String>,
}

impl GitHubService {
    /// Creates a new GitHubService from the application configuration.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `config` - Provides the token, repository coordinates, API root and asset folder
    ///
    /// # Returns
    /// - `Ok(GitHubService)` - Client ready to use
    /// - `Err(AppError::GitHubErr)` - `GITHUB_API_URL` is not a usable base URL
    pub fn new(http: reqwest::Client, config: &Config) -> Result<Self, AppError> {
        let api_url = Url::parse(&config.github_api_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| GitHubError::InvalidApiUrl(config.github_api_url.clone()))?;

        Ok(Self {
            http,
            api_url,
            token: config.github_token.clone(),
            owner: config.github_owner.clone(),
            repo: config.github_repo.clone(),
            asset_path: config
                .github_asset_path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }

    /// Builds an endpoint URL below the API root from unencoded path segments.
    fn endpoint<I, S>(&self, segments: I) -> Result<Url, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| GitHubError::InvalidApiUrl(self.api_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Builds an endpoint URL below `/repos/{owner}/{repo}`.
    fn repo_endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let base = ["repos", self.owner.as_str(), self.repo.as_str()];
        self.endpoint(base.iter().chain(segments.iter()))
    }

    /// Starts a REST request with the v3 media type and token authorization.
    fn rest(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, BOT_USER_AGENT)
    }

    /// Sends a GraphQL document and returns its `data` member.
    ///
    /// # Returns
    /// - `Ok(Some(T))` - The call succeeded and carried data
    /// - `Ok(None)` - The call succeeded with `data: null`
    /// - `Err(AppError::GitHubErr)` - Non-200 status or an `errors` array
    /// - `Err(AppError::ReqwestErr)` - Transport or decoding failure
    async fn graphql<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<Option<T>, AppError> {
        let url = self.endpoint(["graphql"])?;

        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, BOT_USER_AGENT)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;
        let response = ensure_status(response, "graphql", |status| status == StatusCode::OK).await?;

        let payload: GraphQlResponse<T> = response.json().await?;
        if let Some(errors) = payload.errors.filter(|errors| !errors.is_empty()) {
            return Err(
                GitHubError::GraphQl(errors.into_iter().map(|error| error.message).collect())
                    .into(),
            );
        }

        Ok(payload.data)
    }
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlErrorMessage>>,
}

#[derive(Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

/// Turns an unaccepted status into `GitHubError::Status`, keeping the body for logs.
async fn ensure_status(
    response: Response,
    endpoint: &str,
    accepted: impl Fn(StatusCode) -> bool,
) -> Result<Response, AppError> {
    let status = response.status();
    if accepted(status) {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(GitHubError::Status {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        body,
    }
    .into())
}
