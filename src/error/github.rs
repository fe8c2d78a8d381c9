use thiserror::Error;

/// Failures reported by (or about) the GitHub API.
#[derive(Error, Debug)]
pub enum GitHubError {
    /// GitHub answered with a status code the call does not accept.
    #[error("GitHub API returned {status} for {endpoint}: {body}")]
    Status {
        /// Path of the endpoint that was called
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// GraphQL request succeeded at the HTTP level but carried an `errors` array.
    #[error("GitHub GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// A field the call depends on is absent from the response.
    #[error("GitHub response is missing `{0}`")]
    MissingField(&'static str),

    /// The configured API root cannot be used to build endpoint URLs.
    #[error("Invalid GitHub API URL '{0}'")]
    InvalidApiUrl(String),
}
