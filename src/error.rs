use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoChartsError {
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("GitHub API returned {status}: {message}")]
    HttpStatus {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid API endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, RepoChartsError>;
