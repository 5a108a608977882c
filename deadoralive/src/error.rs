use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeadOrAliveError {
    /// No candidate survived the search or the person filter.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The knowledge base answered, but reported an error in its payload.
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Upstream lookup timed out after {0} seconds")]
    Timeout(u64),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DeadOrAliveError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}

pub type Result<T> = std::result::Result<T, DeadOrAliveError>;
