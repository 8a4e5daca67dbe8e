use thiserror::Error;

pub type Result<T> = std::result::Result<T, CricError>;

#[derive(Error, Debug)]
pub enum CricError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("no search result pointing at a player profile for \"{0}\"")]
    NoSearchResult(String),

    #[error("{var} is not set in the environment")]
    MissingKey { var: &'static str },

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for CricError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<String> for CricError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for CricError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
