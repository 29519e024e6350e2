use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankingError {
    #[error("Source unavailable ({location}): {reason}")]
    SourceUnavailable { location: String, reason: String },

    #[error("Failed to parse tabular data from {location}: {reason}")]
    Parse { location: String, reason: String },

    #[error("Failed to render report: {0}")]
    Render(#[from] askama::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RankingError {
    /// Pipeline stage the error aborted, used in diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            RankingError::SourceUnavailable { .. } => "fetch",
            RankingError::Parse { .. } => "parse",
            RankingError::Render(_) => "render",
            RankingError::Write { .. } => "write",
            RankingError::Config(_) | RankingError::Toml(_) => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, RankingError>;
