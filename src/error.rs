//! Error handling for the resume scorer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    Extraction(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Suggestion service error: {0}")]
    Service(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeScorerError>;

/// Convert HTTP client errors; transport failures are never credential problems
impl From<reqwest::Error> for ResumeScorerError {
    fn from(err: reqwest::Error) -> Self {
        ResumeScorerError::Service(err.to_string())
    }
}

impl From<regex::Error> for ResumeScorerError {
    fn from(err: regex::Error) -> Self {
        ResumeScorerError::Configuration(format!("Invalid section pattern: {}", err))
    }
}
