use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MagsyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown {field}: {value}")]
    Validation { field: &'static str, value: String },

    #[error("Feed parsing error: {0}")]
    Parse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unparseable issue date: {0}")]
    IssueDate(String),
}

impl MagsyncError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn validation(field: &'static str, value: impl Into<String>) -> Self {
        Self::Validation {
            field,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MagsyncError>;
