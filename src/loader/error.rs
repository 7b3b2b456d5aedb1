use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read offers from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode offers: {0}")]
    Decode(#[from] serde_json::Error),
}
