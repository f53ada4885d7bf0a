//! Error types for MailSort.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Missing, empty or too-short message text.
    ///
    /// Client-facing variants carry their message verbatim.
    #[error("{0}")]
    Input(String),

    #[error("{0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    Extraction(String),

    /// Remote classification failed. Recovered by the scoring fallback and
    /// never returned to HTTP callers.
    #[error("Remote classifier unavailable: {0}")]
    Remote(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether the error was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Input(_) | Self::UnsupportedFormat(_) | Self::Extraction(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
