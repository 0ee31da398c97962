//! Error types for arbor-fetch.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),
}
