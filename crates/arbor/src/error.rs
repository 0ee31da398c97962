//! Error types for tree materialization.

use std::io;

use arbor_fetch::FetchError;
use thiserror::Error;

/// Failure of a single structural or leaf operation inside a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to open group '{name}'")]
    GroupCreation {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write leaf '{locator}'")]
    LeafWrite {
        locator: String,
        #[source]
        source: LeafFailure,
    },
}

impl SinkError {
    pub(crate) fn group(name: &str, source: io::Error) -> Self {
        SinkError::GroupCreation {
            name: name.to_string(),
            source,
        }
    }

    pub(crate) fn leaf(locator: &str, source: impl Into<LeafFailure>) -> Self {
        SinkError::LeafWrite {
            locator: locator.to_string(),
            source: source.into(),
        }
    }
}

/// Underlying cause of a leaf write failure.
#[derive(Debug, Error)]
pub enum LeafFailure {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The host refused writable access to the destination tree.
#[derive(Debug, Error)]
#[error("destination access refused: {reason}")]
pub struct PermissionDenied {
    pub reason: String,
}

impl PermissionDenied {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Fatal errors surfaced by [`Materializer::materialize`](crate::Materializer::materialize).
///
/// Per-child failures below the root are never fatal; they are reported to
/// the [`WalkObserver`](crate::WalkObserver) and swallowed.
#[derive(Debug, Error)]
pub enum MaterializeError {
    /// Root handle refused before any fetch was attempted.
    #[error(transparent)]
    PermissionDenied(#[from] PermissionDenied),

    /// The root group itself could not be opened; there is no parent
    /// boundary to absorb it.
    #[error(transparent)]
    Walk(#[from] SinkError),

    #[error("failed to encode archive artifact")]
    Archive(#[source] arbor_archive::Error),
}
