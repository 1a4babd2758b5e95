//! Top-level error reported by the command-line entry point.

use thiserror::Error;

use crate::dashboard::ScoreInputError;
use crate::records::{CommentSubmitError, RecordStoreError};
use crate::route::RouteError;

/// Everything that can stop a cutline run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CutlineError {
    /// Configuration could not be loaded or parsed.
    #[error("configuration error: {message}")]
    Configuration {
        /// Loader error detail.
        message: String,
    },

    /// Record store settings or requests failed.
    #[error(transparent)]
    Backend(#[from] RecordStoreError),

    /// The requested location is not a dashboard screen.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// The supplied score is unusable.
    #[error(transparent)]
    Score(#[from] ScoreInputError),

    /// A comment could not be posted.
    #[error(transparent)]
    Comment(#[from] CommentSubmitError),

    /// No exam result exists for the requested identifier.
    #[error("no exam result with id {id}")]
    ResultNotFound {
        /// Requested identifier.
        id: u64,
    },

    /// Writing output or opening the log file failed.
    #[error("I/O error: {message}")]
    Io {
        /// Underlying error detail.
        message: String,
    },

    /// The terminal dashboard failed.
    #[error("dashboard error: {message}")]
    Tui {
        /// Underlying error detail.
        message: String,
    },
}

impl From<std::io::Error> for CutlineError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
