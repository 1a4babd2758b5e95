//! Error types exposed by the record store layer.

use thiserror::Error;

/// Errors surfaced while configuring or talking to the record store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordStoreError {
    /// No backend URL was configured.
    #[error("record store URL is required (use --backend-url or SUPABASE_URL)")]
    MissingBackendUrl,

    /// No API key was configured.
    #[error("record store API key is required (use --api-key or SUPABASE_ANON_KEY)")]
    MissingApiKey,

    /// The configured backend URL could not be parsed.
    #[error("record store URL is invalid: {0}")]
    InvalidUrl(String),

    /// The record store answered with a non-success status.
    #[error("record store returned {status}: {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Server-provided message, or the truncated body.
        message: String,
    },

    /// Networking failed before a response was received.
    #[error("network error talking to the record store: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The response body did not match the expected row shape.
    #[error("could not decode record store response: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to configure HTTP client: {message}")]
    Client {
        /// Builder error detail.
        message: String,
    },
}

/// A comment draft that cannot be submitted because a field is blank.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CommentValidationError {
    /// The named field was empty or whitespace.
    #[error("{field} is required")]
    MissingField {
        /// Which draft field was blank.
        field: DraftField,
    },
}

/// Editable fields of a comment draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Author nickname.
    Nickname,
    /// Deletion password.
    Password,
    /// Comment body.
    Content,
}

impl DraftField {
    /// Returns a human-readable label for the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nickname => "nickname",
            Self::Password => "password",
            Self::Content => "content",
        }
    }

    /// Returns the field that follows this one in the compose form.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Nickname => Self::Password,
            Self::Password => Self::Content,
            Self::Content => Self::Nickname,
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Failure to post a comment, either locally or at the store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentSubmitError {
    /// The draft failed local validation; nothing was sent.
    #[error("comment not sent: {0}")]
    Invalid(#[from] CommentValidationError),

    /// The record store rejected or failed the insert.
    #[error("comment could not be saved: {0}")]
    Store(#[from] RecordStoreError),
}
