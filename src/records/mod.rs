//! Record store access for exam results and discussion comments.
//!
//! The gateway layer talks to a PostgREST-compatible backend; the service
//! layer applies the dashboard's failure policy on top of it.

pub mod endpoint;
pub mod error;
pub mod gateway;
pub mod models;
pub mod service;

pub use endpoint::{ApiKey, BackendEndpoint};
pub use error::{CommentSubmitError, CommentValidationError, DraftField, RecordStoreError};
pub use gateway::{RecordStore, RestRecordStore};
pub use models::{
    Comment, CommentDraft, CommentPassword, ExamResult, MISSING_VALUE, NewComment,
    display_number, format_number,
};
pub use service::DashboardService;
