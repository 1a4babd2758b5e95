//! Gateways for reading and writing exam results and comments.
//!
//! The trait keeps the dashboard independent of the HTTP transport so tests
//! can substitute mocks or the in-memory store, while [`RestRecordStore`]
//! talks to a PostgREST-compatible backend.

mod rest;

#[cfg(any(test, feature = "test-support"))]
pub mod memory;

pub use rest::RestRecordStore;

use async_trait::async_trait;

use super::error::RecordStoreError;
use super::models::{Comment, ExamResult, NewComment};

/// Read and write access to the two record store tables.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the `university` column of every exam result row.
    async fn university_names(&self) -> Result<Vec<String>, RecordStoreError>;

    /// Fetch all rows for a university, year descending then slot ascending.
    async fn exam_results(&self, university: &str) -> Result<Vec<ExamResult>, RecordStoreError>;

    /// Fetch a single row by identifier.
    async fn exam_result(&self, id: u64) -> Result<Option<ExamResult>, RecordStoreError>;

    /// Fetch comments for a result, newest first.
    async fn comments(&self, exam_id: u64) -> Result<Vec<Comment>, RecordStoreError>;

    /// Insert one validated comment.
    async fn insert_comment(&self, comment: &NewComment) -> Result<(), RecordStoreError>;
}
