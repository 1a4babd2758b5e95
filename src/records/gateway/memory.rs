//! In-memory [`RecordStore`] used by tests and behavioural scenarios.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::records::error::RecordStoreError;
use crate::records::models::{Comment, ExamResult, NewComment};

use super::RecordStore;

/// Record store that keeps rows in memory and counts backend calls.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    results: Vec<ExamResult>,
    comments: Mutex<Vec<Comment>>,
    fail_reads: bool,
    fail_writes: bool,
    calls: AtomicUsize,
}

impl InMemoryRecordStore {
    /// Creates a store seeded with exam results.
    #[must_use]
    pub fn with_results(results: Vec<ExamResult>) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }

    /// Seeds comments.
    #[must_use]
    pub fn with_comments(self, comments: Vec<Comment>) -> Self {
        Self {
            comments: Mutex::new(comments),
            ..self
        }
    }

    /// Makes every read fail with a network error.
    #[must_use]
    pub fn failing_reads(self) -> Self {
        Self {
            fail_reads: true,
            ..self
        }
    }

    /// Makes every insert fail with an API error.
    #[must_use]
    pub fn failing_writes(self) -> Self {
        Self {
            fail_writes: true,
            ..self
        }
    }

    /// Number of backend calls issued so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), RecordStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(RecordStoreError::Network {
                message: "in-memory store is offline".to_owned(),
            });
        }
        Ok(())
    }

    fn stored_comments(&self) -> Vec<Comment> {
        self.comments
            .lock()
            .map(|comments| comments.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn university_names(&self) -> Result<Vec<String>, RecordStoreError> {
        self.record_call()?;
        Ok(self
            .results
            .iter()
            .map(|result| result.university.clone())
            .collect())
    }

    async fn exam_results(&self, university: &str) -> Result<Vec<ExamResult>, RecordStoreError> {
        self.record_call()?;
        let mut rows: Vec<ExamResult> = self
            .results
            .iter()
            .filter(|result| result.university == university)
            .cloned()
            .collect();
        rows.sort_by(|left, right| {
            right
                .year
                .cmp(&left.year)
                .then_with(|| left.exam_time.cmp(&right.exam_time))
        });
        Ok(rows)
    }

    async fn exam_result(&self, id: u64) -> Result<Option<ExamResult>, RecordStoreError> {
        self.record_call()?;
        Ok(self.results.iter().find(|result| result.id == id).cloned())
    }

    async fn comments(&self, exam_id: u64) -> Result<Vec<Comment>, RecordStoreError> {
        self.record_call()?;
        let mut rows: Vec<Comment> = self
            .stored_comments()
            .into_iter()
            .filter(|comment| comment.exam_id == exam_id)
            .collect();
        rows.sort_by(|left, right| right.created_at.cmp(&left.created_at));
        Ok(rows)
    }

    async fn insert_comment(&self, comment: &NewComment) -> Result<(), RecordStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(RecordStoreError::Api {
                status: 500,
                message: "insert rejected".to_owned(),
            });
        }

        let mut comments = self.comments.lock().map_err(|_| RecordStoreError::Api {
            status: 500,
            message: "comment table poisoned".to_owned(),
        })?;
        let next_id = comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let newest = comments
            .iter()
            .map(|c| c.created_at)
            .max()
            .map_or_else(Utc::now, |latest: DateTime<Utc>| latest + Duration::seconds(1));
        comments.push(Comment {
            id: next_id,
            exam_id: comment.exam_id,
            nickname: comment.nickname.clone(),
            content: comment.content.clone(),
            created_at: newest.max(Utc::now()),
        });
        Ok(())
    }
}
