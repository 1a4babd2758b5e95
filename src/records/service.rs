//! Dashboard-facing data access with the degrade-to-empty failure policy.
//!
//! Reads never fail from the caller's point of view: a store error is logged
//! and becomes an empty collection (or `None`). Comment submission is the
//! one operation that reports failure, so the UI can alert and keep the
//! typed text for a retry.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

use super::error::CommentSubmitError;
use super::gateway::RecordStore;
use super::models::{Comment, CommentDraft, ExamResult};

/// Data access facade shared by the CLI and the dashboard.
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn RecordStore>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService").finish_non_exhaustive()
    }
}

impl DashboardService {
    /// Creates a service over `store` with telemetry disabled.
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self { telemetry, ..self }
    }

    /// Lists distinct university names in first-seen order.
    pub async fn list_universities(&self) -> Vec<String> {
        let started = Instant::now();
        let outcome = self.store.university_names().await;
        let names = self.degrade("universities", started, outcome, Vec::new(), Vec::len);

        let mut seen = HashSet::new();
        names
            .into_iter()
            .filter(|name| !name.trim().is_empty())
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }

    /// Lists every result for `university`, year descending then slot ascending.
    pub async fn list_results(&self, university: &str) -> Vec<ExamResult> {
        let started = Instant::now();
        let outcome = self.store.exam_results(university).await;
        self.degrade("results", started, outcome, Vec::new(), Vec::len)
    }

    /// Loads a single result by identifier.
    pub async fn find_result(&self, id: u64) -> Option<ExamResult> {
        let started = Instant::now();
        let outcome = self.store.exam_result(id).await;
        self.degrade("result", started, outcome, None, |found| {
            usize::from(found.is_some())
        })
    }

    /// Lists comments for a result, newest first.
    pub async fn list_comments(&self, exam_id: u64) -> Vec<Comment> {
        let started = Instant::now();
        let outcome = self.store.comments(exam_id).await;
        self.degrade("comments", started, outcome, Vec::new(), Vec::len)
    }

    /// Validates and posts a comment.
    ///
    /// # Errors
    ///
    /// Returns [`CommentSubmitError::Invalid`] without contacting the store
    /// when a field is blank, or [`CommentSubmitError::Store`] when the
    /// insert fails.
    pub async fn create_comment(
        &self,
        exam_id: u64,
        draft: &CommentDraft,
    ) -> Result<(), CommentSubmitError> {
        let comment = draft.validate(exam_id)?;
        let outcome = self.store.insert_comment(&comment).await;

        self.telemetry.record(TelemetryEvent::CommentSubmitted {
            exam_id,
            succeeded: outcome.is_ok(),
        });

        match outcome {
            Ok(()) => {
                tracing::info!(exam_id, nickname = %comment.nickname, "comment posted");
                Ok(())
            }
            Err(error) => {
                tracing::warn!(exam_id, %error, "comment insert failed");
                Err(error.into())
            }
        }
    }

    fn degrade<T>(
        &self,
        query: &str,
        started: Instant,
        outcome: Result<T, super::error::RecordStoreError>,
        fallback: T,
        count: impl FnOnce(&T) -> usize,
    ) -> T {
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match outcome {
            Ok(value) => {
                self.telemetry.record(TelemetryEvent::FetchCompleted {
                    query: query.to_owned(),
                    latency_ms,
                    row_count: count(&value),
                    succeeded: true,
                });
                value
            }
            Err(error) => {
                tracing::warn!(query, %error, "record store read failed; showing no data");
                self.telemetry.record(TelemetryEvent::FetchCompleted {
                    query: query.to_owned(),
                    latency_ms,
                    row_count: 0,
                    succeeded: false,
                });
                fallback
            }
        }
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
