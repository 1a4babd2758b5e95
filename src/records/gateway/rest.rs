//! PostgREST-over-HTTP implementation of [`RecordStore`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::records::endpoint::{ApiKey, BackendEndpoint};
use crate::records::error::RecordStoreError;
use crate::records::models::{
    ApiComment, ApiExamResult, ApiUniversity, Comment, ExamResult, NewComment,
};

use super::RecordStore;

const EXAM_RESULTS_TABLE: &str = "exam_results";
const COMMENTS_TABLE: &str = "comments";
const API_KEY_HEADER: &str = "apikey";
const PREFER_HEADER: &str = "prefer";
const MAX_ERROR_CHARS: usize = 160;

/// Record store backed by a hosted PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct RestRecordStore {
    client: Client,
    endpoint: BackendEndpoint,
}

impl RestRecordStore {
    /// Builds a client that authenticates every request with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Client`] when the key cannot be encoded as
    /// a header or the HTTP client fails to build.
    pub fn new(
        endpoint: BackendEndpoint,
        api_key: &ApiKey,
        timeout: Duration,
    ) -> Result<Self, RecordStoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(auth_headers(api_key)?)
            .build()
            .map_err(|error| RecordStoreError::Client {
                message: error.to_string(),
            })?;
        Ok(Self { client, endpoint })
    }

    async fn fetch_rows<T>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, RecordStoreError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint.table_url(table)?;
        let response = send(self.client.get(url).query(query)).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|error| RecordStoreError::Decode {
                message: error.to_string(),
            })
    }
}

#[async_trait]
impl RecordStore for RestRecordStore {
    async fn university_names(&self) -> Result<Vec<String>, RecordStoreError> {
        let rows: Vec<ApiUniversity> = self
            .fetch_rows(EXAM_RESULTS_TABLE, &[("select", "university".to_owned())])
            .await?;
        Ok(rows.into_iter().filter_map(|row| row.university).collect())
    }

    async fn exam_results(&self, university: &str) -> Result<Vec<ExamResult>, RecordStoreError> {
        let rows: Vec<ApiExamResult> = self
            .fetch_rows(
                EXAM_RESULTS_TABLE,
                &[
                    ("select", "*".to_owned()),
                    ("university", format!("eq.{university}")),
                    ("order", "year.desc,exam_time.asc".to_owned()),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(ExamResult::from).collect())
    }

    async fn exam_result(&self, id: u64) -> Result<Option<ExamResult>, RecordStoreError> {
        let rows: Vec<ApiExamResult> = self
            .fetch_rows(
                EXAM_RESULTS_TABLE,
                &[
                    ("select", "*".to_owned()),
                    ("id", format!("eq.{id}")),
                    ("limit", "1".to_owned()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next().map(ExamResult::from))
    }

    async fn comments(&self, exam_id: u64) -> Result<Vec<Comment>, RecordStoreError> {
        let rows: Vec<ApiComment> = self
            .fetch_rows(
                COMMENTS_TABLE,
                &[
                    ("select", "*".to_owned()),
                    ("exam_id", format!("eq.{exam_id}")),
                    ("order", "created_at.desc".to_owned()),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn insert_comment(&self, comment: &NewComment) -> Result<(), RecordStoreError> {
        let url = self.endpoint.table_url(COMMENTS_TABLE)?;
        let request = self
            .client
            .post(url)
            .header(PREFER_HEADER, "return=minimal")
            .json(&[comment]);
        send(request).await.map(|_| ())
    }
}

fn auth_headers(api_key: &ApiKey) -> Result<HeaderMap, RecordStoreError> {
    let to_header = |raw: String| {
        HeaderValue::from_str(&raw)
            .map(|mut value| {
                value.set_sensitive(true);
                value
            })
            .map_err(|error| RecordStoreError::Client {
                message: format!("API key is not a valid header value: {error}"),
            })
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(API_KEY_HEADER),
        to_header(api_key.value().to_owned())?,
    );
    headers.insert(
        AUTHORIZATION,
        to_header(format!("Bearer {}", api_key.value()))?,
    );
    Ok(headers)
}

async fn send(request: RequestBuilder) -> Result<Response, RecordStoreError> {
    let response = request
        .send()
        .await
        .map_err(|error| RecordStoreError::Network {
            message: error.to_string(),
        })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(RecordStoreError::Api {
        status: status.as_u16(),
        message: extract_error_message(&body),
    })
}

/// Pulls `message` out of a PostgREST error body, falling back to the body.
pub(super) fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| truncate_for_message(body.trim(), MAX_ERROR_CHARS))
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output: String = message.chars().take(max_chars).collect();
    if message.chars().nth(max_chars).is_some() {
        output.push_str("...");
    }
    if output.is_empty() {
        output.push_str("(empty response body)");
    }
    output
}

#[cfg(test)]
#[path = "rest_tests.rs"]
mod tests;
