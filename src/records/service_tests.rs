//! Tests for the dashboard data access service.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};

use super::DashboardService;
use crate::records::error::{
    CommentSubmitError, CommentValidationError, DraftField, RecordStoreError,
};
use crate::records::gateway::MockRecordStore;
use crate::records::gateway::memory::InMemoryRecordStore;
use crate::records::models::{Comment, CommentDraft, ExamResult};
use crate::telemetry::TelemetryEvent;
use crate::telemetry::test_support::RecordingTelemetrySink;

fn result(id: u64, university: &str, year: i32, slot: &str) -> ExamResult {
    ExamResult {
        id,
        university: university.to_owned(),
        department: format!("Dept {id}"),
        year,
        exam_time: Some(slot.to_owned()),
        ..ExamResult::default()
    }
}

#[fixture]
fn seeded_store() -> InMemoryRecordStore {
    InMemoryRecordStore::with_results(vec![
        result(1, "Yonsei", 2024, "14:00"),
        result(2, "Korea", 2025, "9:00"),
        result(3, "Yonsei", 2025, "9:00"),
        result(4, "Sogang", 2025, "11:00"),
    ])
    .with_comments(vec![Comment {
        id: 1,
        exam_id: 3,
        nickname: "kim".to_owned(),
        content: "first".to_owned(),
        created_at: Utc
            .with_ymd_and_hms(2025, 11, 1, 9, 0, 0)
            .single()
            .expect("fixed timestamp should be valid"),
    }])
}

#[rstest]
#[tokio::test]
async fn list_universities_dedupes_in_first_seen_order(seeded_store: InMemoryRecordStore) {
    let service = DashboardService::new(Arc::new(seeded_store));

    assert_eq!(
        service.list_universities().await,
        vec!["Yonsei", "Korea", "Sogang"]
    );
}

#[tokio::test]
async fn list_universities_drops_blank_names() {
    let mut mock = MockRecordStore::new();
    mock.expect_university_names()
        .times(1)
        .returning(|| Ok(vec![String::new(), "Hanyang".to_owned(), "  ".to_owned()]));
    let service = DashboardService::new(Arc::new(mock));

    assert_eq!(service.list_universities().await, vec!["Hanyang"]);
}

#[tokio::test]
async fn read_failures_degrade_to_empty_and_record_telemetry() {
    let sink = Arc::new(RecordingTelemetrySink::default());
    let service = DashboardService::new(Arc::new(
        InMemoryRecordStore::with_results(vec![result(1, "Yonsei", 2025, "9:00")])
            .failing_reads(),
    ))
    .with_telemetry(sink.clone());

    assert!(service.list_universities().await.is_empty());
    assert!(service.list_results("Yonsei").await.is_empty());
    assert!(service.find_result(1).await.is_none());
    assert!(service.list_comments(1).await.is_empty());

    let events = sink.events();
    assert_eq!(events.len(), 4);
    assert!(events.iter().all(|event| matches!(
        event,
        TelemetryEvent::FetchCompleted {
            succeeded: false,
            row_count: 0,
            ..
        }
    )));
}

#[rstest]
#[tokio::test]
async fn list_results_is_ordered_year_desc_then_slot(seeded_store: InMemoryRecordStore) {
    let service = DashboardService::new(Arc::new(seeded_store));

    let ids: Vec<u64> = service
        .list_results("Yonsei")
        .await
        .iter()
        .map(|row| row.id)
        .collect();

    assert_eq!(ids, vec![3, 1]);
}

#[rstest]
#[tokio::test]
async fn find_result_returns_matching_row(seeded_store: InMemoryRecordStore) {
    let service = DashboardService::new(Arc::new(seeded_store));

    let found = service.find_result(4).await.expect("row 4 should exist");
    assert_eq!(found.university, "Sogang");
    assert!(service.find_result(404).await.is_none());
}

#[tokio::test]
async fn create_comment_with_blank_nickname_never_calls_store() {
    let store = Arc::new(InMemoryRecordStore::default());
    let service = DashboardService::new(store.clone());

    let error = service
        .create_comment(3, &CommentDraft::new("", "pw", "hello"))
        .await
        .expect_err("blank nickname should be rejected");

    assert_eq!(
        error,
        CommentSubmitError::Invalid(CommentValidationError::MissingField {
            field: DraftField::Nickname,
        })
    );
    assert_eq!(store.call_count(), 0);
}

#[rstest]
#[tokio::test]
async fn created_comment_is_listed_first(seeded_store: InMemoryRecordStore) {
    let sink = Arc::new(RecordingTelemetrySink::default());
    let service = DashboardService::new(Arc::new(seeded_store)).with_telemetry(sink.clone());

    service
        .create_comment(3, &CommentDraft::new("lee", "pw", "newest"))
        .await
        .expect("comment should be stored");
    let comments = service.list_comments(3).await;

    let contents: Vec<&str> = comments.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["newest", "first"]);
    assert!(sink.events().contains(&TelemetryEvent::CommentSubmitted {
        exam_id: 3,
        succeeded: true,
    }));
}

#[tokio::test]
async fn create_comment_surfaces_store_failures() {
    let mut mock = MockRecordStore::new();
    mock.expect_insert_comment().times(1).returning(|_| {
        Err(RecordStoreError::Api {
            status: 403,
            message: "row-level security".to_owned(),
        })
    });
    let service = DashboardService::new(Arc::new(mock));

    let error = service
        .create_comment(9, &CommentDraft::new("kim", "pw", "hello"))
        .await
        .expect_err("insert failure should propagate");

    assert!(matches!(
        error,
        CommentSubmitError::Store(RecordStoreError::Api { status: 403, .. })
    ));
}
