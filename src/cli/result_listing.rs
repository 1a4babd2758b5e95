//! Result listing operation for one university.

use std::io::{self, Write};

use cutline::dashboard::{SelectionAction, SelectionState};
use cutline::records::DashboardService;
use cutline::{CutlineConfig, CutlineError};

use super::output::{write_result_listing, write_score_ignored_note};

/// Prints a university's results, filtered by time slot and classified by
/// score when both are configured.
///
/// # Errors
///
/// Returns [`CutlineError::Configuration`] if no university is configured,
/// [`CutlineError::Score`] if the score does not parse, and
/// [`CutlineError::Io`] if stdout cannot be written.
pub async fn run(config: &CutlineConfig, service: &DashboardService) -> Result<(), CutlineError> {
    let mut stdout = io::stdout().lock();
    run_with_writer(config, service, &mut stdout).await
}

/// Prints results to `writer`.
///
/// This function is exposed for testing with in-memory stores.
pub async fn run_with_writer<W: Write>(
    config: &CutlineConfig,
    service: &DashboardService,
    writer: &mut W,
) -> Result<(), CutlineError> {
    let university = config
        .university
        .as_deref()
        .ok_or_else(|| CutlineError::Configuration {
            message: "--university is required to list results".to_owned(),
        })?;
    let score = config.score_input()?;

    let selection = SelectionState::default()
        .reduce(SelectionAction::SelectUniversity(university.to_owned()))
        .reduce(SelectionAction::SelectTimeSlot(config.time_slot_filter()))
        .reduce(SelectionAction::EnterScore(score.clone()));

    let results = service.list_results(university).await;
    write_result_listing(writer, &selection, &results)?;

    if !score.is_unset() && !selection.score_enabled() {
        write_score_ignored_note(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cutline::records::gateway::memory::InMemoryRecordStore;
    use cutline::records::{DashboardService, ExamResult};
    use cutline::{CutlineConfig, CutlineError};
    use rstest::{fixture, rstest};

    use super::run_with_writer;

    fn row(id: u64, slot: &str) -> ExamResult {
        ExamResult {
            id,
            university: "Yonsei".to_owned(),
            department: format!("Dept {id}"),
            year: 2025,
            exam_time: Some(slot.to_owned()),
            cut_score: Some(60.0),
            avg_score: Some(75.0),
            ..ExamResult::default()
        }
    }

    #[fixture]
    fn service() -> DashboardService {
        let store = InMemoryRecordStore::with_results(vec![
            row(1, "9:00"),
            row(2, "11:00"),
            row(3, "9:00"),
        ]);
        DashboardService::new(Arc::new(store))
    }

    fn config(slot: Option<&str>, score: Option<&str>) -> CutlineConfig {
        CutlineConfig {
            university: Some("Yonsei".to_owned()),
            time_slot: slot.map(str::to_owned),
            score: score.map(str::to_owned),
            ..CutlineConfig::default()
        }
    }

    async fn listing(service: &DashboardService, config: &CutlineConfig) -> String {
        let mut buffer = Vec::new();
        run_with_writer(config, service, &mut buffer)
            .await
            .expect("listing should succeed");
        String::from_utf8(buffer).expect("output should be valid UTF-8")
    }

    #[rstest]
    #[tokio::test]
    async fn slot_filter_and_score_classify_rows(service: DashboardService) {
        let output = listing(&service, &config(Some("9:00"), Some("150"))).await;

        assert!(output.contains("Results for Yonsei (9:00)"), "{output}");
        assert_eq!(output.matches("[SAFE]").count(), 2, "{output}");
        assert!(!output.contains("Dept 2"), "{output}");
        assert!(!output.contains("score ignored"), "{output}");
    }

    #[rstest]
    #[tokio::test]
    async fn score_is_ignored_under_all(service: DashboardService) {
        let output = listing(&service, &config(Some("ALL"), Some("70"))).await;

        assert_eq!(output.matches("[awaiting score]").count(), 3, "{output}");
        assert!(output.contains("score ignored"), "{output}");
    }

    #[rstest]
    #[tokio::test]
    async fn negative_score_is_rejected(service: DashboardService) {
        let mut buffer = Vec::new();
        let outcome = run_with_writer(&config(Some("9:00"), Some("-4")), &service, &mut buffer).await;

        assert!(matches!(outcome, Err(CutlineError::Score(_))));
        assert!(buffer.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn missing_university_is_a_configuration_error(service: DashboardService) {
        let mut buffer = Vec::new();
        let outcome = run_with_writer(&CutlineConfig::default(), &service, &mut buffer).await;

        assert!(matches!(outcome, Err(CutlineError::Configuration { .. })));
    }
}
