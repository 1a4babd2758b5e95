//! Single result detail operation.

use std::io::{self, Write};

use cutline::analysis::slider_default;
use cutline::records::DashboardService;
use cutline::{CutlineConfig, CutlineError};

use super::output::write_result_detail;

/// Prints one result with its verdict and discussion.
///
/// The verdict uses the configured score, or the result's cutoff (70 when
/// the cutoff is missing) when no score is given.
///
/// # Errors
///
/// Returns [`CutlineError::ResultNotFound`] when the result does not exist,
/// [`CutlineError::Score`] if the score does not parse, and
/// [`CutlineError::Io`] if stdout cannot be written.
pub async fn run(config: &CutlineConfig, service: &DashboardService) -> Result<(), CutlineError> {
    let mut stdout = io::stdout().lock();
    run_with_writer(config, service, &mut stdout).await
}

/// Prints the detail to `writer`.
///
/// This function is exposed for testing with in-memory stores.
pub async fn run_with_writer<W: Write>(
    config: &CutlineConfig,
    service: &DashboardService,
    writer: &mut W,
) -> Result<(), CutlineError> {
    let id = require_result_id(config)?;
    let score = config.score_input()?;

    let result = service
        .find_result(id)
        .await
        .ok_or(CutlineError::ResultNotFound { id })?;
    let comments = service.list_comments(id).await;

    let value = score
        .value()
        .unwrap_or_else(|| slider_default(result.cut_score));
    write_result_detail(writer, &result, value, &comments)
}

/// Returns the configured result id.
pub(crate) fn require_result_id(config: &CutlineConfig) -> Result<u64, CutlineError> {
    config.result_id.ok_or_else(|| CutlineError::Configuration {
        message: "--result-id is required".to_owned(),
    })
}
