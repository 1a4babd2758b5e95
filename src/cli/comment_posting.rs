//! Comment posting operation.

use std::io::{self, Write};

use cutline::records::DashboardService;
use cutline::{CutlineConfig, CutlineError};

use super::output::{io_error, write_comment_thread};
use super::result_detail::require_result_id;

/// Posts the configured comment and prints the refreshed thread.
///
/// # Errors
///
/// Returns [`CutlineError::Comment`] when a field is blank or the store
/// rejects the insert, and [`CutlineError::Io`] if stdout cannot be written.
pub async fn run(config: &CutlineConfig, service: &DashboardService) -> Result<(), CutlineError> {
    let mut stdout = io::stdout().lock();
    run_with_writer(config, service, &mut stdout).await
}

/// Posts the comment and prints the thread to `writer`.
///
/// This function is exposed for testing with in-memory stores.
pub async fn run_with_writer<W: Write>(
    config: &CutlineConfig,
    service: &DashboardService,
    writer: &mut W,
) -> Result<(), CutlineError> {
    let id = require_result_id(config)?;
    service.create_comment(id, &config.comment_draft()).await?;

    writeln!(writer, "Comment posted to result #{id}.").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    let comments = service.list_comments(id).await;
    write_comment_thread(writer, &comments)
}
