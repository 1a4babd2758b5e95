//! University listing operation.

use std::io::{self, Write};

use cutline::assets::LogoResolver;
use cutline::records::DashboardService;
use cutline::{CutlineConfig, CutlineError};

use super::output::write_university_listing;

/// Lists every university with its logo reference.
///
/// # Errors
///
/// Returns [`CutlineError::Io`] if stdout cannot be written.
pub async fn run(config: &CutlineConfig, service: &DashboardService) -> Result<(), CutlineError> {
    let mut stdout = io::stdout().lock();
    run_with_writer(config, service, &mut stdout).await
}

/// Lists universities to `writer`.
///
/// This function is exposed for testing with in-memory stores.
pub async fn run_with_writer<W: Write>(
    config: &CutlineConfig,
    service: &DashboardService,
    writer: &mut W,
) -> Result<(), CutlineError> {
    let names = service.list_universities().await;
    let logos = LogoResolver::new(&config.logo_dir);
    write_university_listing(writer, &names, &logos)
}
