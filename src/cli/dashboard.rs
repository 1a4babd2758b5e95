//! Interactive dashboard mode.
//!
//! This module provides the entry point for the terminal dashboard that lets
//! users pick a university, filter and classify its results, and discuss
//! individual results.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;
use crossterm::terminal;

use cutline::assets::LogoResolver;
use cutline::records::DashboardService;
use cutline::tui::{
    DashboardApp, DashboardContext, set_dashboard_context, set_initial_terminal_size,
};
use cutline::{CutlineConfig, CutlineError};

/// Runs the terminal dashboard.
///
/// # Errors
///
/// Returns [`CutlineError::Route`] if the configured location is not a
/// dashboard screen, and [`CutlineError::Tui`] if the terminal program fails.
pub async fn run(config: &CutlineConfig, service: DashboardService) -> Result<(), CutlineError> {
    let context = DashboardContext {
        service,
        logos: Arc::new(LogoResolver::new(&config.logo_dir)),
        initial_route: config.initial_route()?,
    };

    // A second run in the same process keeps the first context.
    if !set_dashboard_context(context) {
        tracing::debug!("dashboard context already set");
    }
    if let Ok((width, height)) = terminal::size() {
        let _seeded = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| CutlineError::Tui {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `DashboardApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // DashboardApp::init() retrieves its context from module-level storage.
    let program = Program::<DashboardApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
