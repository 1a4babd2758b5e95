//! Startup context storage for the dashboard TUI.
//!
//! This module owns the global `OnceLock` values used during TUI bootstrapping
//! and provides the setter/getter functions consumed by CLI wiring and
//! `DashboardApp::init()`.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::assets::LogoResolver;
use crate::records::DashboardService;
use crate::route::Route;

/// Global storage for the dashboard context.
///
/// This is set before the TUI program starts and read by
/// `DashboardApp::init()`.
static DASHBOARD_CONTEXT: OnceLock<DashboardContext> = OnceLock::new();

/// Global storage for initial terminal dimensions.
///
/// This is set before the TUI program starts so the first frame uses the
/// actual terminal size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Everything the dashboard needs from the outside world.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    /// Data access with the dashboard's failure policy.
    pub service: DashboardService,
    /// Logo lookup for the picker and results header.
    pub logos: Arc<LogoResolver>,
    /// Screen to open first.
    pub initial_route: Route,
}

/// Sets the dashboard context.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_dashboard_context(context: DashboardContext) -> bool {
    DASHBOARD_CONTEXT.set(context).is_ok()
}

/// Sets the initial terminal dimensions for the first frame.
///
/// # Returns
///
/// `true` if the size was set, `false` if it was already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Gets a clone of the dashboard context, if one was configured.
pub(crate) fn get_dashboard_context() -> Option<DashboardContext> {
    DASHBOARD_CONTEXT.get().cloned()
}

/// Gets the initial terminal dimensions from storage.
///
/// Falls back to querying the terminal, then to 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}
