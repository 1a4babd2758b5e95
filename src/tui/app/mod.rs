//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! exam results dashboard. It coordinates between components, owns the
//! selection state and issues data fetches as commands.
//!
//! # Module Structure
//!
//! - `screen`: Which screen is shown and its input context
//! - `fetch`: Command builders for record store fetches
//! - `navigation`: Cursor movement, selection and back navigation
//! - `selection_handlers`: Time-slot tabs and score entry
//! - `detail_handlers`: Detail tabs, slider and comment composition
//! - `data_handlers`: Applying fetch responses
//! - `rendering`: View rendering methods for terminal output
//! - `model_impl`: The `bubbletea_rs::Model` implementation

use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::assets::LogoResolver;
use crate::dashboard::{RequestSequence, SelectionAction, SelectionState, TimeSlotFilter};
use crate::records::{DashboardService, ExamResult};
use crate::route::Route;

use super::messages::AppMsg;
use super::state::{DetailState, ListCursor};
use super::storage::DashboardContext;

mod data_handlers;
mod detail_handlers;
mod fetch;
mod model_impl;
mod navigation;
mod rendering;
mod screen;
mod selection_handlers;

pub use screen::Screen;

/// Rows used by the header and status bar on every screen.
pub(crate) const CHROME_HEIGHT: usize = 2;
/// Rows above the results table: tabs, score line, spacer and column header.
pub(crate) const RESULTS_PREAMBLE_HEIGHT: usize = 4;
/// Rows below the picker grid for the selected card's logo reference.
pub(crate) const PICKER_FOOTER_HEIGHT: usize = 2;

/// Main application model for the exam results dashboard.
#[derive(Debug)]
pub struct DashboardApp {
    /// Data access; `None` when the program was started without a context.
    service: Option<DashboardService>,
    /// Logo lookup.
    logos: Arc<LogoResolver>,
    /// Screen currently shown.
    pub(crate) screen: Screen,
    /// Screen that `Esc` returns to from the detail screen.
    pub(crate) detail_origin: Screen,
    /// University, time slot and score.
    pub(crate) selection: SelectionState,
    /// University names for the picker.
    pub(crate) universities: Vec<String>,
    /// Whether the university list is in flight.
    pub(crate) universities_loading: bool,
    /// Picker cursor.
    pub(crate) picker_cursor: ListCursor,
    /// All results for the selected university.
    pub(crate) results: Vec<ExamResult>,
    /// Whether the results are in flight.
    pub(crate) results_loading: bool,
    /// Results table cursor, indexing the filtered rows.
    pub(crate) results_cursor: ListCursor,
    /// Detail screen state.
    pub(crate) detail: Option<DetailState>,
    /// Latest request per fetch channel.
    pub(crate) requests: RequestSequence,
    /// Short-lived hint shown in the status bar.
    pub(crate) status: Option<String>,
    /// Current error message, if any.
    pub(crate) error: Option<String>,
    /// Terminal dimensions.
    pub(crate) width: u16,
    pub(crate) height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
}

impl DashboardApp {
    /// Creates an application at the picker, without issuing any fetch.
    #[must_use]
    pub fn new(context: DashboardContext) -> Self {
        Self::with_parts(Some(context.service), context.logos)
    }

    /// Creates an application with no data service.
    ///
    /// Every fetch reports an error instead of running.
    #[must_use]
    pub fn unconfigured(logos: Arc<LogoResolver>) -> Self {
        Self::with_parts(None, logos)
    }

    fn with_parts(service: Option<DashboardService>, logos: Arc<LogoResolver>) -> Self {
        let (width, height) = super::get_initial_terminal_size();
        Self {
            service,
            logos,
            screen: Screen::Picker,
            detail_origin: Screen::Picker,
            selection: SelectionState::default(),
            universities: Vec::new(),
            universities_loading: false,
            picker_cursor: ListCursor::new(),
            results: Vec::new(),
            results_loading: false,
            results_cursor: ListCursor::new(),
            detail: None,
            requests: RequestSequence::default(),
            status: None,
            error: None,
            width,
            height,
            show_help: false,
        }
    }

    /// Opens the screen for `route` and returns the fetch it needs.
    pub fn open_route(&mut self, route: &Route) -> Option<Cmd> {
        match route {
            Route::Picker => self.enter_picker(),
            Route::Results { university } => self.open_university(university.clone()),
            Route::Detail { id } => self.open_detail(*id, Screen::Picker),
        }
    }

    /// Returns the screen currently shown.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the selection state.
    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Returns the university names loaded for the picker.
    #[must_use]
    pub fn universities(&self) -> &[String] {
        &self.universities
    }

    /// Returns the detail state while the detail screen is open.
    #[must_use]
    pub const fn detail(&self) -> Option<&DetailState> {
        self.detail.as_ref()
    }

    /// Returns the current error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the current status hint, if any.
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Results visible under the active time-slot filter.
    #[must_use]
    pub fn visible_results(&self) -> Vec<ExamResult> {
        self.selection.visible_results(&self.results)
    }

    /// Tabs offered on the results screen.
    #[must_use]
    pub fn time_slot_tabs(&self) -> Vec<TimeSlotFilter> {
        TimeSlotFilter::tabs(&self.results)
    }

    /// Returns the route describing the current screen.
    #[must_use]
    pub fn route(&self) -> Route {
        match self.screen {
            Screen::Picker => Route::Picker,
            Screen::Results => self
                .selection
                .university()
                .map_or(Route::Picker, |university| Route::Results {
                    university: university.to_owned(),
                }),
            Screen::Detail => self
                .detail
                .as_ref()
                .map_or(Route::Picker, |detail| Route::Detail {
                    id: detail.result_id,
                }),
        }
    }

    /// Location string for the current screen.
    #[must_use]
    pub fn location(&self) -> String {
        self.route().to_location()
    }

    /// Applies a selection action.
    pub(crate) fn reduce_selection(&mut self, action: SelectionAction) {
        self.selection = std::mem::take(&mut self.selection).reduce(action);
    }

    /// Rows available for the results table.
    pub(crate) fn results_table_height(&self) -> usize {
        usize::from(self.height)
            .saturating_sub(CHROME_HEIGHT + RESULTS_PREAMBLE_HEIGHT)
            .max(1)
    }

    /// Rows available for the picker grid.
    pub(crate) fn picker_rows(&self) -> usize {
        usize::from(self.height)
            .saturating_sub(CHROME_HEIGHT + PICKER_FOOTER_HEIGHT)
            .max(1)
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It delegates to specialised
    /// handlers for each message category to keep cyclomatic complexity low.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        if msg.is_navigation() {
            self.status = None;
            return self.handle_navigation_msg(msg);
        }
        if msg.is_selection() {
            self.status = None;
            return self.handle_selection_msg(msg);
        }
        if msg.is_detail() || msg.is_compose() {
            return self.handle_detail_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                self.results_cursor.ensure_visible(self.results_table_height());
                None
            }
            _ => None,
        }
    }
}
