//! Cursor movement, selection and back navigation.
//!
//! The same navigation messages mean different things per screen: on the
//! picker `CursorUp`/`CursorDown` step across the grid and `RowUp`/`RowDown`
//! jump a whole row; on the results table they move one row.

use bubbletea_rs::Cmd;

use crate::dashboard::{FetchChannel, SelectionAction};
use crate::tui::components::grid_columns;
use crate::tui::messages::AppMsg;
use crate::tui::state::DetailState;

use super::{DashboardApp, Screen};

impl DashboardApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match self.screen {
            Screen::Picker => self.handle_picker_navigation(msg),
            Screen::Results => self.handle_results_navigation(msg),
            Screen::Detail => match msg {
                AppMsg::Back => self.leave_detail(),
                _ => None,
            },
        }
    }

    fn handle_picker_navigation(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let count = self.universities.len();
        let columns = grid_columns(usize::from(self.width));
        match msg {
            AppMsg::CursorUp => self.picker_cursor.move_up(1),
            AppMsg::CursorDown => self.picker_cursor.move_down(1, count),
            AppMsg::RowUp => self.picker_cursor.move_up(columns),
            AppMsg::RowDown => self.picker_cursor.move_down(columns, count),
            AppMsg::Select => return self.select_university_under_cursor(),
            _ => {}
        }
        None
    }

    fn handle_results_navigation(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let count = self.visible_results().len();
        let height = self.results_table_height();
        match msg {
            AppMsg::CursorUp | AppMsg::RowUp => self.results_cursor.move_up(1),
            AppMsg::CursorDown | AppMsg::RowDown => self.results_cursor.move_down(1, count),
            AppMsg::Select => return self.open_result_under_cursor(),
            AppMsg::Back => return self.enter_picker(),
            _ => {}
        }
        self.results_cursor.ensure_visible(height);
        None
    }

    fn select_university_under_cursor(&mut self) -> Option<Cmd> {
        let name = self.universities.get(self.picker_cursor.position)?.clone();
        self.open_university(name)
    }

    fn open_result_under_cursor(&mut self) -> Option<Cmd> {
        let id = self
            .visible_results()
            .get(self.results_cursor.position)
            .map(|result| result.id)?;
        self.open_detail(id, Screen::Results)
    }

    /// Shows the picker, discarding the selection and fetching the
    /// university list if it has not been loaded.
    ///
    /// Any results fetch still in flight is superseded.
    pub(super) fn enter_picker(&mut self) -> Option<Cmd> {
        self.reduce_selection(SelectionAction::ClearUniversity);
        self.requests.issue(FetchChannel::Results);
        self.results.clear();
        self.results_loading = false;
        self.results_cursor.reset();
        self.detail = None;
        self.screen = Screen::Picker;

        if self.universities.is_empty() && !self.universities_loading {
            return self.fetch_universities();
        }
        None
    }

    /// Selects `university` and shows its results.
    pub(super) fn open_university(&mut self, university: String) -> Option<Cmd> {
        self.reduce_selection(SelectionAction::SelectUniversity(university.clone()));
        self.results.clear();
        self.results_cursor.reset();
        self.error = None;
        self.screen = Screen::Results;
        self.fetch_results(university)
    }

    /// Shows the detail screen for `id`, returning to `origin` on `Esc`.
    ///
    /// Comments still in flight for the previous detail are superseded.
    pub(super) fn open_detail(&mut self, id: u64, origin: Screen) -> Option<Cmd> {
        self.requests.issue(FetchChannel::Comments);
        self.detail = Some(DetailState::loading(id));
        self.detail_origin = origin;
        self.error = None;
        self.screen = Screen::Detail;
        self.fetch_detail(id)
    }

    fn leave_detail(&mut self) -> Option<Cmd> {
        self.detail = None;
        if self.detail_origin == Screen::Results && self.selection.university().is_some() {
            self.screen = Screen::Results;
            return None;
        }
        self.enter_picker()
    }
}
