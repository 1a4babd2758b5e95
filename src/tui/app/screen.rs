//! Screens of the dashboard and the key bindings each one uses.

use crate::tui::input::InputContext;

use super::DashboardApp;

/// Tracks which screen is currently active in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// University picker.
    #[default]
    Picker,
    /// Results for the selected university.
    Results,
    /// One result with analysis and discussion tabs.
    Detail,
}

impl DashboardApp {
    /// Returns the current input context for context-aware key mapping.
    pub(crate) fn input_context(&self) -> InputContext {
        match self.screen {
            Screen::Picker => InputContext::Picker,
            Screen::Results => InputContext::Results,
            Screen::Detail => {
                let composing = self
                    .detail
                    .as_ref()
                    .is_some_and(|detail| detail.form.is_composing());
                if composing {
                    InputContext::Compose
                } else {
                    InputContext::Detail
                }
            }
        }
    }
}
