//! Time-slot tab and score entry handlers for the results screen.

use bubbletea_rs::Cmd;

use crate::dashboard::{ScoreInput, SelectionAction};
use crate::tui::messages::AppMsg;

use super::{DashboardApp, Screen};

const SCORE_LOCKED_HINT: &str = "Choose a time slot before entering a score";

/// Direction to cycle the time-slot tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TabStep {
    Next,
    Previous,
}

impl DashboardApp {
    /// Dispatches selection messages to their handlers.
    pub(super) fn handle_selection_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if self.screen != Screen::Results {
            return None;
        }
        match msg {
            AppMsg::NextTimeSlot => self.cycle_time_slot(TabStep::Next),
            AppMsg::PreviousTimeSlot => self.cycle_time_slot(TabStep::Previous),
            AppMsg::ScoreChar(character) => self.push_score_char(*character),
            AppMsg::ScoreBackspace => self.pop_score_char(),
            _ => {}
        }
        None
    }

    fn cycle_time_slot(&mut self, step: TabStep) {
        let tabs = self.time_slot_tabs();
        let last = tabs.len().saturating_sub(1);
        let current = tabs
            .iter()
            .position(|tab| tab == self.selection.time_slot())
            .unwrap_or(0);
        let next_index = match step {
            TabStep::Next if current >= last => 0,
            TabStep::Next => current + 1,
            TabStep::Previous if current == 0 => last,
            TabStep::Previous => current - 1,
        };

        let Some(next) = tabs.into_iter().nth(next_index) else {
            return;
        };
        self.reduce_selection(SelectionAction::SelectTimeSlot(next));
        self.results_cursor.reset();
    }

    fn push_score_char(&mut self, character: char) {
        if !self.selection.score_enabled() {
            self.status = Some(SCORE_LOCKED_HINT.to_owned());
            return;
        }

        let mut candidate = self.selection.score().as_str().to_owned();
        candidate.push(character);
        self.apply_score_text(&candidate);
    }

    fn pop_score_char(&mut self) {
        let mut candidate = self.selection.score().as_str().to_owned();
        if candidate.pop().is_none() {
            return;
        }
        self.apply_score_text(&candidate);
    }

    fn apply_score_text(&mut self, text: &str) {
        match ScoreInput::parse(text) {
            Ok(score) if score.is_unset() => self.reduce_selection(SelectionAction::ClearScore),
            Ok(score) => self.reduce_selection(SelectionAction::EnterScore(score)),
            Err(error) => self.status = Some(error.to_string()),
        }
    }
}
