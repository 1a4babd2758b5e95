//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The mapping depends on which screen is
//! active and whether the comment form has focus.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

const SLIDER_STEP: i8 = 1;
const SLIDER_JUMP: i8 = 5;

/// Which key bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// University picker.
    Picker,
    /// Results table with time-slot tabs and score entry.
    Results,
    /// Detail screen outside the comment form.
    Detail,
    /// Comment form has focus; printable keys edit text.
    Compose,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.key == KeyCode::Char('c') {
        return Some(AppMsg::Quit);
    }

    match context {
        InputContext::Compose => map_compose_key(key.key),
        InputContext::Picker => map_global_key(key.key).or_else(|| map_picker_key(key.key)),
        InputContext::Results => map_global_key(key.key).or_else(|| map_results_key(key.key)),
        InputContext::Detail => map_global_key(key.key).or_else(|| map_detail_key(key.key)),
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_global_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Esc => Some(AppMsg::Back),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_picker_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::CursorUp),
        KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::RowUp),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::RowDown),
        KeyCode::Enter => Some(AppMsg::Select),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_results_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::NextTimeSlot),
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::PreviousTimeSlot),
        KeyCode::Char(digit @ ('0'..='9' | '.')) => Some(AppMsg::ScoreChar(digit)),
        KeyCode::Backspace => Some(AppMsg::ScoreBackspace),
        KeyCode::Enter => Some(AppMsg::Select),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_detail_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Tab | KeyCode::BackTab => Some(AppMsg::ToggleDetailTab),
        KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::AdjustSlider(-SLIDER_STEP)),
        KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::AdjustSlider(SLIDER_STEP)),
        KeyCode::Char('H') => Some(AppMsg::AdjustSlider(-SLIDER_JUMP)),
        KeyCode::Char('L') => Some(AppMsg::AdjustSlider(SLIDER_JUMP)),
        KeyCode::Char('i') => Some(AppMsg::StartCompose),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_compose_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Esc => Some(AppMsg::StopCompose),
        KeyCode::Enter => Some(AppMsg::SubmitComment),
        KeyCode::Tab => Some(AppMsg::ComposeNextField),
        KeyCode::Backspace => Some(AppMsg::ComposeBackspace),
        KeyCode::Char(character) => Some(AppMsg::ComposeChar(character)),
        _ => None,
    }
}
