//! Selection state for the dashboard and the time-slot filter it applies.
//!
//! The state is a plain value updated by [`SelectionState::reduce`]; nothing
//! here performs I/O. Score entry is only accepted while a specific time slot
//! is selected, and switching back to [`TimeSlotFilter::All`] clears it.

use std::collections::HashSet;

use crate::records::ExamResult;

use super::score::ScoreInput;

/// Label accepted on the command line for the unfiltered view.
pub const ALL_SLOTS_LABEL: &str = "ALL";

/// Which exam time slot the results list is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TimeSlotFilter {
    /// Show every result.
    #[default]
    All,
    /// Show only results for the given slot label.
    Slot(String),
}

impl TimeSlotFilter {
    /// Interprets a user-supplied label; blank or `ALL` means no filter.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_SLOTS_LABEL) {
            Self::All
        } else {
            Self::Slot(trimmed.to_owned())
        }
    }

    /// Returns a human-readable label for display in the UI.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Slot(slot) => slot,
        }
    }

    /// Returns true if this filter keeps `result`.
    #[must_use]
    pub fn matches(&self, result: &ExamResult) -> bool {
        match self {
            Self::All => true,
            Self::Slot(slot) => result.exam_time.as_deref() == Some(slot.as_str()),
        }
    }

    /// Returns `All` followed by one filter per distinct slot in `results`.
    #[must_use]
    pub fn tabs(results: &[ExamResult]) -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(distinct_time_slots(results).into_iter().map(Self::Slot))
            .collect()
    }
}

/// Keeps the results matching `filter`, preserving order.
#[must_use]
pub fn filter_results(results: &[ExamResult], filter: &TimeSlotFilter) -> Vec<ExamResult> {
    results
        .iter()
        .filter(|result| filter.matches(result))
        .cloned()
        .collect()
}

/// Non-empty slot labels in first-seen order.
#[must_use]
pub fn distinct_time_slots(results: &[ExamResult]) -> Vec<String> {
    let mut seen = HashSet::new();
    results
        .iter()
        .filter_map(|result| result.exam_time.as_deref())
        .filter(|slot| !slot.trim().is_empty())
        .filter(|slot| seen.insert(*slot))
        .map(ToOwned::to_owned)
        .collect()
}

/// Transitions applied to [`SelectionState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Choose a university; resets the filter and clears the score.
    SelectUniversity(String),
    /// Return to the university picker.
    ClearUniversity,
    /// Change the time-slot filter.
    SelectTimeSlot(TimeSlotFilter),
    /// Store a parsed score.
    EnterScore(ScoreInput),
    /// Forget the entered score.
    ClearScore,
}

/// The user's current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    university: Option<String>,
    time_slot: TimeSlotFilter,
    score: ScoreInput,
}

impl SelectionState {
    /// Applies `action` and returns the next state.
    ///
    /// # Examples
    ///
    /// ```
    /// use cutline::dashboard::{ScoreInput, SelectionAction, SelectionState, TimeSlotFilter};
    ///
    /// let state = SelectionState::default()
    ///     .reduce(SelectionAction::SelectUniversity("Yonsei".to_owned()))
    ///     .reduce(SelectionAction::SelectTimeSlot(TimeSlotFilter::Slot("9:00".to_owned())))
    ///     .reduce(SelectionAction::EnterScore(ScoreInput::parse("150").expect("valid")));
    ///
    /// assert_eq!(state.score().as_str(), "100");
    /// ```
    #[must_use]
    pub fn reduce(self, action: SelectionAction) -> Self {
        match action {
            SelectionAction::SelectUniversity(name) => {
                if self.university.as_deref() == Some(name.as_str()) {
                    self
                } else {
                    Self {
                        university: Some(name),
                        ..Self::default()
                    }
                }
            }
            SelectionAction::ClearUniversity => Self::default(),
            SelectionAction::SelectTimeSlot(TimeSlotFilter::All) => Self {
                time_slot: TimeSlotFilter::All,
                score: ScoreInput::unset(),
                ..self
            },
            SelectionAction::SelectTimeSlot(filter) => Self {
                time_slot: filter,
                ..self
            },
            SelectionAction::EnterScore(score) if self.score_enabled() => Self { score, ..self },
            SelectionAction::EnterScore(_) => self,
            SelectionAction::ClearScore => Self {
                score: ScoreInput::unset(),
                ..self
            },
        }
    }

    /// Selected university, if any.
    #[must_use]
    pub fn university(&self) -> Option<&str> {
        self.university.as_deref()
    }

    /// Active time-slot filter.
    #[must_use]
    pub const fn time_slot(&self) -> &TimeSlotFilter {
        &self.time_slot
    }

    /// Entered score text.
    #[must_use]
    pub const fn score(&self) -> &ScoreInput {
        &self.score
    }

    /// Entered score as a number, or `None` when unset.
    #[must_use]
    pub fn score_value(&self) -> Option<f64> {
        self.score.value()
    }

    /// Score entry is accepted only while a specific slot is selected.
    #[must_use]
    pub const fn score_enabled(&self) -> bool {
        matches!(self.time_slot, TimeSlotFilter::Slot(_))
    }

    /// Results visible under the active filter.
    #[must_use]
    pub fn visible_results(&self, results: &[ExamResult]) -> Vec<ExamResult> {
        filter_results(results, &self.time_slot)
    }
}
