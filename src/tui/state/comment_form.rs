//! Editable comment form state for the discussion tab.
//!
//! The form wraps a [`CommentDraft`] with field focus, a composing flag and
//! the last alert shown to the user. Submission clears only the content
//! field so the nickname and password can be reused for the next comment.

use crate::records::{CommentDraft, DraftField};

/// Longest accepted value for any single form field, in characters.
pub const MAX_FIELD_CHARS: usize = 500;

/// Comment form on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentForm {
    draft: CommentDraft,
    focus: DraftField,
    composing: bool,
    submitting: bool,
    alert: Option<String>,
}

impl Default for CommentForm {
    fn default() -> Self {
        Self {
            draft: CommentDraft::default(),
            focus: DraftField::Nickname,
            composing: false,
            submitting: false,
            alert: None,
        }
    }
}

impl CommentForm {
    /// The draft as typed so far.
    #[must_use]
    pub const fn draft(&self) -> &CommentDraft {
        &self.draft
    }

    /// Field currently receiving keystrokes.
    #[must_use]
    pub const fn focus(&self) -> DraftField {
        self.focus
    }

    /// Whether the form has keyboard focus.
    #[must_use]
    pub const fn is_composing(&self) -> bool {
        self.composing
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Message from the last failed submission, if any.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Gives the form keyboard focus.
    pub fn start(&mut self) {
        self.composing = true;
        self.alert = None;
    }

    /// Releases keyboard focus, keeping the typed text.
    pub const fn stop(&mut self) {
        self.composing = false;
    }

    /// Appends a character to the focused field, ignoring control characters
    /// and input beyond [`MAX_FIELD_CHARS`].
    pub fn push_char(&mut self, character: char) {
        if character.is_control() {
            return;
        }
        let field = self.draft.field_mut(self.focus);
        if field.chars().count() < MAX_FIELD_CHARS {
            field.push(character);
        }
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        let _removed = self.draft.field_mut(self.focus).pop();
    }

    /// Moves focus to the next field.
    pub const fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Marks a submission as in flight.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.alert = None;
    }

    /// Records a rejected submission, keeping every field.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.alert = Some(message.into());
    }

    /// Records an accepted submission: clears the content field only.
    pub fn accept(&mut self) {
        self.submitting = false;
        self.alert = None;
        self.draft.content.clear();
        self.focus = DraftField::Content;
    }

    /// Field value for display, with the password masked.
    #[must_use]
    pub fn display_value(&self, field: DraftField) -> String {
        let value = self.draft.field(field);
        match field {
            DraftField::Password => "*".repeat(value.chars().count()),
            DraftField::Nickname | DraftField::Content => value.clone(),
        }
    }
}
