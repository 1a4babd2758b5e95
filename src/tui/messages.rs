//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::dashboard::RequestId;
use crate::records::{Comment, CommentSubmitError, ExamResult};

/// Messages for the exam results dashboard.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move the cursor to the previous item.
    CursorUp,
    /// Move the cursor to the next item.
    CursorDown,
    /// Move the cursor one row up in a grid.
    RowUp,
    /// Move the cursor one row down in a grid.
    RowDown,
    /// Open the item under the cursor.
    Select,
    /// Return to the previous screen.
    Back,

    // Time-slot filter
    /// Select the next time-slot tab.
    NextTimeSlot,
    /// Select the previous time-slot tab.
    PreviousTimeSlot,

    // Score entry
    /// Append a character to the score.
    ScoreChar(char),
    /// Remove the last score character.
    ScoreBackspace,

    // Detail screen
    /// Switch between the analysis and discussion tabs.
    ToggleDetailTab,
    /// Move the score slider by the given number of points.
    AdjustSlider(i8),

    // Comment composition
    /// Start editing the comment form.
    StartCompose,
    /// Append a character to the focused form field.
    ComposeChar(char),
    /// Remove the last character of the focused form field.
    ComposeBackspace,
    /// Move focus to the next form field.
    ComposeNextField,
    /// Validate and post the comment.
    SubmitComment,
    /// Leave the comment form.
    StopCompose,

    // Data loading
    /// University names arrived.
    UniversitiesLoaded {
        /// Request the response belongs to.
        request: RequestId,
        /// Distinct university names.
        names: Vec<String>,
    },
    /// Results for a university arrived.
    ResultsLoaded {
        /// Request the response belongs to.
        request: RequestId,
        /// Rows for the university.
        results: Vec<ExamResult>,
    },
    /// A single result for the detail screen arrived.
    DetailLoaded {
        /// Request the response belongs to.
        request: RequestId,
        /// The row, if it exists.
        result: Option<ExamResult>,
    },
    /// Comments for the detail screen arrived.
    CommentsLoaded {
        /// Request the response belongs to.
        request: RequestId,
        /// Comments, newest first.
        comments: Vec<Comment>,
    },
    /// A comment submission finished.
    CommentPosted {
        /// Result the comment was posted under.
        exam_id: u64,
        /// Whether the record store saved it.
        outcome: Result<(), CommentSubmitError>,
    },

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for cursor and screen navigation messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::RowUp
                | Self::RowDown
                | Self::Select
                | Self::Back
        )
    }

    /// Returns true for time-slot filter and score messages.
    #[must_use]
    pub const fn is_selection(&self) -> bool {
        matches!(
            self,
            Self::NextTimeSlot | Self::PreviousTimeSlot | Self::ScoreChar(_) | Self::ScoreBackspace
        )
    }

    /// Returns true for detail-screen messages.
    #[must_use]
    pub const fn is_detail(&self) -> bool {
        matches!(self, Self::ToggleDetailTab | Self::AdjustSlider(_))
    }

    /// Returns true for comment form messages.
    #[must_use]
    pub const fn is_compose(&self) -> bool {
        matches!(
            self,
            Self::StartCompose
                | Self::ComposeChar(_)
                | Self::ComposeBackspace
                | Self::ComposeNextField
                | Self::SubmitComment
                | Self::StopCompose
        )
    }

    /// Returns true for async data results.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::UniversitiesLoaded { .. }
                | Self::ResultsLoaded { .. }
                | Self::DetailLoaded { .. }
                | Self::CommentsLoaded { .. }
                | Self::CommentPosted { .. }
        )
    }
}
