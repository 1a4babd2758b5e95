//! State management for the dashboard TUI.
//!
//! This module provides the cursor, detail-screen and comment form state
//! types. Selection state (university, time slot, score) lives in
//! [`crate::dashboard`] so the plain CLI can share it.

mod comment_form;
mod detail;
mod list_cursor;

pub use comment_form::{CommentForm, MAX_FIELD_CHARS};
pub use detail::{DetailState, DetailTab};
pub use list_cursor::ListCursor;
