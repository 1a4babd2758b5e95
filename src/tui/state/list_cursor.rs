//! Cursor and scroll state for list and grid views.
//!
//! The cursor is retained across data changes and clamped to the valid range
//! whenever the list length changes.

/// Cursor position and scroll offset within a list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Current cursor position (0-indexed).
    pub position: usize,
    /// Index of the first visible item.
    pub scroll_offset: usize,
}

impl ListCursor {
    /// Creates a cursor at the top of the list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: 0,
            scroll_offset: 0,
        }
    }

    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the list is empty, cursor is set to 0. If cursor exceeds the list
    /// length, it is set to the last valid index.
    pub const fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.position = 0;
            self.scroll_offset = 0;
        } else if self.position >= count {
            self.position = count.saturating_sub(1);
        }
    }

    /// Moves the cursor back by `step`, stopping at the first item.
    pub const fn move_up(&mut self, step: usize) {
        self.position = self.position.saturating_sub(step);
    }

    /// Moves the cursor forward by `step`, stopping at the last item.
    pub fn move_down(&mut self, step: usize, count: usize) {
        let max_index = count.saturating_sub(1);
        self.position = self.position.saturating_add(step).min(max_index);
    }

    /// Resets to the top of the list.
    pub const fn reset(&mut self) {
        self.position = 0;
        self.scroll_offset = 0;
    }

    /// Adjusts the scroll offset so the cursor stays within `visible_height`
    /// rows.
    pub const fn ensure_visible(&mut self, visible_height: usize) {
        if self.position < self.scroll_offset {
            self.scroll_offset = self.position;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if self.position >= viewport_end {
            self.scroll_offset = self
                .position
                .saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
