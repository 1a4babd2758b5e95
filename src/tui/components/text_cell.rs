//! Fixed-width text cells and bars for table and chart rendering.
//!
//! Widths are measured in terminal columns, not Unicode scalar count, so
//! Hangul university and department names line up with ASCII columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const FILLED_CELL: char = '█';
const EMPTY_CELL: char = '░';

/// Truncates text to the provided display width and appends an ellipsis.
pub(crate) fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut current_width = 0;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        truncated.push(ch);
        current_width += char_width;
    }
    format!("{truncated}...")
}

/// Pads or truncates text so it occupies exactly `width` columns.
pub(crate) fn fit(text: &str, width: usize) -> String {
    let mut cell = truncate_with_ellipsis(text, width);
    let padding = width.saturating_sub(cell.width());
    cell.extend(std::iter::repeat_n(' ', padding));
    cell
}

/// Right-aligns text within `width` columns, truncating when too long.
pub(crate) fn fit_right(text: &str, width: usize) -> String {
    let cell = truncate_with_ellipsis(text, width);
    let padding = width.saturating_sub(cell.width());
    format!("{}{cell}", " ".repeat(padding))
}

/// Number of filled cells for `ratio` across `cells`, rounded to nearest.
pub(crate) fn filled_cells(ratio: f64, cells: u16) -> usize {
    let scaled = ratio.clamp(0.0, 1.0) * f64::from(cells);
    (0..cells)
        .filter(|cell| f64::from(*cell) + 0.5 < scaled)
        .count()
}

/// Horizontal bar with `cells` columns, filled in proportion to `ratio`.
pub(crate) fn bar(ratio: f64, cells: u16) -> String {
    let filled = filled_cells(ratio, cells);
    let empty = usize::from(cells).saturating_sub(filled);
    let mut rendered = String::with_capacity(usize::from(cells) * 3);
    rendered.extend(std::iter::repeat_n(FILLED_CELL, filled));
    rendered.extend(std::iter::repeat_n(EMPTY_CELL, empty));
    rendered
}
