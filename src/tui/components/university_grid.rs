//! University picker grid.
//!
//! Renders universities as fixed-width cards laid out in rows. Each card
//! carries a marker showing whether a local logo file exists; the selected
//! card's logo reference is shown beneath the grid.

use crate::assets::{Logo, LogoResolver};

use super::text_cell::fit;

/// Display width of one card, including the gap to its neighbour.
pub const CARD_WIDTH: usize = 24;

const LOGO_FILE_MARKER: &str = "[#]";
const LOGO_PLACEHOLDER_MARKER: &str = "[ ]";

/// Context for rendering the picker grid.
#[derive(Debug, Clone, Copy)]
pub struct UniversityGridViewContext<'a> {
    /// University names in display order.
    pub names: &'a [String],
    /// Resolver used for logo markers.
    pub logos: &'a LogoResolver,
    /// Index of the selected card.
    pub cursor_position: usize,
    /// Whether the university list is still loading.
    pub loading: bool,
    /// Available width in columns.
    pub width: usize,
    /// Available height in rows for the grid body.
    pub visible_rows: usize,
}

/// Number of cards that fit on one row of `width` columns.
#[must_use]
pub fn grid_columns(width: usize) -> usize {
    width.checked_div(CARD_WIDTH).unwrap_or(1).max(1)
}

/// Component for the university picker.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniversityGridComponent;

impl UniversityGridComponent {
    /// Renders the grid as a string.
    #[must_use]
    pub fn view(ctx: &UniversityGridViewContext<'_>) -> String {
        if ctx.loading {
            return "  Loading universities...\n".to_owned();
        }
        if ctx.names.is_empty() {
            return "  No universities\n".to_owned();
        }

        let columns = grid_columns(ctx.width);
        let cursor_row = ctx.cursor_position.checked_div(columns).unwrap_or(0);
        let first_row = cursor_row.saturating_sub(ctx.visible_rows.saturating_sub(1));

        let mut output = String::new();
        for (row_index, row) in ctx.names.chunks(columns).enumerate().skip(first_row) {
            if row_index >= first_row.saturating_add(ctx.visible_rows.max(1)) {
                break;
            }
            let line: String = row
                .iter()
                .enumerate()
                .map(|(column, name)| {
                    let index = row_index * columns + column;
                    Self::card(ctx, name, index == ctx.cursor_position)
                })
                .collect();
            output.push_str(line.trim_end());
            output.push('\n');
        }

        if let Some(selected) = ctx.names.get(ctx.cursor_position) {
            let logo = ctx.logos.resolve(selected);
            output.push('\n');
            output.push_str(&format!("  logo: {}\n", logo.reference()));
        }

        output
    }

    fn card(ctx: &UniversityGridViewContext<'_>, name: &str, selected: bool) -> String {
        let marker = match ctx.logos.resolve(name) {
            Logo::File(_) => LOGO_FILE_MARKER,
            Logo::Placeholder(_) => LOGO_PLACEHOLDER_MARKER,
        };
        let prefix = if selected { ">" } else { " " };
        fit(
            &format!("{prefix} {marker} {name}"),
            CARD_WIDTH.saturating_sub(1),
        ) + " "
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn logos() -> LogoResolver {
        LogoResolver::new("/nonexistent/logos")
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[rstest]
    #[case::narrow(10, 1)]
    #[case::exact(48, 2)]
    #[case::wide(100, 4)]
    fn columns_follow_width(#[case] width: usize, #[case] expected: usize) {
        assert_eq!(grid_columns(width), expected);
    }

    #[rstest]
    fn shows_loading_indicator(logos: LogoResolver) {
        let ctx = UniversityGridViewContext {
            names: &[],
            logos: &logos,
            cursor_position: 0,
            loading: true,
            width: 80,
            visible_rows: 10,
        };

        assert!(UniversityGridComponent::view(&ctx).contains("Loading"));
    }

    #[rstest]
    fn shows_empty_state(logos: LogoResolver) {
        let ctx = UniversityGridViewContext {
            names: &[],
            logos: &logos,
            cursor_position: 0,
            loading: false,
            width: 80,
            visible_rows: 10,
        };

        assert!(UniversityGridComponent::view(&ctx).contains("No universities"));
    }

    #[rstest]
    fn lays_out_cards_in_rows_and_marks_selection(logos: LogoResolver) {
        let list = names(&["Yonsei", "Korea", "Sogang"]);
        let ctx = UniversityGridViewContext {
            names: &list,
            logos: &logos,
            cursor_position: 2,
            loading: false,
            width: 48,
            visible_rows: 10,
        };

        let output = UniversityGridComponent::view(&ctx);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines.first().is_some_and(|line| line.contains("Yonsei")));
        assert!(lines.first().is_some_and(|line| line.contains("Korea")));
        assert!(lines.get(1).is_some_and(|line| line.contains("> [ ] Sogang")));
        assert!(output.contains("logo: https://"));
    }
}
