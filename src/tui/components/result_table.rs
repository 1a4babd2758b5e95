//! Results screen body: time-slot tabs, score entry and the result table.
//!
//! The analysis column shows an "awaiting score" badge until a score is
//! entered, then the classification badge, the signed cutoff difference and
//! a ten-cell progress bar toward the average plus margin.

use crate::analysis::ScoreAnalysis;
use crate::dashboard::{ScoreInput, TimeSlotFilter};
use crate::records::ExamResult;

use super::text_cell::{bar, fit, fit_right};

/// Cells in the analysis progress bar.
pub const PROGRESS_CELLS: u16 = 10;

const AWAITING_BADGE: &str = "awaiting score";

const SLOT_WIDTH: usize = 8;
const DEPARTMENT_WIDTH: usize = 22;
const RANK_WIDTH: usize = 6;
const RATE_WIDTH: usize = 7;
const SCORE_WIDTH: usize = 7;

/// Context for rendering the results table.
#[derive(Debug, Clone, Copy)]
pub struct ResultTableViewContext<'a> {
    /// Rows visible under the active time-slot filter.
    pub results: &'a [ExamResult],
    /// Tabs to offer, `All` first.
    pub tabs: &'a [TimeSlotFilter],
    /// Active tab.
    pub active_tab: &'a TimeSlotFilter,
    /// Score as typed.
    pub score: &'a ScoreInput,
    /// Whether score entry is currently accepted.
    pub score_enabled: bool,
    /// Whether the results are still loading.
    pub loading: bool,
    /// Row under the cursor.
    pub cursor_position: usize,
    /// First visible row.
    pub scroll_offset: usize,
    /// Number of table rows that fit on screen.
    pub visible_height: usize,
}

/// Component for the results screen body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultTableComponent;

impl ResultTableComponent {
    /// Renders tabs, score line and table as a string.
    #[must_use]
    pub fn view(ctx: &ResultTableViewContext<'_>) -> String {
        let mut output = String::new();
        output.push_str(&render_tabs(ctx.tabs, ctx.active_tab));
        output.push('\n');
        output.push_str(&render_score_line(ctx.score, ctx.score_enabled));
        output.push_str("\n\n");

        if ctx.loading {
            output.push_str("  Loading results...\n");
            return output;
        }
        if ctx.results.is_empty() {
            output.push_str("  No results for this time slot.\n");
            return output;
        }

        output.push_str(&render_column_header());
        output.push('\n');

        let score = ctx.score.value();
        for (index, result) in ctx
            .results
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(ctx.visible_height.max(1))
        {
            let prefix = if index == ctx.cursor_position { ">" } else { " " };
            output.push_str(&render_row(prefix, result, score));
            output.push('\n');
        }

        output
    }
}

fn render_tabs(tabs: &[TimeSlotFilter], active: &TimeSlotFilter) -> String {
    let labels: Vec<String> = tabs
        .iter()
        .map(|tab| {
            if tab == active {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect();
    format!("  {}", labels.join(" "))
}

fn render_score_line(score: &ScoreInput, enabled: bool) -> String {
    if !enabled {
        return "  Score: choose a time slot to enter a score".to_owned();
    }
    format!("  Score: {score}_")
}

fn render_column_header() -> String {
    format!(
        "  {}{}{}{}{}{}  analysis",
        fit("slot", SLOT_WIDTH),
        fit("department", DEPARTMENT_WIDTH),
        fit_right("rank", RANK_WIDTH),
        fit_right("rate", RATE_WIDTH),
        fit_right("avg", SCORE_WIDTH),
        fit_right("cutoff", SCORE_WIDTH),
    )
}

fn render_row(prefix: &str, result: &ExamResult, score: Option<f64>) -> String {
    format!(
        "{prefix} {}{}{}{}{}{}  {}",
        fit(result.exam_time_label(), SLOT_WIDTH),
        fit(&result.department, DEPARTMENT_WIDTH),
        fit_right(&result.reserve_rank_label(), RANK_WIDTH),
        fit_right(&result.competition_rate_label(), RATE_WIDTH),
        fit_right(&result.average_label(), SCORE_WIDTH),
        fit_right(&result.cutoff_label(), SCORE_WIDTH),
        render_analysis(result, score),
    )
}

/// Analysis column text for one row.
#[must_use]
pub fn render_analysis(result: &ExamResult, score: Option<f64>) -> String {
    score.map_or_else(
        || format!("[{AWAITING_BADGE}]"),
        |value| {
            let analysis = ScoreAnalysis::for_result(result, value);
            format!(
                "[{}] {:>6} {}",
                analysis.classification,
                analysis.difference_label(),
                bar(analysis.progress, PROGRESS_CELLS),
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn rows() -> Vec<ExamResult> {
        vec![
            ExamResult {
                id: 1,
                university: "Yonsei".to_owned(),
                department: "Economics".to_owned(),
                exam_time: Some("9:00".to_owned()),
                reserve_rank: Some(4),
                competition_rate: Some(32.5),
                avg_score: Some(80.0),
                cut_score: Some(75.0),
                ..ExamResult::default()
            },
            ExamResult {
                id: 2,
                university: "Yonsei".to_owned(),
                department: "Physics".to_owned(),
                exam_time: Some("13:00".to_owned()),
                avg_score: Some(90.0),
                cut_score: Some(85.0),
                ..ExamResult::default()
            },
        ]
    }

    fn render(rows: &[ExamResult], score: &ScoreInput, active: &TimeSlotFilter) -> String {
        let tabs = TimeSlotFilter::tabs(rows);
        ResultTableComponent::view(&ResultTableViewContext {
            results: rows,
            tabs: &tabs,
            active_tab: active,
            score,
            score_enabled: !matches!(active, TimeSlotFilter::All),
            loading: false,
            cursor_position: 0,
            scroll_offset: 0,
            visible_height: 10,
        })
    }

    #[rstest]
    fn unset_score_shows_awaiting_badge(rows: Vec<ExamResult>) {
        let output = render(&rows, &ScoreInput::unset(), &TimeSlotFilter::All);

        assert!(output.contains("[All]"));
        assert!(output.contains("[awaiting score]"));
        assert!(output.contains("choose a time slot"));
    }

    #[rstest]
    fn entered_score_shows_badge_difference_and_bar(rows: Vec<ExamResult>) {
        let score = ScoreInput::parse("78").unwrap_or_else(|_| ScoreInput::unset());
        let slot = TimeSlotFilter::Slot("9:00".to_owned());
        let first = rows.into_iter().take(1).collect::<Vec<_>>();

        let output = render(&first, &score, &slot);

        assert!(output.contains("[9:00]"));
        assert!(output.contains("Score: 78_"));
        assert!(output.contains("[MODERATE]   +3.0"));
        assert!(output.contains("█████████░"));
    }

    #[rstest]
    fn absent_values_render_as_dashes(rows: Vec<ExamResult>) {
        let output = render(&rows, &ScoreInput::unset(), &TimeSlotFilter::All);
        let physics = output
            .lines()
            .find(|line| line.contains("Physics"))
            .unwrap_or_default();

        assert!(physics.contains("     -"));
    }

    #[rstest]
    fn empty_filter_shows_empty_state() {
        let output = render(&[], &ScoreInput::unset(), &TimeSlotFilter::All);

        assert!(output.contains("No results for this time slot."));
    }
}
