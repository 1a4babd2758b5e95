//! Analysis tab: slider, verdict and three-bar comparison chart.

use crate::analysis::{MAX_SCORE, ScoreAnalysis, Verdict};
use crate::records::{ExamResult, format_number};

use super::text_cell::{bar, fit};

const LABEL_WIDTH: usize = 10;
const MIN_BAR_CELLS: u16 = 10;
const MAX_BAR_CELLS: u16 = 50;

/// Context for rendering the analysis tab.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonChartViewContext<'a> {
    /// Result being analysed.
    pub result: &'a ExamResult,
    /// Slider score.
    pub score: f64,
    /// Available width in columns.
    pub width: usize,
}

/// Component for the analysis tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonChartComponent;

impl ComparisonChartComponent {
    /// Renders the slider line, verdict and chart.
    #[must_use]
    pub fn view(ctx: &ComparisonChartViewContext<'_>) -> String {
        let analysis = ScoreAnalysis::for_result(ctx.result, ctx.score);
        let verdict = Verdict::for_classification(analysis.classification);
        let cells = bar_cells(ctx.width);

        let mut output = String::new();
        output.push_str(&format!(
            "  My score: {}  (h/l ±1, H/L ±5)\n",
            format_number(ctx.score)
        ));
        output.push_str(&format!("  {}\n", bar(ctx.score / MAX_SCORE, cells)));
        output.push('\n');
        output.push_str(&format!(
            "  {}  ({} vs cutoff)\n",
            verdict.headline,
            analysis.difference_label()
        ));
        output.push_str(&format!("  {}\n", verdict.explanation));
        output.push('\n');

        for (label, value) in [
            ("cutoff", ctx.result.cutoff_or_zero()),
            ("average", ctx.result.average_or_zero()),
            ("my score", ctx.score),
        ] {
            output.push_str(&format!(
                "  {}{} {}\n",
                fit(label, LABEL_WIDTH),
                bar(value / MAX_SCORE, cells),
                format_number(value)
            ));
        }

        output
    }
}

/// Bar length for a chart drawn in `width` columns.
fn bar_cells(width: usize) -> u16 {
    let available = width.saturating_sub(LABEL_WIDTH + 10);
    u16::try_from(available)
        .unwrap_or(MAX_BAR_CELLS)
        .clamp(MIN_BAR_CELLS, MAX_BAR_CELLS)
}
