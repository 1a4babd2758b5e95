//! Three-tier admission classification and its secondary metrics.

use crate::records::ExamResult;

/// Margin added to the average when scaling the progress indicator.
pub const PROGRESS_MARGIN: f64 = 10.0;

/// Upper bound of every score scale in the dashboard.
pub const MAX_SCORE: f64 = 100.0;

/// Where a score sits relative to a result's cutoff and average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// At or above the admitted average.
    Safe,
    /// At or above the cutoff but below the average.
    Moderate,
    /// Below the cutoff.
    Risky,
}

impl Classification {
    /// Short badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Moderate => "MODERATE",
            Self::Risky => "RISKY",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies `score` against a result's cutoff and average.
///
/// Absent cutoff or average values count as 0.
///
/// # Examples
///
/// ```
/// use cutline::analysis::{Classification, classify};
///
/// assert_eq!(classify(70.0, Some(60.0), Some(75.0)), Classification::Moderate);
/// assert_eq!(classify(70.0, Some(80.0), Some(90.0)), Classification::Risky);
/// assert_eq!(classify(0.0, None, None), Classification::Safe);
/// ```
#[must_use]
pub fn classify(score: f64, cutoff: Option<f64>, average: Option<f64>) -> Classification {
    if score >= average.unwrap_or(0.0) {
        Classification::Safe
    } else if score >= cutoff.unwrap_or(0.0) {
        Classification::Moderate
    } else {
        Classification::Risky
    }
}

/// Signed distance from the cutoff.
#[must_use]
pub fn cutoff_difference(score: f64, cutoff: Option<f64>) -> f64 {
    score - cutoff.unwrap_or(0.0)
}

/// Formats a difference to one decimal place with an explicit `+` when the
/// rounded value is positive.
///
/// A value that rounds to zero renders as `0.0` regardless of sign.
#[must_use]
pub fn format_difference(difference: f64) -> String {
    let rounded = format!("{difference:.1}");
    match rounded.parse::<f64>() {
        Ok(value) if value > 0.0 => format!("+{rounded}"),
        Ok(value) if value == 0.0 => "0.0".to_owned(),
        _ => rounded,
    }
}

/// Share of the progress bar to fill: `score / (average + 10)`, capped to
/// `0.0..=1.0`.
#[must_use]
pub fn progress_ratio(score: f64, average: Option<f64>) -> f64 {
    let ratio = score / (average.unwrap_or(0.0) + PROGRESS_MARGIN);
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Classification plus the secondary metrics shown beside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreAnalysis {
    /// Tier for the score.
    pub classification: Classification,
    /// Score minus cutoff.
    pub difference: f64,
    /// Fill proportion for the progress indicator.
    pub progress: f64,
}

impl ScoreAnalysis {
    /// Analyses `score` against a single exam result.
    #[must_use]
    pub fn for_result(result: &ExamResult, score: f64) -> Self {
        Self {
            classification: classify(score, result.cut_score, result.avg_score),
            difference: cutoff_difference(score, result.cut_score),
            progress: progress_ratio(score, result.avg_score),
        }
    }

    /// Difference formatted for display.
    #[must_use]
    pub fn difference_label(&self) -> String {
        format_difference(self.difference)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::above_average(90.0, Some(60.0), Some(75.0), Classification::Safe)]
    #[case::equal_average(75.0, Some(60.0), Some(75.0), Classification::Safe)]
    #[case::between(70.0, Some(60.0), Some(75.0), Classification::Moderate)]
    #[case::equal_cutoff(60.0, Some(60.0), Some(75.0), Classification::Moderate)]
    #[case::below_cutoff(59.9, Some(60.0), Some(75.0), Classification::Risky)]
    #[case::absent_values(0.0, None, None, Classification::Safe)]
    #[case::absent_average_only(50.0, Some(60.0), None, Classification::Safe)]
    fn classify_tiers(
        #[case] score: f64,
        #[case] cutoff: Option<f64>,
        #[case] average: Option<f64>,
        #[case] expected: Classification,
    ) {
        assert_eq!(classify(score, cutoff, average), expected);
    }

    #[rstest]
    fn classify_two_departments_at_seventy() {
        let department_a = ExamResult {
            department: "A".to_owned(),
            cut_score: Some(60.0),
            avg_score: Some(75.0),
            ..ExamResult::default()
        };
        let department_b = ExamResult {
            department: "B".to_owned(),
            cut_score: Some(80.0),
            avg_score: Some(90.0),
            ..ExamResult::default()
        };

        let tiers: Vec<Classification> = [department_a, department_b]
            .iter()
            .map(|result| ScoreAnalysis::for_result(result, 70.0).classification)
            .collect();

        assert_eq!(tiers, vec![Classification::Moderate, Classification::Risky]);
    }

    #[rstest]
    #[case::positive(10.0, "+10.0")]
    #[case::fraction(2.46, "+2.5")]
    #[case::negative(-3.26, "-3.3")]
    #[case::zero(0.0, "0.0")]
    #[case::rounds_to_zero(-0.04, "0.0")]
    #[case::tiny_positive(0.04, "0.0")]
    fn format_difference_signs_positive_values(#[case] difference: f64, #[case] expected: &str) {
        assert_eq!(format_difference(difference), expected);
    }

    #[rstest]
    #[case::half(42.5, Some(75.0), 0.5)]
    #[case::capped(95.0, Some(75.0), 1.0)]
    #[case::zero_average(5.0, Some(0.0), 0.5)]
    #[case::absent_average(20.0, None, 1.0)]
    #[case::negative_score(-5.0, Some(75.0), 0.0)]
    fn progress_ratio_is_capped(
        #[case] score: f64,
        #[case] average: Option<f64>,
        #[case] expected: f64,
    ) {
        let ratio = progress_ratio(score, average);
        assert!((ratio - expected).abs() < 1e-9, "got {ratio}");
    }

    #[rstest]
    fn analysis_formats_difference() {
        let result = ExamResult {
            cut_score: Some(78.0),
            avg_score: Some(82.5),
            ..ExamResult::default()
        };

        let analysis = ScoreAnalysis::for_result(&result, 80.0);
        assert_eq!(analysis.classification, Classification::Moderate);
        assert_eq!(analysis.difference_label(), "+2.0");
    }
}
