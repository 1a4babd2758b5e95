//! Headline text for the detail screen and the slider's starting point.

use super::classification::{Classification, MAX_SCORE};

/// Slider position used when a result has no usable cutoff.
pub const DEFAULT_SLIDER_SCORE: f64 = 70.0;

/// Detail-screen verdict for a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// One-line headline.
    pub headline: &'static str,
    /// Supporting explanation.
    pub explanation: &'static str,
}

impl Verdict {
    /// Returns the verdict text for `classification`.
    #[must_use]
    pub const fn for_classification(classification: Classification) -> Self {
        match classification {
            Classification::Safe => Self {
                headline: "Safe: you are in range",
                explanation: "Your score is at or above the admitted average.",
            },
            Classification::Moderate => Self {
                headline: "Moderate: worth applying",
                explanation: "You clear the cutoff but sit below the admitted average.",
            },
            Classification::Risky => Self {
                headline: "Risky",
                explanation: "Your score falls short of last year's cutoff.",
            },
        }
    }
}

/// Starting slider value: the cutoff when present and non-zero, else 70.
#[must_use]
pub fn slider_default(cutoff: Option<f64>) -> f64 {
    cutoff
        .filter(|value| *value != 0.0 && value.is_finite())
        .map_or(DEFAULT_SLIDER_SCORE, |value| value.clamp(0.0, MAX_SCORE))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::present(Some(78.5), 78.5)]
    #[case::absent(None, DEFAULT_SLIDER_SCORE)]
    #[case::zero(Some(0.0), DEFAULT_SLIDER_SCORE)]
    #[case::above_scale(Some(130.0), MAX_SCORE)]
    fn slider_default_prefers_cutoff(#[case] cutoff: Option<f64>, #[case] expected: f64) {
        assert!((slider_default(cutoff) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn verdicts_differ_per_tier() {
        let headlines = [
            Classification::Safe,
            Classification::Moderate,
            Classification::Risky,
        ]
        .map(|tier| Verdict::for_classification(tier).headline);

        assert_eq!(
            headlines,
            [
                "Safe: you are in range",
                "Moderate: worth applying",
                "Risky"
            ]
        );
    }
}
