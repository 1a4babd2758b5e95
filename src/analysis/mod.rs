//! Score analysis against published admission results.
//!
//! Everything here is pure: a score and a result's cutoff and average go in,
//! a tier, a signed difference and a progress proportion come out.

mod classification;
mod verdict;

pub use classification::{
    Classification, MAX_SCORE, PROGRESS_MARGIN, ScoreAnalysis, classify, cutoff_difference,
    format_difference, progress_ratio,
};
pub use verdict::{DEFAULT_SLIDER_SCORE, Verdict, slider_default};
