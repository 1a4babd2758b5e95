//! State for the result detail screen.

use crate::analysis::{MAX_SCORE, slider_default};
use crate::records::{Comment, ExamResult};

use super::comment_form::CommentForm;

/// Tabs on the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    /// Slider, verdict and comparison chart.
    #[default]
    Analysis,
    /// Comment thread and form.
    Discussion,
}

impl DetailTab {
    /// The other tab.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Analysis => Self::Discussion,
            Self::Discussion => Self::Analysis,
        }
    }
}

/// Everything the detail screen shows for one result.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    /// Identifier of the result being shown.
    pub result_id: u64,
    /// The loaded row, once available.
    pub result: Option<ExamResult>,
    /// Whether the row is still loading.
    pub loading: bool,
    /// Active tab.
    pub tab: DetailTab,
    /// Slider position, 0 to 100.
    pub slider: f64,
    /// Comments, newest first.
    pub comments: Vec<Comment>,
    /// Comment form.
    pub form: CommentForm,
}

impl DetailState {
    /// Creates a loading state for `result_id`.
    #[must_use]
    pub fn loading(result_id: u64) -> Self {
        Self {
            result_id,
            result: None,
            loading: true,
            tab: DetailTab::Analysis,
            slider: slider_default(None),
            comments: Vec::new(),
            form: CommentForm::default(),
        }
    }

    /// Stores the loaded row and places the slider at its default.
    pub fn set_result(&mut self, result: Option<ExamResult>) {
        self.slider = slider_default(result.as_ref().and_then(|row| row.cut_score));
        self.result = result;
        self.loading = false;
    }

    /// Moves the slider by `delta` points, clamped to the score scale.
    pub fn adjust_slider(&mut self, delta: i8) {
        self.slider = (self.slider + f64::from(delta)).clamp(0.0, MAX_SCORE);
    }
}
