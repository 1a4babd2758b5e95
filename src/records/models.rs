//! Data models for exam results and their discussion comments.
//!
//! Types prefixed with `Api` are deserialisation targets for record store
//! rows and convert into the public domain types. Optional numeric columns
//! stay optional in the domain; accessors apply the default-on-absence policy
//! (0 for score fields, a dash for display).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::error::{CommentValidationError, DraftField};

/// Placeholder shown for absent numeric fields.
pub const MISSING_VALUE: &str = "-";

/// One department's admission result for an exam sitting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExamResult {
    /// Row identifier.
    pub id: u64,
    /// University name.
    pub university: String,
    /// Department (recruitment unit) name.
    pub department: String,
    /// Academic year of the admission cycle.
    pub year: i32,
    /// Exam time-slot label, if recorded.
    pub exam_time: Option<String>,
    /// Reserve-list (waitlist) rank.
    pub reserve_rank: Option<u32>,
    /// Applicants per admitted seat.
    pub competition_rate: Option<f64>,
    /// Mean admitted score.
    pub avg_score: Option<f64>,
    /// Lowest admitted score.
    pub cut_score: Option<f64>,
}

impl ExamResult {
    /// Average score with absence treated as 0.
    #[must_use]
    pub fn average_or_zero(&self) -> f64 {
        self.avg_score.unwrap_or(0.0)
    }

    /// Cutoff score with absence treated as 0.
    #[must_use]
    pub fn cutoff_or_zero(&self) -> f64 {
        self.cut_score.unwrap_or(0.0)
    }

    /// Time-slot label for display, or a dash.
    #[must_use]
    pub fn exam_time_label(&self) -> &str {
        self.exam_time
            .as_deref()
            .filter(|label| !label.is_empty())
            .unwrap_or(MISSING_VALUE)
    }

    /// Reserve rank for display, or a dash when absent or zero.
    #[must_use]
    pub fn reserve_rank_label(&self) -> String {
        self.reserve_rank
            .filter(|rank| *rank > 0)
            .map_or_else(|| MISSING_VALUE.to_owned(), |rank| rank.to_string())
    }

    /// Competition rate for display, or a dash.
    #[must_use]
    pub fn competition_rate_label(&self) -> String {
        display_number(self.competition_rate)
    }

    /// Average score for display, or a dash.
    #[must_use]
    pub fn average_label(&self) -> String {
        display_number(self.avg_score)
    }

    /// Cutoff score for display, or a dash.
    #[must_use]
    pub fn cutoff_label(&self) -> String {
        display_number(self.cut_score)
    }
}

/// Formats an optional number, showing a dash for absent or zero values.
#[must_use]
pub fn display_number(value: Option<f64>) -> String {
    match value {
        Some(number) if number != 0.0 => format_number(number),
        _ => MISSING_VALUE.to_owned(),
    }
}

/// Formats a number without a trailing `.0` for whole values.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// A discussion comment attached to an exam result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment identifier.
    pub id: u64,
    /// Exam result the comment belongs to.
    pub exam_id: u64,
    /// Author nickname.
    pub nickname: String,
    /// Comment body.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Short `M/D HH:MM` timestamp used in the discussion list.
    #[must_use]
    pub fn short_timestamp(&self) -> String {
        self.created_at.format("%-m/%-d %H:%M").to_string()
    }
}

/// Deletion password captured with a comment.
///
/// The value is sent to the store as provided. `Debug` never prints it.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommentPassword(String);

impl CommentPassword {
    /// Borrow the raw password.
    #[must_use]
    pub const fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for CommentPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CommentPassword(<redacted>)")
    }
}

/// Free-text comment form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    /// Author nickname.
    pub nickname: String,
    /// Deletion password.
    pub password: String,
    /// Comment body.
    pub content: String,
}

impl CommentDraft {
    /// Creates a draft from the three form fields.
    #[must_use]
    pub fn new(
        nickname: impl Into<String>,
        password: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            nickname: nickname.into(),
            password: password.into(),
            content: content.into(),
        }
    }

    /// Borrows the field named by `field`.
    #[must_use]
    pub const fn field(&self, field: DraftField) -> &String {
        match field {
            DraftField::Nickname => &self.nickname,
            DraftField::Password => &self.password,
            DraftField::Content => &self.content,
        }
    }

    /// Mutably borrows the field named by `field`.
    pub const fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Nickname => &mut self.nickname,
            DraftField::Password => &mut self.password,
            DraftField::Content => &mut self.content,
        }
    }

    /// Validates that every field is filled in.
    ///
    /// # Errors
    ///
    /// Returns [`CommentValidationError::MissingField`] naming the first blank
    /// field in form order.
    pub fn validate(&self, exam_id: u64) -> Result<NewComment, CommentValidationError> {
        for field in [DraftField::Nickname, DraftField::Password, DraftField::Content] {
            if self.field(field).trim().is_empty() {
                return Err(CommentValidationError::MissingField { field });
            }
        }

        Ok(NewComment {
            exam_id,
            nickname: self.nickname.clone(),
            password: CommentPassword(self.password.clone()),
            content: self.content.clone(),
        })
    }
}

/// Validated insert payload for the comments table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    /// Exam result the comment belongs to.
    pub exam_id: u64,
    /// Author nickname.
    pub nickname: String,
    /// Deletion password.
    pub password: CommentPassword,
    /// Comment body.
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiExamResult {
    pub(crate) id: u64,
    #[serde(default)]
    pub(crate) university: Option<String>,
    #[serde(default)]
    pub(crate) department: Option<String>,
    #[serde(default)]
    pub(crate) year: Option<i32>,
    #[serde(default)]
    pub(crate) exam_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub(crate) reserve_rank: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub(crate) competition_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub(crate) avg_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub(crate) cut_score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUniversity {
    #[serde(default)]
    pub(crate) university: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiComment {
    pub(crate) id: u64,
    pub(crate) exam_id: u64,
    #[serde(default)]
    pub(crate) nickname: Option<String>,
    #[serde(default)]
    pub(crate) content: Option<String>,
    pub(crate) created_at: DateTime<Utc>,
}

impl From<ApiExamResult> for ExamResult {
    fn from(value: ApiExamResult) -> Self {
        Self {
            id: value.id,
            university: value.university.unwrap_or_default(),
            department: value.department.unwrap_or_default(),
            year: value.year.unwrap_or_default(),
            exam_time: value.exam_time,
            reserve_rank: value.reserve_rank.and_then(rank_from_number),
            competition_rate: value.competition_rate,
            avg_score: value.avg_score,
            cut_score: value.cut_score,
        }
    }
}

impl From<ApiComment> for Comment {
    fn from(value: ApiComment) -> Self {
        Self {
            id: value.id,
            exam_id: value.exam_id,
            nickname: value.nickname.unwrap_or_default(),
            content: value.content.unwrap_or_default(),
            created_at: value.created_at,
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "ranks are small non-negative integers checked before the cast"
)]
fn rank_from_number(value: f64) -> Option<u32> {
    (value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX)).then(|| value as u32)
}

/// Accepts numeric columns serialised either as JSON numbers or as strings.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrText::Number(number)) => Some(number),
        Some(NumberOrText::Text(text)) => text.trim().parse::<f64>().ok(),
        None => None,
    })
}
