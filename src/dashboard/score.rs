//! Parsing and clamping of the user's self-reported score.

use thiserror::Error;

use crate::analysis::MAX_SCORE;

/// Why a score entry was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScoreInputError {
    /// The text is not a finite decimal number.
    #[error("score must be a number, got `{input}`")]
    NotANumber {
        /// Text as entered.
        input: String,
    },
    /// The number is below zero.
    #[error("score cannot be negative, got `{input}`")]
    Negative {
        /// Text as entered.
        input: String,
    },
}

/// Score text as stored in the selection state.
///
/// Empty text is the unset state, which is distinct from `"0"`. Values above
/// the scale maximum are stored as `"100"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreInput(String);

impl ScoreInput {
    /// The unset score.
    #[must_use]
    pub const fn unset() -> Self {
        Self(String::new())
    }

    /// Parses user text into a stored score.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreInputError::NotANumber`] for text that is not a plain
    /// decimal (signs, exponents and `inf` included) and
    /// [`ScoreInputError::Negative`] for any minus-signed number, `-0` too.
    ///
    /// # Examples
    ///
    /// ```
    /// use cutline::dashboard::ScoreInput;
    ///
    /// assert_eq!(ScoreInput::parse("150").expect("valid").as_str(), "100");
    /// assert_eq!(ScoreInput::parse("45").expect("valid").as_str(), "45");
    /// assert!(ScoreInput::parse("").expect("valid").is_unset());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ScoreInputError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::unset());
        }

        if let Some(magnitude) = trimmed.strip_prefix('-') {
            return Err(if is_plain_decimal(magnitude) {
                ScoreInputError::Negative {
                    input: text.to_owned(),
                }
            } else {
                ScoreInputError::NotANumber {
                    input: text.to_owned(),
                }
            });
        }

        let value = Some(trimmed)
            .filter(|candidate| is_plain_decimal(candidate))
            .and_then(|candidate| candidate.parse::<f64>().ok())
            .ok_or_else(|| ScoreInputError::NotANumber {
                input: text.to_owned(),
            })?;

        if value > MAX_SCORE {
            return Ok(Self("100".to_owned()));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns true when no score has been entered.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    /// Stored text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, or `None` when unset.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.0.parse().ok()
    }
}

/// Digits with at most one decimal point and at least one digit.
fn is_plain_decimal(text: &str) -> bool {
    let mut points = 0_usize;
    let mut digits = 0_usize;
    for character in text.chars() {
        match character {
            '0'..='9' => digits = digits.saturating_add(1),
            '.' => points = points.saturating_add(1),
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}

impl std::fmt::Display for ScoreInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::clamped("150", "100")]
    #[case::kept("45", "45")]
    #[case::zero("0", "0")]
    #[case::boundary("100", "100")]
    #[case::fractional("87.5", "87.5")]
    #[case::trailing_point("87.", "87.")]
    #[case::clamped_fraction("100.5", "100")]
    #[case::trimmed(" 62 ", "62")]
    fn parse_stores_clamped_text(#[case] input: &str, #[case] stored: &str) {
        let score = ScoreInput::parse(input).expect("input should parse");
        assert_eq!(score.as_str(), stored);
        assert!(!score.is_unset());
    }

    #[rstest]
    fn empty_input_is_unset_and_distinct_from_zero() {
        let empty = ScoreInput::parse("").expect("empty should parse");
        let zero = ScoreInput::parse("0").expect("zero should parse");

        assert!(empty.is_unset());
        assert_eq!(empty.value(), None);
        assert_ne!(empty, zero);
        assert_eq!(zero.value(), Some(0.0));
    }

    #[rstest]
    #[case::letters("abc")]
    #[case::lone_point(".")]
    #[case::infinity("inf")]
    #[case::not_a_number("NaN")]
    #[case::exponent("1e2")]
    #[case::explicit_plus("+5")]
    #[case::two_points("1.2.3")]
    fn parse_rejects_non_numbers(#[case] input: &str) {
        assert_eq!(
            ScoreInput::parse(input),
            Err(ScoreInputError::NotANumber {
                input: input.to_owned(),
            })
        );
    }

    #[rstest]
    #[case::whole("-3")]
    #[case::negative_zero("-0")]
    #[case::negative_zero_fraction("-0.0")]
    fn parse_rejects_negative_scores(#[case] input: &str) {
        assert_eq!(
            ScoreInput::parse(input),
            Err(ScoreInputError::Negative {
                input: input.to_owned(),
            })
        );
    }
}
