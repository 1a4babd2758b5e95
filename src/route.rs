//! Location strings that address dashboard screens.
//!
//! The dashboard understands three locations: `/` (university picker),
//! `/?university=<name>` (results for one university) and `/result/<id>`
//! (detail for one result). They can be passed on the command line to open
//! a screen directly and are shown in the status bar.

use thiserror::Error;
use url::Url;

const BASE: &str = "http://localhost/";
const UNIVERSITY_PARAM: &str = "university";
const RESULT_SEGMENT: &str = "result";

/// Errors raised while parsing a location string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The location does not address any screen.
    #[error("unrecognised location `{0}` (expected /, /?university=<name> or /result/<id>)")]
    Unrecognised(String),
}

/// A dashboard screen address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// The university picker.
    #[default]
    Picker,
    /// Results for one university.
    Results {
        /// University name.
        university: String,
    },
    /// Detail for one exam result.
    Detail {
        /// Exam result identifier.
        id: u64,
    },
}

impl Route {
    /// Parses a location string.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Unrecognised`] when the location is not one of
    /// the three supported shapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use cutline::route::Route;
    ///
    /// assert_eq!(Route::parse("/result/42"), Ok(Route::Detail { id: 42 }));
    /// assert_eq!(
    ///     Route::parse("/?university=Sogang%20University"),
    ///     Ok(Route::Results { university: "Sogang University".to_owned() })
    /// );
    /// ```
    pub fn parse(location: &str) -> Result<Self, RouteError> {
        let unrecognised = || RouteError::Unrecognised(location.to_owned());
        let trimmed = location.trim();
        if !trimmed.starts_with('/') {
            return Err(unrecognised());
        }

        let base = Url::parse(BASE).map_err(|_| unrecognised())?;
        let url = base.join(trimmed).map_err(|_| unrecognised())?;
        let segments: Vec<&str> = url
            .path_segments()
            .map(|parts| parts.filter(|part| !part.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [] => Ok(university_param(&url).map_or(Self::Picker, |university| {
                Self::Results { university }
            })),
            [RESULT_SEGMENT, id] => id
                .parse::<u64>()
                .map(|parsed| Self::Detail { id: parsed })
                .map_err(|_| unrecognised()),
            _ => Err(unrecognised()),
        }
    }

    /// Formats the route as a location string.
    #[must_use]
    pub fn to_location(&self) -> String {
        match self {
            Self::Picker => "/".to_owned(),
            Self::Results { university } => {
                let query: String = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair(UNIVERSITY_PARAM, university)
                    .finish();
                format!("/?{query}")
            }
            Self::Detail { id } => format!("/{RESULT_SEGMENT}/{id}"),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_location())
    }
}

fn university_param(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == UNIVERSITY_PARAM)
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::root("/", Route::Picker)]
    #[case::empty_query("/?university=", Route::Picker)]
    #[case::university("/?university=Yonsei", Route::Results { university: "Yonsei".to_owned() })]
    #[case::encoded(
        "/?university=%EC%97%B0%EC%84%B8%EB%8C%80",
        Route::Results { university: "연세대".to_owned() }
    )]
    #[case::plus_space("/?university=Sogang+University", Route::Results { university: "Sogang University".to_owned() })]
    #[case::detail("/result/17", Route::Detail { id: 17 })]
    #[case::detail_trailing_slash("/result/17/", Route::Detail { id: 17 })]
    fn parses_supported_locations(#[case] location: &str, #[case] expected: Route) {
        assert_eq!(Route::parse(location), Ok(expected));
    }

    #[rstest]
    #[case::relative("result/1")]
    #[case::bad_id("/result/abc")]
    #[case::missing_id("/result")]
    #[case::unknown("/admin")]
    fn rejects_other_locations(#[case] location: &str) {
        assert_eq!(
            Route::parse(location),
            Err(RouteError::Unrecognised(location.to_owned()))
        );
    }

    #[rstest]
    #[case::picker(Route::Picker)]
    #[case::results(Route::Results { university: "Korea & Yonsei".to_owned() })]
    #[case::detail(Route::Detail { id: 9 })]
    fn location_round_trips(#[case] route: Route) {
        assert_eq!(Route::parse(&route.to_location()), Ok(route));
    }
}
