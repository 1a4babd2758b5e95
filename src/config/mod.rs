//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.cutline.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `CUTLINE_BACKEND_URL`, `CUTLINE_API_KEY`,
//!    or the hosted-backend names `SUPABASE_URL` / `SUPABASE_ANON_KEY`
//! 4. **Command-line arguments** – `--backend-url`/`-b`, `--api-key`/`-k`
//!    and friends
//!
//! # Configuration File
//!
//! ```toml
//! backend_url = "https://example.supabase.co"
//! api_key = "anon-key"
//! logo_dir = "logos"
//! request_timeout_seconds = 10
//! log_file = "cutline.log"
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::dashboard::{ScoreInput, ScoreInputError, TimeSlotFilter};
use crate::records::{ApiKey, BackendEndpoint, CommentDraft, RecordStoreError};
use crate::route::{Route, RouteError};

/// Environment variable consulted when no backend URL is configured.
pub const BACKEND_URL_FALLBACK_ENV: &str = "SUPABASE_URL";

/// Environment variable consulted when no API key is configured.
pub const API_KEY_FALLBACK_ENV: &str = "SUPABASE_ANON_KEY";

const DEFAULT_LOGO_DIR: &str = "logos";
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print every university with its logo reference.
    UniversityListing,
    /// Print one university's results, optionally filtered and classified.
    ResultListing,
    /// Print one result with its verdict and discussion.
    ResultDetail,
    /// Post a comment to one result.
    CommentPosting,
    /// Run the interactive terminal dashboard.
    Dashboard,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use cutline::CutlineConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = CutlineConfig::load().expect("failed to load configuration");
/// let (endpoint, key) = config.require_backend().expect("backend required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "CUTLINE",
    discovery(
        dotfile_name = ".cutline.toml",
        config_file_name = "cutline.toml",
        app_name = "cutline"
    )
)]
pub struct CutlineConfig {
    /// Base URL of the PostgREST-compatible record store.
    ///
    /// Can be provided via:
    /// - CLI: `--backend-url <URL>` or `-b <URL>`
    /// - Environment: `CUTLINE_BACKEND_URL` or `SUPABASE_URL`
    /// - Config file: `backend_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub backend_url: Option<String>,

    /// Public (anonymous) API key sent with every request.
    ///
    /// Can be provided via:
    /// - CLI: `--api-key <KEY>` or `-k <KEY>`
    /// - Environment: `CUTLINE_API_KEY` or `SUPABASE_ANON_KEY`
    /// - Config file: `api_key = "..."`
    #[ortho_config(cli_short = 'k')]
    pub api_key: Option<String>,

    /// University whose results to show.
    #[ortho_config(cli_short = 'u')]
    pub university: Option<String>,

    /// Exam time slot to filter by; `ALL` or absent shows every slot.
    #[ortho_config(cli_short = 's')]
    pub time_slot: Option<String>,

    /// The user's own score, 0 to 100. Larger values are clamped to 100.
    #[ortho_config()]
    pub score: Option<String>,

    /// Exam result to show in detail or comment on.
    #[ortho_config(cli_short = 'r')]
    pub result_id: Option<u64>,

    /// Dashboard location to open, e.g. `/result/42`.
    #[ortho_config(cli_short = 'l')]
    pub location: Option<String>,

    /// Nickname for a posted comment.
    #[ortho_config()]
    pub nickname: Option<String>,

    /// Deletion password for a posted comment.
    #[ortho_config()]
    pub password: Option<String>,

    /// Body of a comment to post to `result_id`.
    #[ortho_config(cli_short = 'c')]
    pub comment_content: Option<String>,

    /// Lists universities and exits.
    ///
    /// Can be provided via:
    /// - CLI: `--list-universities` / `-L`
    /// - Config file: `list_universities = true`
    #[ortho_config(cli_short = 'L')]
    pub list_universities: bool,

    /// Forces the interactive dashboard even when listing options are set.
    ///
    /// Can be provided via:
    /// - CLI: `--tui` / `-T`
    /// - Config file: `tui = true`
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,

    /// Directory holding `<university>.png` logo files.
    #[ortho_config()]
    pub logo_dir: String,

    /// HTTP timeout for record store requests, in seconds.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// File that receives log output. Without it the dashboard logs nothing
    /// and plain modes log to stderr.
    #[ortho_config()]
    pub log_file: Option<String>,

    /// Emits telemetry events to stderr as JSON lines.
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for CutlineConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            api_key: None,
            university: None,
            time_slot: None,
            score: None,
            result_id: None,
            location: None,
            nickname: None,
            password: None,
            comment_content: None,
            list_universities: false,
            tui: false,
            logo_dir: DEFAULT_LOGO_DIR.to_owned(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            log_file: None,
            telemetry: false,
        }
    }
}

impl CutlineConfig {
    /// Determines the operation mode based on provided configuration.
    ///
    /// `--tui` always selects the dashboard. Otherwise listing universities
    /// wins, then comment posting (result id plus content), then result
    /// detail, then result listing; with none of those set the dashboard
    /// runs.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.tui {
            OperationMode::Dashboard
        } else if self.list_universities {
            OperationMode::UniversityListing
        } else if self.result_id.is_some() && self.comment_content.is_some() {
            OperationMode::CommentPosting
        } else if self.result_id.is_some() {
            OperationMode::ResultDetail
        } else if self.university.is_some() {
            OperationMode::ResultListing
        } else {
            OperationMode::Dashboard
        }
    }

    /// Resolves the backend URL from configuration or `SUPABASE_URL`.
    #[must_use]
    pub fn resolve_backend_url(&self) -> Option<String> {
        self.backend_url
            .clone()
            .or_else(|| env::var(BACKEND_URL_FALLBACK_ENV).ok())
            .filter(|url| !url.trim().is_empty())
    }

    /// Resolves the API key from configuration or `SUPABASE_ANON_KEY`.
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| env::var(API_KEY_FALLBACK_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }

    /// Validates the backend URL and API key.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::MissingBackendUrl`] or
    /// [`RecordStoreError::MissingApiKey`] when either is absent, and
    /// [`RecordStoreError::InvalidUrl`] when the URL does not parse.
    pub fn require_backend(&self) -> Result<(BackendEndpoint, ApiKey), RecordStoreError> {
        let url = self
            .resolve_backend_url()
            .ok_or(RecordStoreError::MissingBackendUrl)?;
        let key = self
            .resolve_api_key()
            .ok_or(RecordStoreError::MissingApiKey)?;
        Ok((BackendEndpoint::parse(&url)?, ApiKey::new(key)?))
    }

    /// HTTP timeout for record store requests.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// The configured time-slot filter.
    #[must_use]
    pub fn time_slot_filter(&self) -> TimeSlotFilter {
        self.time_slot
            .as_deref()
            .map_or(TimeSlotFilter::All, TimeSlotFilter::from_label)
    }

    /// The configured score, parsed and clamped.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreInputError`] when the score is not a non-negative
    /// number.
    pub fn score_input(&self) -> Result<ScoreInput, ScoreInputError> {
        self.score
            .as_deref()
            .map_or_else(|| Ok(ScoreInput::unset()), ScoreInput::parse)
    }

    /// The screen the dashboard opens on.
    ///
    /// An explicit `location` wins; otherwise `result_id` opens the detail
    /// screen and `university` opens its results.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Unrecognised`] when `location` does not parse.
    pub fn initial_route(&self) -> Result<Route, RouteError> {
        if let Some(location) = self.location.as_deref() {
            return Route::parse(location);
        }
        Ok(match (self.result_id, self.university.as_deref()) {
            (Some(id), _) => Route::Detail { id },
            (None, Some(university)) => Route::Results {
                university: university.to_owned(),
            },
            (None, None) => Route::Picker,
        })
    }

    /// Comment draft assembled from the comment options.
    #[must_use]
    pub fn comment_draft(&self) -> CommentDraft {
        CommentDraft::new(
            self.nickname.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
            self.comment_content.clone().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests;
