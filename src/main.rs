//! Cutline CLI entrypoint for browsing exam cutoff results.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use cutline::records::{DashboardService, RestRecordStore};
use cutline::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use cutline::{CutlineConfig, CutlineError, OperationMode};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;

/// Environment variable holding the log filter directive.
const LOG_FILTER_ENV: &str = "CUTLINE_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CutlineError> {
    let config = load_config()?;
    let mode = config.operation_mode();
    init_logging(&config, mode)?;

    let service = build_service(&config)?;
    tracing::debug!(?mode, "starting cutline");

    match mode {
        OperationMode::UniversityListing => cli::university_listing::run(&config, &service).await,
        OperationMode::ResultListing => cli::result_listing::run(&config, &service).await,
        OperationMode::ResultDetail => cli::result_detail::run(&config, &service).await,
        OperationMode::CommentPosting => cli::comment_posting::run(&config, &service).await,
        OperationMode::Dashboard => cli::dashboard::run(&config, service).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CutlineError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<CutlineConfig, CutlineError> {
    CutlineConfig::load().map_err(|error| CutlineError::Configuration {
        message: error.to_string(),
    })
}

/// Builds the data service over the configured record store.
fn build_service(config: &CutlineConfig) -> Result<DashboardService, CutlineError> {
    let (endpoint, api_key) = config.require_backend()?;
    let store = RestRecordStore::new(endpoint, &api_key, config.request_timeout())?;

    let telemetry: Arc<dyn TelemetrySink> = if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    };
    Ok(DashboardService::new(Arc::new(store)).with_telemetry(telemetry))
}

/// Installs the log subscriber.
///
/// Logs go to `log_file` when configured. Otherwise plain modes log to
/// stderr and the dashboard logs nothing, keeping the alternate screen clean.
fn init_logging(config: &CutlineConfig, mode: OperationMode) -> Result<(), CutlineError> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = if let Some(path) = config.log_file.as_deref() {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .try_init()
    } else if mode == OperationMode::Dashboard {
        return Ok(());
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .try_init()
    };

    if let Err(error) = installed {
        writeln!(io::stderr().lock(), "logging disabled: {error}")?;
    }
    Ok(())
}
