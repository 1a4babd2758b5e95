//! Cutline library crate for browsing entrance-exam cutoff results.
//!
//! The library reads exam results and discussion comments from a
//! PostgREST-compatible record store, classifies a self-reported score
//! against each result's cutoff and average, and drives a terminal dashboard
//! over that data. The binary adds plain-output CLI modes on top.

pub mod analysis;
pub mod assets;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod records;
pub mod route;
pub mod telemetry;
pub mod tui;

pub use config::{CutlineConfig, OperationMode};
pub use error::CutlineError;
pub use records::{DashboardService, ExamResult, RecordStore, RecordStoreError};
pub use route::Route;
