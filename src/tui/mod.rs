//! Terminal dashboard for browsing exam results.
//!
//! This module provides an interactive TUI for picking a university,
//! filtering its results by exam time slot, classifying them against an
//! entered score and discussing individual results, using the bubbletea-rs
//! framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::DashboardApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Cursor, detail and comment form state
//! - [`components`]: Screen region renderers
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the data service and starting route are placed in module-level
//! storage. Call [`set_dashboard_context`] before starting the program, and
//! `DashboardApp::init()` will retrieve it.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::{DashboardApp, Screen};
pub(crate) use storage::{get_dashboard_context, get_initial_terminal_size};
pub use storage::{DashboardContext, set_dashboard_context, set_initial_terminal_size};
