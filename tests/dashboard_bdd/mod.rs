//! Support modules for the dashboard BDD tests.

pub(crate) mod harness;
pub(crate) mod state;

pub(crate) use harness::{StepResult, exam_result, select_time_slot, yonsei_results};
pub(crate) use state::DashboardState;
