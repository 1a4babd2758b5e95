//! Seed data and input helpers shared by the dashboard scenarios.

use cutline::dashboard::TimeSlotFilter;
use cutline::records::ExamResult;
use cutline::tui::DashboardApp;
use cutline::tui::messages::AppMsg;

/// Result type returned by fallible steps.
pub(crate) type StepResult = Result<(), Box<dyn std::error::Error>>;

/// Builds one Yonsei exam result with the given slot and scores.
pub(crate) fn exam_result(
    id: u64,
    department: &str,
    slot: &str,
    cutoff: f64,
    average: f64,
) -> ExamResult {
    ExamResult {
        id,
        university: "Yonsei".to_owned(),
        department: department.to_owned(),
        year: 2025,
        exam_time: Some(slot.to_owned()),
        competition_rate: Some(10.0),
        avg_score: Some(average),
        cut_score: Some(cutoff),
        ..ExamResult::default()
    }
}

/// Ten Yonsei results spread across three slots; ids 1, 3, 6 and 9 sit at
/// 9:00.
pub(crate) fn yonsei_results() -> Vec<ExamResult> {
    let slots = [
        "9:00", "11:00", "9:00", "14:00", "11:00", "9:00", "14:00", "11:00", "9:00", "14:00",
    ];
    (1_u64..)
        .zip(slots)
        .map(|(id, slot)| exam_result(id, &format!("Dept {id}"), slot, 75.0, 80.0))
        .collect()
}

/// Cycles the slot tabs until `slot` is active.
pub(crate) fn select_time_slot(app: &mut DashboardApp, slot: &str) -> Result<(), String> {
    let target = TimeSlotFilter::from_label(slot);
    for _ in 0..=app.time_slot_tabs().len() {
        if app.selection().time_slot() == &target {
            return Ok(());
        }
        app.handle_message(&AppMsg::NextTimeSlot);
    }
    Err(format!("time slot {slot} is not offered"))
}
