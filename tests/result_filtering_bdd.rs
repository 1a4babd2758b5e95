//! Behavioural tests for time-slot filtering on the results screen.

#[path = "dashboard_bdd/mod.rs"]
mod dashboard_bdd_support;

use cutline::records::gateway::memory::InMemoryRecordStore;
use cutline::route::Route;
use cutline::tui::messages::AppMsg;
use dashboard_bdd_support::{DashboardState, StepResult, select_time_slot, yonsei_results};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn dashboard_state() -> DashboardState {
    DashboardState::default()
}

#[given("a dashboard over ten Yonsei results")]
fn given_ten_results(dashboard_state: &DashboardState) {
    dashboard_state.start(InMemoryRecordStore::with_results(yonsei_results()));
}

#[when("the user opens the results for {university}")]
fn when_user_opens_results(dashboard_state: &DashboardState, university: String) -> StepResult {
    dashboard_state.open(&Route::Results { university })
}

#[when("the user selects the {slot} time slot")]
fn when_user_selects_slot(dashboard_state: &DashboardState, slot: String) -> StepResult {
    dashboard_state.with_app(|app| select_time_slot(app, &slot))??;
    Ok(())
}

#[when("the user goes back to the university picker")]
fn when_user_goes_back(dashboard_state: &DashboardState) -> StepResult {
    dashboard_state.send(&AppMsg::Back)
}

#[then("the visible result ids are {ids}")]
fn then_visible_ids(dashboard_state: &DashboardState, ids: String) -> StepResult {
    let expected = ids
        .split(',')
        .map(|id| id.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()?;
    let actual: Vec<u64> = dashboard_state.with_app(|app| {
        app.visible_results().iter().map(|result| result.id).collect()
    })?;

    assert_eq!(actual, expected);
    Ok(())
}

#[then("{count:usize} results are visible")]
fn then_result_count(dashboard_state: &DashboardState, count: usize) -> StepResult {
    let visible = dashboard_state.with_app(|app| app.visible_results().len())?;

    assert_eq!(visible, count);
    Ok(())
}

#[then("no university is selected")]
fn then_no_university(dashboard_state: &DashboardState) -> StepResult {
    let selected = dashboard_state.with_app(|app| app.selection().university().map(str::to_owned))?;

    assert_eq!(selected, None);
    Ok(())
}

#[then("the picker lists {university}")]
fn then_picker_lists(dashboard_state: &DashboardState, university: String) -> StepResult {
    let listed = dashboard_state.with_app(|app| app.universities().to_vec())?;

    assert!(listed.contains(&university), "picker shows {listed:?}");
    Ok(())
}

#[scenario(path = "tests/features/result_filtering.feature", index = 0)]
fn slot_filter_keeps_matching_rows(dashboard_state: DashboardState) {
    let _ = dashboard_state;
}

#[scenario(path = "tests/features/result_filtering.feature", index = 1)]
fn all_shows_every_row(dashboard_state: DashboardState) {
    let _ = dashboard_state;
}

#[scenario(path = "tests/features/result_filtering.feature", index = 2)]
fn leaving_results_discards_selection(dashboard_state: DashboardState) {
    let _ = dashboard_state;
}
