//! Behavioural tests for posting comments from the detail screen.

#[path = "dashboard_bdd/mod.rs"]
mod dashboard_bdd_support;

use cutline::records::gateway::memory::InMemoryRecordStore;
use cutline::route::Route;
use cutline::tui::messages::AppMsg;
use cutline::tui::state::CommentForm;
use dashboard_bdd_support::{DashboardState, StepResult, yonsei_results};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn dashboard_state() -> DashboardState {
    DashboardState::default()
}

fn unquote(text: &str) -> &str {
    text.trim_matches('"')
}

fn detail_form(dashboard_state: &DashboardState) -> Result<CommentForm, Box<dyn std::error::Error>> {
    dashboard_state
        .with_app(|app| app.detail().map(|detail| detail.form.clone()))?
        .ok_or_else(|| "detail screen should be open".into())
}

#[given("a dashboard showing the detail of result {id:u64}")]
fn given_detail(dashboard_state: &DashboardState, id: u64) -> StepResult {
    dashboard_state.start(InMemoryRecordStore::with_results(yonsei_results()));
    dashboard_state.open(&Route::Detail { id })
}

#[given("a dashboard whose comment inserts fail showing the detail of result {id:u64}")]
fn given_failing_detail(dashboard_state: &DashboardState, id: u64) -> StepResult {
    dashboard_state.start(InMemoryRecordStore::with_results(yonsei_results()).failing_writes());
    dashboard_state.open(&Route::Detail { id })
}

#[when("the user submits a comment with nickname {nickname} password {password} and content {content}")]
fn when_user_submits(
    dashboard_state: &DashboardState,
    nickname: String,
    password: String,
    content: String,
) -> StepResult {
    dashboard_state.with_app(|app| {
        app.handle_message(&AppMsg::StartCompose);
        for (index, field) in [&nickname, &password, &content].into_iter().enumerate() {
            if index > 0 {
                app.handle_message(&AppMsg::ComposeNextField);
            }
            for character in unquote(field).chars() {
                app.handle_message(&AppMsg::ComposeChar(character));
            }
        }
    })?;

    dashboard_state.calls_before.set(dashboard_state.call_count()?);
    dashboard_state.send(&AppMsg::SubmitComment)
}

#[then("the form alert mentions {text}")]
fn then_alert_mentions(dashboard_state: &DashboardState, text: String) -> StepResult {
    let current = detail_form(dashboard_state)?;
    let alert = current.alert().unwrap_or_default();

    assert!(alert.contains(unquote(&text)), "alert was `{alert}`");
    Ok(())
}

#[then("no backend call was made for the submission")]
fn then_no_backend_call(dashboard_state: &DashboardState) -> StepResult {
    let before = dashboard_state
        .calls_before
        .get()
        .ok_or("submission should have been attempted")?;

    assert_eq!(dashboard_state.call_count()?, before);
    Ok(())
}

#[then("the typed content is still {content}")]
fn then_content_kept(dashboard_state: &DashboardState, content: String) -> StepResult {
    let current = detail_form(dashboard_state)?;

    assert_eq!(current.draft().content, unquote(&content));
    Ok(())
}

#[then("the first comment reads {content}")]
fn then_first_comment(dashboard_state: &DashboardState, content: String) -> StepResult {
    let first = dashboard_state.with_app(|app| {
        app.detail()
            .and_then(|detail| detail.comments.first())
            .map(|comment| comment.content.clone())
    })?;

    assert_eq!(first.as_deref(), Some(unquote(&content)));
    Ok(())
}

#[scenario(path = "tests/features/comment_posting.feature", index = 0)]
fn blank_nickname_is_rejected(dashboard_state: DashboardState) {
    let _ = dashboard_state;
}

#[scenario(path = "tests/features/comment_posting.feature", index = 1)]
fn posted_comment_appears_first(dashboard_state: DashboardState) {
    let _ = dashboard_state;
}

#[scenario(path = "tests/features/comment_posting.feature", index = 2)]
fn failed_post_keeps_content(dashboard_state: DashboardState) {
    let _ = dashboard_state;
}
