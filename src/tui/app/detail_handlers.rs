//! Detail screen handlers: tabs, slider and comment composition.
//!
//! Submission validates locally first so a blank field never reaches the
//! record store. The typed text survives a failed submission; a successful
//! one clears the content field and re-fetches the thread.

use bubbletea_rs::Cmd;

use crate::records::CommentSubmitError;
use crate::tui::messages::AppMsg;
use crate::tui::state::DetailTab;

use super::DashboardApp;

impl DashboardApp {
    /// Dispatches detail-screen and compose messages to their handlers.
    pub(super) fn handle_detail_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if matches!(msg, AppMsg::SubmitComment) {
            return self.handle_submit_comment();
        }

        let detail = self.detail.as_mut()?;
        match msg {
            AppMsg::ToggleDetailTab => detail.tab = detail.tab.toggled(),
            AppMsg::AdjustSlider(delta) => detail.adjust_slider(*delta),
            AppMsg::StartCompose => {
                detail.tab = DetailTab::Discussion;
                detail.form.start();
            }
            AppMsg::ComposeChar(character) => detail.form.push_char(*character),
            AppMsg::ComposeBackspace => detail.form.backspace(),
            AppMsg::ComposeNextField => detail.form.focus_next(),
            AppMsg::StopCompose => detail.form.stop(),
            _ => {}
        }
        None
    }

    fn handle_submit_comment(&mut self) -> Option<Cmd> {
        let detail = self.detail.as_mut()?;
        if detail.form.is_submitting() {
            return None;
        }

        let exam_id = detail.result_id;
        let draft = detail.form.draft().clone();
        if let Err(error) = draft.validate(exam_id) {
            detail.form.reject(CommentSubmitError::from(error).to_string());
            return None;
        }

        detail.form.begin_submit();
        let cmd = self.post_comment(exam_id, draft);
        if cmd.is_none() {
            self.reject_submission("comment could not be saved: no data service");
        }
        cmd
    }

    /// Applies the outcome of a comment submission.
    ///
    /// Outcomes are dropped unless the result on screen is the one posted to
    /// and its form is still waiting on a submission.
    pub(super) fn handle_comment_posted(
        &mut self,
        exam_id: u64,
        outcome: &Result<(), CommentSubmitError>,
    ) -> Option<Cmd> {
        let Some(detail) = self
            .detail
            .as_mut()
            .filter(|state| state.result_id == exam_id && state.form.is_submitting())
        else {
            tracing::debug!(exam_id, "discarding stale comment outcome");
            return None;
        };
        match outcome {
            Ok(()) => {
                detail.form.accept();
                self.fetch_comments(exam_id)
            }
            Err(error) => {
                detail.form.reject(error.to_string());
                None
            }
        }
    }

    fn reject_submission(&mut self, message: &str) {
        if let Some(detail) = self.detail.as_mut() {
            detail.form.reject(message);
        }
    }
}
