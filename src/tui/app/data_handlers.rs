//! Handlers that apply fetch responses.
//!
//! Every response carries the [`RequestId`] it was issued with; anything
//! superseded by a newer request on the same channel is dropped.

use bubbletea_rs::Cmd;

use crate::dashboard::RequestId;
use crate::records::{Comment, ExamResult};
use crate::tui::messages::AppMsg;

use super::DashboardApp;

impl DashboardApp {
    /// Dispatches data messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::UniversitiesLoaded { request, names } => {
                self.handle_universities_loaded(*request, names)
            }
            AppMsg::ResultsLoaded { request, results } => {
                self.handle_results_loaded(*request, results)
            }
            AppMsg::DetailLoaded { request, result } => {
                self.handle_detail_loaded(*request, result.as_ref())
            }
            AppMsg::CommentsLoaded { request, comments } => {
                self.handle_comments_loaded(*request, comments)
            }
            AppMsg::CommentPosted { exam_id, outcome } => {
                self.handle_comment_posted(*exam_id, outcome)
            }
            _ => None,
        }
    }

    fn handle_universities_loaded(&mut self, request: RequestId, names: &[String]) -> Option<Cmd> {
        if !self.requests.accept(request) {
            return None;
        }
        self.universities = names.to_vec();
        self.universities_loading = false;
        self.picker_cursor.clamp(self.universities.len());
        None
    }

    fn handle_results_loaded(&mut self, request: RequestId, results: &[ExamResult]) -> Option<Cmd> {
        if !self.requests.accept(request) {
            return None;
        }
        self.results = results.to_vec();
        self.results_loading = false;
        self.results_cursor.clamp(self.visible_results().len());
        None
    }

    fn handle_detail_loaded(
        &mut self,
        request: RequestId,
        result: Option<&ExamResult>,
    ) -> Option<Cmd> {
        if !self.requests.accept(request) {
            return None;
        }
        let detail = self.detail.as_mut()?;
        let exam_id = detail.result_id;
        detail.set_result(result.cloned());
        if result.is_none() {
            self.error = Some(format!("Result {exam_id} was not found"));
            return None;
        }
        self.fetch_comments(exam_id)
    }

    fn handle_comments_loaded(&mut self, request: RequestId, comments: &[Comment]) -> Option<Cmd> {
        if !self.requests.accept(request) {
            return None;
        }
        if let Some(detail) = self.detail.as_mut() {
            detail.comments = comments.to_vec();
        }
        None
    }
}
