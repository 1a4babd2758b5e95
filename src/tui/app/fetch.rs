//! Command builders for record store fetches.
//!
//! Each builder issues a fresh [`RequestId`] on its channel, clones the
//! service into a future and tags the resulting message with the id so stale
//! responses can be dropped when they arrive.

use std::any::Any;

use bubbletea_rs::Cmd;

use crate::dashboard::{FetchChannel, RequestId};
use crate::records::{CommentDraft, DashboardService};
use crate::tui::messages::AppMsg;

use super::DashboardApp;

const UNCONFIGURED: &str = "Dashboard data service is not configured";

impl DashboardApp {
    /// Returns a clone of the service, recording an error when absent.
    fn service_for_fetch(&mut self) -> Option<DashboardService> {
        let service = self.service.clone();
        if service.is_none() {
            self.error = Some(UNCONFIGURED.to_owned());
        }
        service
    }

    fn issue(&mut self, channel: FetchChannel) -> RequestId {
        self.requests.issue(channel)
    }

    /// Fetches the university list.
    pub(super) fn fetch_universities(&mut self) -> Option<Cmd> {
        let service = self.service_for_fetch()?;
        let request = self.issue(FetchChannel::Universities);
        self.universities_loading = true;
        Some(Box::pin(async move {
            let names = service.list_universities().await;
            Some(Box::new(AppMsg::UniversitiesLoaded { request, names }) as Box<dyn Any + Send>)
        }))
    }

    /// Fetches all results for `university`.
    pub(super) fn fetch_results(&mut self, university: String) -> Option<Cmd> {
        let service = self.service_for_fetch()?;
        let request = self.issue(FetchChannel::Results);
        self.results_loading = true;
        Some(Box::pin(async move {
            let results = service.list_results(&university).await;
            Some(Box::new(AppMsg::ResultsLoaded { request, results }) as Box<dyn Any + Send>)
        }))
    }

    /// Fetches one result for the detail screen.
    pub(super) fn fetch_detail(&mut self, id: u64) -> Option<Cmd> {
        let service = self.service_for_fetch()?;
        let request = self.issue(FetchChannel::Detail);
        Some(Box::pin(async move {
            let result = service.find_result(id).await;
            Some(Box::new(AppMsg::DetailLoaded { request, result }) as Box<dyn Any + Send>)
        }))
    }

    /// Fetches comments for the detail screen.
    pub(super) fn fetch_comments(&mut self, exam_id: u64) -> Option<Cmd> {
        let service = self.service_for_fetch()?;
        let request = self.issue(FetchChannel::Comments);
        Some(Box::pin(async move {
            let comments = service.list_comments(exam_id).await;
            Some(Box::new(AppMsg::CommentsLoaded { request, comments }) as Box<dyn Any + Send>)
        }))
    }

    /// Posts a comment that already passed local validation.
    pub(super) fn post_comment(&mut self, exam_id: u64, draft: CommentDraft) -> Option<Cmd> {
        let service = self.service_for_fetch()?;
        Some(Box::pin(async move {
            let outcome = service.create_comment(exam_id, &draft).await;
            Some(Box::new(AppMsg::CommentPosted { exam_id, outcome }) as Box<dyn Any + Send>)
        }))
    }
}
