//! Rendering logic for the dashboard application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use crate::records::ExamResult;
use crate::tui::components::{
    ComparisonChartComponent, ComparisonChartViewContext, DiscussionComponent,
    DiscussionViewContext, ResultTableComponent, ResultTableViewContext, UniversityGridComponent,
    UniversityGridViewContext,
};
use crate::tui::input::InputContext;
use crate::tui::state::{DetailState, DetailTab};

use super::{DashboardApp, Screen};

impl DashboardApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        match self.screen {
            Screen::Picker => "Cutline - Choose a university\n".to_owned(),
            Screen::Results => {
                let university = self.selection.university().unwrap_or_default();
                let logo = self.logos.resolve(university);
                let loading = if self.results_loading {
                    " [Loading...]"
                } else {
                    ""
                };
                format!(
                    "Cutline - {university}  ({})  Esc: universities{loading}\n",
                    logo.reference()
                )
            }
            Screen::Detail => self
                .detail
                .as_ref()
                .and_then(|detail| detail.result.as_ref())
                .map_or_else(
                    || "Cutline - Loading result...\n".to_owned(),
                    |result| format!("Cutline - {}\n", detail_title(result)),
                ),
        }
    }

    /// Renders the body for the current screen.
    pub(super) fn render_body(&self) -> String {
        match self.screen {
            Screen::Picker => self.render_picker(),
            Screen::Results => self.render_results(),
            Screen::Detail => self
                .detail
                .as_ref()
                .map_or_else(String::new, |detail| self.render_detail(detail)),
        }
    }

    fn render_picker(&self) -> String {
        UniversityGridComponent::view(&UniversityGridViewContext {
            names: &self.universities,
            logos: &self.logos,
            cursor_position: self.picker_cursor.position,
            loading: self.universities_loading,
            width: usize::from(self.width),
            visible_rows: self.picker_rows(),
        })
    }

    fn render_results(&self) -> String {
        let visible = self.visible_results();
        let tabs = self.time_slot_tabs();
        ResultTableComponent::view(&ResultTableViewContext {
            results: &visible,
            tabs: &tabs,
            active_tab: self.selection.time_slot(),
            score: self.selection.score(),
            score_enabled: self.selection.score_enabled(),
            loading: self.results_loading,
            cursor_position: self.results_cursor.position,
            scroll_offset: self.results_cursor.scroll_offset,
            visible_height: self.results_table_height(),
        })
    }

    fn render_detail(&self, detail: &DetailState) -> String {
        let mut output = render_detail_tabs(detail);
        output.push('\n');

        let Some(result) = detail.result.as_ref() else {
            if !detail.loading {
                output.push_str("  This result could not be loaded.\n");
            }
            return output;
        };

        let width = usize::from(self.width);
        let body = match detail.tab {
            DetailTab::Analysis => ComparisonChartComponent::view(&ComparisonChartViewContext {
                result,
                score: detail.slider,
                width,
            }),
            DetailTab::Discussion => DiscussionComponent::view(&DiscussionViewContext {
                comments: &detail.comments,
                form: &detail.form,
                width,
            }),
        };
        output.push_str(&body);
        output
    }

    /// Renders the status bar with the location and help hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }
        if let Some(status) = &self.status {
            return format!("{status}\n");
        }

        let hints = match self.input_context() {
            InputContext::Picker => "arrows:move  Enter:open  ?:help  q:quit",
            InputContext::Results => {
                "j/k:move  Tab:slot  0-9:score  Enter:detail  Esc:back  ?:help"
            }
            InputContext::Detail => {
                "Tab:tabs  h/l H/L:slider  i:comment  Esc:back  ?:help"
            }
            InputContext::Compose => {
                "Tab:next field  Enter:post  Esc:stop writing"
            }
        };
        format!("{}  {hints}\n", self.location())
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Universities:
  h/l, Left/Right  Previous/next card
  j/k, Down/Up     Next/previous row
  Enter            Show results

Results:
  j/k, Down/Up     Move cursor
  Tab, l           Next time slot
  Shift-Tab, h     Previous time slot
  0-9, .           Enter score (time slot required)
  Backspace        Delete score character
  Enter            Open result detail
  Esc              Back to universities

Detail:
  Tab              Analysis / Discussion
  h/l              Slider -1/+1
  H/L              Slider -5/+5
  i                Write a comment
  Esc              Back

Comment form:
  Tab              Next field
  Enter            Post comment
  Esc              Stop writing

Other:
  ?                Toggle this help
  q, Ctrl-C        Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}

fn render_detail_tabs(detail: &DetailState) -> String {
    let count = detail.comments.len();
    let (analysis, discussion) = match detail.tab {
        DetailTab::Analysis => ("[Analysis]".to_owned(), format!(" Discussion ({count}) ")),
        DetailTab::Discussion => (" Analysis ".to_owned(), format!("[Discussion ({count})]")),
    };
    format!("  {analysis}  {discussion}\n")
}

/// Title line for a result: year, slot, university, department and rate.
fn detail_title(result: &ExamResult) -> String {
    format!(
        "{} {} {} {}  (competition {})",
        result.year,
        result.exam_time_label(),
        result.university,
        result.department,
        result.competition_rate_label()
    )
}
