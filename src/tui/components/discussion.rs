//! Discussion tab: comment thread and compose form.

use crate::records::{Comment, DraftField};
use crate::tui::state::CommentForm;

use super::text_cell::truncate_with_ellipsis;

const EMPTY_THREAD: &str = "No comments yet. Be the first to share how it went.";

/// Context for rendering the discussion tab.
#[derive(Debug, Clone, Copy)]
pub struct DiscussionViewContext<'a> {
    /// Comments, newest first.
    pub comments: &'a [Comment],
    /// Compose form state.
    pub form: &'a CommentForm,
    /// Available width in columns.
    pub width: usize,
}

/// Component for the discussion tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscussionComponent;

impl DiscussionComponent {
    /// Renders the compose form followed by the thread.
    #[must_use]
    pub fn view(ctx: &DiscussionViewContext<'_>) -> String {
        let mut output = render_form(ctx.form, ctx.width);
        output.push('\n');

        if ctx.comments.is_empty() {
            output.push_str(&format!("  {EMPTY_THREAD}\n"));
            return output;
        }

        let body_width = ctx.width.saturating_sub(4);
        for comment in ctx.comments {
            output.push_str(&format!(
                "  {}  {}\n",
                comment.nickname,
                comment.short_timestamp()
            ));
            for line in comment.content.lines() {
                output.push_str(&format!(
                    "    {}\n",
                    truncate_with_ellipsis(line, body_width)
                ));
            }
        }

        output
    }
}

fn render_form(form: &CommentForm, width: usize) -> String {
    let mut output = String::new();
    if form.is_composing() {
        output.push_str("  Write a comment  (Tab next field, Enter post, Esc stop)\n");
    } else {
        output.push_str("  Press i to write a comment\n");
    }

    let value_width = width.saturating_sub(28);
    for field in [DraftField::Nickname, DraftField::Password, DraftField::Content] {
        let focused = form.is_composing() && form.focus() == field;
        let marker = if focused { ">" } else { " " };
        let cursor = if focused { "_" } else { "" };
        output.push_str(&format!(
            "  {marker} {:<24}{}{cursor}\n",
            field_label(field),
            truncate_with_ellipsis(&form.display_value(field), value_width)
        ));
    }

    if form.is_submitting() {
        output.push_str("  Posting...\n");
    }
    if let Some(alert) = form.alert() {
        output.push_str(&format!("  ! {alert}\n"));
    }

    output
}

const fn field_label(field: DraftField) -> &'static str {
    match field {
        DraftField::Nickname => "nickname",
        DraftField::Password => "password (for deletion)",
        DraftField::Content => "comment",
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::*;

    fn comment(nickname: &str, content: &str) -> Comment {
        Comment {
            id: 1,
            exam_id: 3,
            nickname: nickname.to_owned(),
            content: content.to_owned(),
            created_at: Utc
                .with_ymd_and_hms(2026, 3, 4, 9, 5, 0)
                .single()
                .unwrap_or_default(),
        }
    }

    #[rstest]
    fn empty_thread_shows_prompt() {
        let form = CommentForm::default();
        let output = DiscussionComponent::view(&DiscussionViewContext {
            comments: &[],
            form: &form,
            width: 80,
        });

        assert!(output.contains(EMPTY_THREAD));
        assert!(output.contains("password (for deletion)"));
    }

    #[rstest]
    fn lists_comments_with_short_timestamp() {
        let form = CommentForm::default();
        let comments = [comment("kim", "made it with 81")];
        let output = DiscussionComponent::view(&DiscussionViewContext {
            comments: &comments,
            form: &form,
            width: 80,
        });

        assert!(output.contains("kim  3/4 09:05"));
        assert!(output.contains("    made it with 81"));
    }

    #[rstest]
    fn masks_password_and_shows_alert() {
        let mut form = CommentForm::default();
        form.start();
        form.focus_next();
        form.push_char('s');
        form.push_char('3');
        form.reject("nickname is required");

        let output = DiscussionComponent::view(&DiscussionViewContext {
            comments: &[],
            form: &form,
            width: 80,
        });

        assert!(output.contains("**_"));
        assert!(!output.contains("s3"));
        assert!(output.contains("! nickname is required"));
    }
}
