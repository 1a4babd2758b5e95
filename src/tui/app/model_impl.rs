//! `Model` trait implementation for the dashboard application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `DashboardApp`, handling initialisation, update dispatch, and view
//! rendering.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::DashboardApp;
use crate::assets::LogoResolver;
use crate::route::Route;
use crate::tui::input::map_key_to_message_with_context;
use crate::tui::messages::AppMsg;

impl Model for DashboardApp {
    fn init() -> (Self, Option<Cmd>) {
        let Some(context) = crate::tui::get_dashboard_context() else {
            let mut model = Self::unconfigured(Arc::new(LogoResolver::new("logos")));
            let cmd = model.open_route(&Route::Picker);
            return (model, cmd);
        };

        let route = context.initial_route.clone();
        let mut model = Self::new(context);
        let cmd = model.open_route(&route);
        (model, cmd)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs with context-aware mapping
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let context = self.input_context();
            let app_msg = map_key_to_message_with_context(key_msg, context);
            if let Some(mapped) = app_msg {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());

        // Body fills everything between header and status bar.
        let body_height = usize::from(self.height).saturating_sub(super::CHROME_HEIGHT);
        let body = self.render_body();
        let mut lines: Vec<&str> = body.lines().take(body_height).collect();
        lines.resize(body_height, "");
        for line in lines {
            output.push_str(line);
            output.push('\n');
        }

        output.push_str(&self.render_status_bar());
        self.normalise_viewport(&output)
    }
}

impl DashboardApp {
    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than terminal width to avoid
    /// autowrap and padded with spaces to clear stale trailing cells after
    /// resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = usize::from(self.width.max(1));
        let safe_width = width.saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if char_width == 0 {
            output.push(ch);
            continue;
        }

        if visible_width.saturating_add(char_width) > width {
            break;
        }

        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    if visible_width < width {
        output.push_str(&" ".repeat(width - visible_width));
    }

    output
}
