//! Status bar component
//!
//! One line at the bottom: the last status message (or key help) on the left,
//! viewport mode and active markers on the right.

use ratatui::{prelude::*, widgets::Clear};

use crate::{core::state::AppState, presentation::widgets::status_bar::StatusBarWidget};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let status_bar = StatusBarWidget::new(
            state.system.status_message.as_deref(),
            state.mode(),
            state.body.classes(),
        );
        frame.render_widget(status_bar, area);
    }
}
