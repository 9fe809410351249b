//! Cursor-follow diamond
//!
//! Drawn only while the cursor-suppression marker is applied, which the
//! pointer tracker holds on wide viewports.

use ratatui::prelude::*;

use crate::{
    core::{markers::Marker, state::AppState},
    presentation::widgets::cursor::Diamond,
};

#[derive(Debug, Clone, Default)]
pub struct CursorComponent;

impl CursorComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if !state.body.has(Marker::CursorSuppression) {
            return;
        }
        let pointer = state.pointer.state();
        frame.render_widget(Diamond::new(pointer.x, pointer.y, pointer.hovering), area);
    }
}
