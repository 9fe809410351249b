//! Loading screen shown until the dashboard mounts

use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Gauge, Paragraph},
};

use crate::{content, core::state::AppState};

#[derive(Debug, Clone, Default)]
pub struct LoadingComponent;

impl LoadingComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [title, _, gauge] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);
        let [gauge] = Layout::horizontal([Constraint::Max(40)])
            .flex(Flex::Center)
            .areas(gauge);

        let ratio = progress(state);
        let dots = ".".repeat((state.ticker.now().as_millis() / 250 % 4) as usize);
        frame.render_widget(
            Paragraph::new(Line::from(format!("{}{dots}", content::HEADLINE)).bold()).centered(),
            title,
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(Color::Cyan))
                .ratio(ratio)
                .label(format!("{:.0}%", ratio * 100.0)),
            gauge,
        );
    }
}

/// Share of the loading delay that has passed, in `[0, 1]`
pub fn progress(state: &AppState) -> f64 {
    let total = state.config.timing.loading().as_secs_f64();
    if total <= 0.0 {
        return 1.0;
    }
    (state.ticker.now().as_secs_f64() / total).clamp(0.0, 1.0)
}
