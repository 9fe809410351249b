use std::iter;

use ratatui::{prelude::*, widgets::Paragraph};

use crate::core::markers::Marker;
use crate::domain::viewport::ViewportMode;

const DEFAULT_HINT: &str = "1-5 open · f flip · esc close · q quit";

pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    mode: ViewportMode,
    markers: Vec<Marker>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a str>, mode: ViewportMode, markers: Vec<Marker>) -> Self {
        Self {
            message,
            mode,
            markers,
        }
    }

    /// Viewport mode followed by the active markers
    pub fn indicators(&self) -> String {
        let mode = match self.mode {
            ViewportMode::Wide => "wide",
            ViewportMode::Narrow => "narrow",
        };
        iter::once(mode.to_string())
            .chain(self.markers.iter().map(Marker::to_string))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let indicators = self.indicators();
        let layout = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(indicators.chars().count() as u16),
        ])
        .split(area);

        let message = match self.message {
            Some(message) => Span::styled(message, Style::default().fg(Color::Yellow)),
            None => Span::styled(DEFAULT_HINT, Style::default().fg(Color::DarkGray)),
        };
        Paragraph::new(message).render(layout[0], buf);
        Paragraph::new(Span::styled(
            indicators,
            Style::default().fg(Color::Gray).italic(),
        ))
        .render(layout[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_indicators() {
        let bar = StatusBarWidget::new(
            None,
            ViewportMode::Wide,
            vec![Marker::ScrollLock, Marker::CursorSuppression],
        );
        assert_eq!(bar.indicators(), "wide · scroll-lock · cursor-suppression");
    }

    #[test]
    fn test_render_message() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 1));
        StatusBarWidget::new(Some("Message sent"), ViewportMode::Narrow, vec![])
            .render(buf.area, &mut buf);

        let line: String = (0..60).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(line.starts_with("Message sent"));
        assert!(line.trim_end().ends_with("narrow"));
    }
}
