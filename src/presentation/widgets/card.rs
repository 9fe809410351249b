use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph, Wrap},
};

/// Bordered bento card
#[derive(Debug, Clone, Default)]
pub struct Card<'a> {
    title: Line<'a>,
    body: Text<'a>,
    hint: Option<Line<'a>>,
    highlighted: bool,
    accent: Color,
}

impl<'a> Card<'a> {
    pub fn new(title: impl Into<Line<'a>>) -> Self {
        Self {
            title: title.into(),
            accent: Color::Cyan,
            ..Self::default()
        }
    }

    pub fn body(mut self, body: impl Into<Text<'a>>) -> Self {
        self.body = body.into();
        self
    }

    /// Short affordance shown on the bottom border
    pub fn hint(mut self, hint: impl Into<Line<'a>>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

impl<'a> Widget for Card<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.highlighted {
            Style::default().fg(self.accent).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(self.title.style(Style::default().fg(self.accent).bold()));
        if let Some(hint) = self.hint {
            block = block.title_bottom(hint.right_aligned().style(Style::default().fg(Color::Gray)));
        }

        Paragraph::new(self.body)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
