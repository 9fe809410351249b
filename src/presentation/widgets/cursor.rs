use ratatui::prelude::*;

/// Custom pointer drawn while the native cursor is suppressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diamond {
    pub position: Position,
    /// Pointer is over something clickable
    pub hovering: bool,
}

impl Diamond {
    pub fn new(x: u16, y: u16, hovering: bool) -> Self {
        Self {
            position: Position::new(x, y),
            hovering,
        }
    }

    pub fn symbol(&self) -> &'static str {
        if self.hovering {
            "◈"
        } else {
            "◆"
        }
    }
}

impl Widget for Diamond {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !area.contains(self.position) {
            return;
        }
        let color = if self.hovering {
            Color::LightMagenta
        } else {
            Color::Magenta
        };
        if let Some(cell) = buf.cell_mut(self.position) {
            cell.set_symbol(self.symbol()).set_fg(color);
        }
    }
}
