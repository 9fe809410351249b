use ratatui::{prelude::*, widgets::Paragraph};

use super::Surface;
use crate::{content::ABOUT_SECTIONS, domain::text::wrap_words};

pub fn view(surface: &mut Surface) {
    let area = surface.area;
    let mut lines = vec![];
    for (heading, body) in ABOUT_SECTIONS {
        lines.push(Line::from(*heading).cyan().bold());
        lines.extend(
            wrap_words(body, area.width as usize)
                .into_iter()
                .map(Line::from),
        );
        lines.push(Line::from(""));
    }
    surface.render_widget(Paragraph::new(lines), area);
}
