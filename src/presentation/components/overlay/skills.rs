use ratatui::{prelude::*, widgets::Paragraph};
use strum::IntoEnumIterator;
use unicode_width::UnicodeWidthStr;

use super::Surface;
use crate::{
    content::SkillCategory,
    core::{
        msg::{ui::UiMsg, Msg},
        state::skills::SkillsPanel,
    },
    domain::text::ellipsize,
};

const TECH_COLUMN_WIDTH: u16 = 16;

pub fn view(panel: &SkillsPanel, surface: &mut Surface) {
    let [tabs, _, items, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(surface.area);

    // Filter tabs, as many as fit on one row
    let mut x = tabs.x;
    for category in SkillCategory::iter() {
        let label = format!(" {category} ");
        let width = label.width() as u16;
        if x + width > tabs.right() {
            break;
        }
        surface.button(
            Rect::new(x, tabs.y, width, 1),
            &label,
            Msg::Ui(UiMsg::SelectCategory(category)),
            category == panel.category(),
        );
        x += width + 1;
    }

    let per_row = (items.width / TECH_COLUMN_WIDTH).max(1) as usize;
    let lines: Vec<Line> = panel
        .visible()
        .chunks(per_row)
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|tech| {
                        let name = ellipsize(tech.name, TECH_COLUMN_WIDTH as usize - 1);
                        Span::raw(format!("{name:<width$}", width = TECH_COLUMN_WIDTH as usize))
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    surface.render_widget(Paragraph::new(lines), items);
    surface.render_widget(
        Paragraph::new(Line::from("c next category").dark_gray()),
        help,
    );
}
