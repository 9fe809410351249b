use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use super::Surface;
use crate::{
    content::PROJECTS,
    core::{
        msg::{ui::UiMsg, Msg},
        state::projects::{ProjectsPanel, ProjectsView},
    },
    domain::text::ellipsize,
};

const TILE_COLUMNS: usize = 2;

pub fn view(panel: &ProjectsPanel, surface: &mut Surface) {
    let [toggle, _, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(surface.area);

    surface.button(
        Rect::new(toggle.x, toggle.y, 6, 1),
        " Webs ",
        Msg::Ui(UiMsg::SetProjectsView(ProjectsView::Webs)),
        panel.view() == ProjectsView::Webs,
    );
    surface.button(
        Rect::new(toggle.x + 7, toggle.y, 9, 1),
        " Gallery ",
        Msg::Ui(UiMsg::SetProjectsView(ProjectsView::Gallery)),
        panel.view() == ProjectsView::Gallery,
    );

    match panel.view() {
        ProjectsView::Webs => webs(surface, body),
        ProjectsView::Gallery => gallery(panel, surface, body, footer),
    }

    if let Some(design) = panel.previewing() {
        let mut preview = surface.nested(50, 40, design.title, Msg::Ui(UiMsg::ClosePreview));
        let area = preview.area;
        preview.render_widget(
            Paragraph::new(vec![
                Line::from(design.category).magenta(),
                Line::from(""),
                Line::from(design.image).dark_gray(),
                Line::from(""),
                Line::from("click outside or esc to close").dark_gray(),
            ]),
            area,
        );
    }
}

fn webs(surface: &mut Surface, area: Rect) {
    let width = area.width as usize;
    for (row, project) in (0u16..).step_by(4).zip(PROJECTS) {
        if row + 3 > area.height {
            break;
        }
        let y = area.y + row;
        surface.link(
            Rect::new(area.x, y, area.width, 1),
            &ellipsize(project.title, width),
            project.link,
        );
        surface.render_widget(
            Paragraph::new(vec![
                Line::from(ellipsize(project.description, width)),
                Line::from(ellipsize(&project.tech.join(" · "), width)).dark_gray(),
            ]),
            Rect::new(area.x, y + 1, area.width, 2),
        );
    }
}

fn gallery(panel: &ProjectsPanel, surface: &mut Surface, area: Rect, footer: Rect) {
    let designs = panel.visible_designs();
    let rows = designs.len().div_ceil(TILE_COLUMNS).max(1) as u16;
    let tile_height = (area.height / rows).max(3);

    for (slot, (index, design)) in designs.into_iter().enumerate() {
        let column = (slot % TILE_COLUMNS) as u16;
        let row = (slot / TILE_COLUMNS) as u16;
        let tile_width = area.width / TILE_COLUMNS as u16;
        let tile = Rect::new(
            area.x + column * tile_width,
            area.y + row * tile_height,
            tile_width,
            tile_height,
        );
        let inner_width = tile.width.saturating_sub(2) as usize;
        surface.render_widget(
            Paragraph::new(vec![
                Line::from(ellipsize(design.title, inner_width)).bold(),
                Line::from(ellipsize(design.category, inner_width)).dark_gray(),
            ])
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
            tile,
        );
        surface.region(tile, Msg::Ui(UiMsg::PreviewDesign(index)));
    }

    surface.button(
        Rect::new(footer.x, footer.y, 6, 1),
        "◀ Prev",
        Msg::Ui(UiMsg::PrevPage),
        false,
    );
    let page = format!("Page {}/{}", panel.page() + 1, panel.page_count());
    surface.render_widget(
        Paragraph::new(page).centered(),
        Rect::new(footer.x + 7, footer.y, footer.width.saturating_sub(14), 1),
    );
    surface.button(
        Rect::new(footer.right().saturating_sub(6), footer.y, 6, 1),
        "Next ▶",
        Msg::Ui(UiMsg::NextPage),
        false,
    );
}
