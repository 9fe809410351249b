//! Overlay component
//!
//! Draws every open overlay on top of the dashboard in the order they were
//! opened, so the last one is both painted and hit-tested on top. Each overlay
//! is a backdrop plus a content box built by [`overlay::layer`], which keeps
//! clicks inside the box away from the backdrop's close handler.

use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, BorderType, Clear, Paragraph},
};

use crate::{
    core::{
        msg::{ui::UiMsg, Msg},
        overlay,
        state::{AppState, Dashboard},
        widget::WidgetId,
    },
    domain::{
        element::{Element, ElementId, ElementTree, CLICKABLE_CLASS},
        viewport::ViewportMode,
    },
};

pub mod about;
pub mod certificates;
pub mod contacts;
pub mod projects;
pub mod skills;

const CLOSE_LABEL: &str = "[x]";

#[derive(Debug, Clone, Default)]
pub struct OverlayComponent;

impl OverlayComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(
        &self,
        state: &AppState,
        frame: &mut Frame,
        area: Rect,
        tree: &mut ElementTree<Msg>,
    ) {
        let Some(dashboard) = state.dashboard() else {
            return;
        };
        for &widget in dashboard.open_overlays() {
            view_overlay(widget, dashboard, state.mode(), frame, area, tree);
        }
    }
}

fn view_overlay(
    widget: WidgetId,
    dashboard: &Dashboard,
    mode: ViewportMode,
    frame: &mut Frame,
    viewport: Rect,
    tree: &mut ElementTree<Msg>,
) {
    let close = Msg::Ui(UiMsg::CloseOverlay(widget));
    let content_area = match mode {
        ViewportMode::Wide => centered(viewport, 70, 80),
        ViewportMode::Narrow => viewport.inner(Margin::new(1, 1)),
    };
    let mut surface = Surface::modal(frame, tree, viewport, content_area, title(widget), close);

    match widget {
        WidgetId::About => about::view(&mut surface),
        WidgetId::Skills => {
            if let Some(panel) = dashboard.skills.content() {
                skills::view(panel, &mut surface);
            }
        }
        WidgetId::Projects => {
            if let Some(panel) = dashboard.projects.content() {
                projects::view(panel, &mut surface);
            }
        }
        WidgetId::Certificates => {
            if let Some(panel) = dashboard.certificates.content() {
                certificates::view(panel, &mut surface);
            }
        }
        WidgetId::Contacts => {
            if let Some(form) = dashboard.contacts.content() {
                contacts::view(form, &mut surface);
            }
        }
        _ => {}
    }
}

fn title(widget: WidgetId) -> &'static str {
    match widget {
        WidgetId::About => "About Me",
        WidgetId::Skills => "Skills & Tech Stack",
        WidgetId::Projects => "Projects",
        WidgetId::Certificates => "Certificates",
        WidgetId::Contacts => "Get in Touch",
        _ => "",
    }
}

/// A rectangle of the given percentages centred in `area`
pub fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(height_percent)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Drawing target inside one modal's content box
///
/// Everything drawn through it also lands in the element tree under the
/// content element, so it is covered by the content's stop-propagation.
pub struct Surface<'a, 'b> {
    frame: &'a mut Frame<'b>,
    tree: &'a mut ElementTree<Msg>,
    parent: ElementId,
    viewport: Rect,
    /// Drawable area inside the border
    pub area: Rect,
}

impl<'a, 'b> Surface<'a, 'b> {
    /// Dim the screen, draw a bordered box with a close button and register
    /// its backdrop layer
    pub fn modal(
        frame: &'a mut Frame<'b>,
        tree: &'a mut ElementTree<Msg>,
        viewport: Rect,
        content_area: Rect,
        title: &str,
        close: Msg,
    ) -> Self {
        frame
            .buffer_mut()
            .set_style(viewport, Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(Clear, content_area);

        let layer = overlay::layer(tree, viewport, content_area, close.clone());
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Line::from(title.to_string()).bold());
        let area = block.inner(content_area);
        frame.render_widget(block, content_area);

        let mut surface = Self {
            frame,
            tree,
            parent: layer.content,
            viewport,
            area,
        };
        let width = CLOSE_LABEL.len() as u16;
        if content_area.width > width + 2 {
            let button = Rect::new(content_area.right() - width - 1, content_area.y, width, 1);
            surface.button(button, CLOSE_LABEL, close, false);
        }
        surface
    }

    /// A nested modal drawn over this one
    pub fn nested(
        &mut self,
        width_percent: u16,
        height_percent: u16,
        title: &str,
        close: Msg,
    ) -> Surface<'_, 'b> {
        let content_area = centered(self.viewport, width_percent, height_percent);
        Surface::modal(
            &mut *self.frame,
            &mut *self.tree,
            self.viewport,
            content_area,
            title,
            close,
        )
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.frame.render_widget(widget, area.intersection(self.area));
    }

    /// Label that emits `msg` when clicked
    pub fn button(&mut self, area: Rect, label: &str, msg: Msg, selected: bool) {
        let style = if selected {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Cyan)
        };
        self.frame
            .render_widget(Paragraph::new(Span::styled(label.to_string(), style)), area);
        self.tree
            .insert(self.parent, Element::button(area).on_click(msg));
    }

    /// Underlined label that opens `href`
    pub fn link(&mut self, area: Rect, label: &str, href: &str) {
        let area = area.intersection(self.area);
        self.frame.render_widget(
            Paragraph::new(Span::styled(
                label.to_string(),
                Style::default().fg(Color::LightBlue).underlined(),
            )),
            area,
        );
        self.tree.insert(
            self.parent,
            Element::anchor(area).on_click(Msg::Ui(UiMsg::OpenLink(href.to_string()))),
        );
    }

    /// Clickable region whose drawing is up to the caller
    pub fn region(&mut self, area: Rect, msg: Msg) {
        self.tree.insert(
            self.parent,
            Element::div(area.intersection(self.area))
                .class(CLICKABLE_CLASS)
                .on_click(msg),
        );
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_centered() {
        assert_eq!(
            centered(Rect::new(0, 0, 100, 40), 50, 50),
            Rect::new(25, 10, 50, 20)
        );
    }
}
