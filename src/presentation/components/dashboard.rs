//! Dashboard component
//!
//! Draws the bento grid and registers one element per card so clicks and hover
//! checks can find them. Wide viewports get a three-row grid; narrow ones get a
//! single column that scrolls.

use ratatui::prelude::*;

use crate::{
    content::{self, SOCIALS},
    core::{
        msg::{ui::UiMsg, Msg},
        state::{AppState, Dashboard},
        update::PROFILE_CARD,
        widget::WidgetId,
    },
    domain::{
        element::{Element, ElementTree, CLICKABLE_CLASS},
        text::ellipsize,
        viewport::ViewportMode,
    },
    presentation::widgets::{card::Card, shrink_text::ShrinkText},
};

/// Cards from top to bottom on narrow viewports, with their heights
const COLUMN: [(WidgetId, u16); 10] = [
    (WidgetId::Profile, 7),
    (WidgetId::About, 7),
    (WidgetId::Skills, 7),
    (WidgetId::Projects, 6),
    (WidgetId::Certificates, 6),
    (WidgetId::Contacts, 5),
    (WidgetId::Clock, 5),
    (WidgetId::Quote, 6),
    (WidgetId::Socials, SOCIALS.len() as u16 + 2),
    (WidgetId::Blog, 5),
];

#[derive(Debug, Clone, Default)]
pub struct DashboardComponent;

impl DashboardComponent {
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

        match state.mode() {
            ViewportMode::Wide => {
                for (widget, rect) in bento(area) {
                    let highlighted = is_pointed(state, rect);
                    card(widget, dashboard, highlighted).render(rect, frame.buffer_mut());
                    register(tree, widget, rect, Some);
                }
            }
            ViewportMode::Narrow => self.view_column(dashboard, frame, area, tree),
        }
    }

    /// Render the full column off screen and copy the scrolled window
    fn view_column(
        &self,
        dashboard: &Dashboard,
        frame: &mut Frame,
        area: Rect,
        tree: &mut ElementTree<Msg>,
    ) {
        let (cards, height) = column(area.x, area.width);
        let scroll = dashboard.scroll.min(height.saturating_sub(area.height));

        let mut canvas = Buffer::empty(Rect::new(area.x, 0, area.width, height));
        for &(widget, rect) in &cards {
            card(widget, dashboard, false).render(rect, &mut canvas);
        }

        let buf = frame.buffer_mut();
        for row in 0..area.height.min(height - scroll) {
            for col in area.left()..area.right() {
                buf[(col, area.y + row)] = canvas[(col, scroll + row)].clone();
            }
        }

        for (widget, rect) in cards {
            register(tree, widget, rect, |r| clip(r, scroll, area));
        }
    }
}

/// Three rows of cards filling `area`
pub fn bento(area: Rect) -> Vec<(WidgetId, Rect)> {
    let rows = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
    ])
    .split(area);
    let top = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(45),
        Constraint::Percentage(25),
    ])
    .split(rows[0]);
    let middle = Layout::horizontal([
        Constraint::Percentage(35),
        Constraint::Percentage(40),
        Constraint::Percentage(25),
    ])
    .split(rows[1]);
    let bottom = Layout::horizontal([
        Constraint::Percentage(35),
        Constraint::Percentage(25),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
    ])
    .split(rows[2]);

    vec![
        (WidgetId::Profile, top[0]),
        (WidgetId::About, top[1]),
        (WidgetId::Clock, top[2]),
        (WidgetId::Skills, middle[0]),
        (WidgetId::Projects, middle[1]),
        (WidgetId::Quote, middle[2]),
        (WidgetId::Certificates, bottom[0]),
        (WidgetId::Contacts, bottom[1]),
        (WidgetId::Socials, bottom[2]),
        (WidgetId::Blog, bottom[3]),
    ]
}

/// Card rectangles of the narrow column in canvas coordinates, and its height
pub fn column(x: u16, width: u16) -> (Vec<(WidgetId, Rect)>, u16) {
    let mut y = 0;
    let cards = COLUMN
        .iter()
        .map(|&(widget, height)| {
            let rect = Rect::new(x, y, width, height);
            y += height;
            (widget, rect)
        })
        .collect();
    (cards, y)
}

/// Visible part of a canvas rectangle once scrolled into `area`
fn clip(rect: Rect, scroll: u16, area: Rect) -> Option<Rect> {
    let top = rect.top().max(scroll);
    let bottom = rect.bottom().min(scroll.saturating_add(area.height));
    (top < bottom).then(|| Rect::new(rect.x, area.y + top - scroll, rect.width, bottom - top))
}

fn is_pointed(state: &AppState, rect: Rect) -> bool {
    let pointer = state.pointer.state();
    state.pointer.is_active() && rect.contains(Position::new(pointer.x, pointer.y))
}

/// Add the card's element, and its links for the socials card
///
/// `place` maps a layout rectangle to its visible part on screen.
fn register(
    tree: &mut ElementTree<Msg>,
    widget: WidgetId,
    rect: Rect,
    place: impl Fn(Rect) -> Option<Rect>,
) {
    let Some(visible) = place(rect) else {
        return;
    };
    let element = match widget {
        WidgetId::Profile => Element::div(visible)
            .named(PROFILE_CARD)
            .class(CLICKABLE_CLASS)
            .on_click(Msg::Ui(UiMsg::ProfileClicked)),
        w if w.has_overlay() => Element::div(visible)
            .class(CLICKABLE_CLASS)
            .on_click(Msg::Ui(UiMsg::OpenOverlay(w))),
        _ => Element::div(visible),
    };
    let parent = tree.insert(tree.root(), element);

    if widget == WidgetId::Socials {
        for (row, social) in (1u16..).zip(SOCIALS) {
            let link = Rect::new(rect.x + 1, rect.y + row, rect.width.saturating_sub(2), 1);
            if let Some(link) = place(link) {
                tree.insert(
                    parent,
                    Element::anchor(link)
                        .on_click(Msg::Ui(UiMsg::OpenLink(social.href.to_string()))),
                );
            }
        }
    }
}

fn card(widget: WidgetId, dashboard: &Dashboard, highlighted: bool) -> CardView<'_> {
    CardView {
        widget,
        dashboard,
        highlighted,
    }
}

/// A card bound to the dashboard state it shows
struct CardView<'a> {
    widget: WidgetId,
    dashboard: &'a Dashboard,
    highlighted: bool,
}

impl<'a> CardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let inner_height = area.height.saturating_sub(2) as usize;
        let dashboard = self.dashboard;

        let card = match self.widget {
            WidgetId::Profile => {
                let profile = &dashboard.profile;
                let hint = match profile.mode() {
                    ViewportMode::Narrow => "click to flip",
                    ViewportMode::Wide => "hover to flip",
                };
                let body = if profile.flip().is_back() {
                    Text::from(vec![
                        Line::from(content::HEADLINE).bold(),
                        Line::from(ellipsize(content::TAGLINE, inner_width)),
                        Line::from(ellipsize(content::PROFILE_BACK_IMAGE, inner_width)).dim(),
                    ])
                } else {
                    Text::from(vec![
                        Line::from(ellipsize(content::OWNER, inner_width)).bold(),
                        Line::from(ellipsize(profile.title(), inner_width)).yellow(),
                        Line::from(""),
                        Line::from(ellipsize(content::PROFILE_IMAGE, inner_width)).dim(),
                    ])
                };
                Card::new("Profile").body(body).hint(hint)
            }
            WidgetId::About => Card::new("About").body(ShrinkText::new(
                content::ABOUT_SUMMARY,
                inner_width,
                inner_height,
            )),
            WidgetId::Skills => {
                let mut lines: Vec<Line> = content::SKILLS
                    .iter()
                    .map(|skill| skill_line(skill.name, skill.level, inner_width))
                    .collect();
                lines.push(Line::from(content::SKILL_HIGHLIGHTS.join(" · ")).dim());
                Card::new("Skills").body(lines)
            }
            WidgetId::Projects => Card::new("Projects").body(vec![
                Line::from(format!(
                    "{} web projects · {} designs",
                    content::PROJECTS.len(),
                    content::DESIGNS.len()
                )),
                Line::from(""),
                Line::from(ellipsize(
                    content::PROJECTS.first().map_or("", |p| p.title),
                    inner_width,
                ))
                .italic(),
            ]),
            WidgetId::Certificates => Card::new("Certificates").body(vec![
                Line::from(format!("{} certificates", content::CERTIFICATES.len())),
                Line::from(""),
                Line::from(ellipsize(
                    content::CERTIFICATES.first().map_or("", |c| c.title),
                    inner_width,
                ))
                .italic(),
            ]),
            WidgetId::Contacts => Card::new("Contacts").body(vec![
                Line::from("Have a project in mind?"),
                Line::from("Send me a message.").dim(),
            ]),
            WidgetId::Clock => Card::new("Clock").accent(Color::Yellow).body(vec![
                Line::from(dashboard.clock.time()).bold().centered(),
                Line::from(dashboard.clock.weekday()).centered(),
                Line::from(dashboard.clock.date()).dim().centered(),
            ]),
            WidgetId::Quote => Card::new("Quote").accent(Color::Green).body(
                Text::from(ShrinkText::new(
                    format!("“{}”", dashboard.quote.quote()),
                    inner_width,
                    inner_height,
                ))
                .italic(),
            ),
            WidgetId::Socials => Card::new("Socials").body(
                SOCIALS
                    .iter()
                    .map(|social| Line::from(format!("↗ {}", social.label)).underlined())
                    .collect::<Vec<_>>(),
            ),
            WidgetId::Blog => Card::new("Blog").accent(Color::Magenta).body(vec![
                Line::from(content::BLOG_STATUS).bold(),
                Line::from(ellipsize(content::BLOG_TEASER, inner_width)).dim(),
            ]),
            WidgetId::Root => return,
        };

        let card = if let Some(index) = WidgetId::OVERLAYS.iter().position(|w| *w == self.widget)
        {
            card.hint(format!("[{}]", index + 1))
        } else {
            card
        };
        card.highlighted(self.highlighted).render(area, buf);
    }
}

/// `name ▰▰▰▰▱ 80%`, the bar taking whatever width the name leaves
fn skill_line(name: &str, level: u8, width: usize) -> Line<'static> {
    let label = format!(" {level}%");
    let name = ellipsize(name, width / 2);
    let bar_width = width.saturating_sub(name.chars().count() + label.len() + 1);
    let filled = bar_width * usize::from(level.min(100)) / 100;
    Line::from(vec![
        Span::raw(format!("{name} ")),
        Span::styled("▰".repeat(filled), Style::default().fg(Color::Cyan)),
        Span::styled(
            "▱".repeat(bar_width - filled),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(label),
    ])
}
