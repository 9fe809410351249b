//! Component collection
//!
//! Components are stateless renderers that receive state as parameters. Every
//! frame also yields the element tree that the next clicks and pointer moves
//! are resolved against.

use ratatui::prelude::*;

use crate::{
    core::{msg::Msg, state::AppState},
    domain::element::ElementTree,
};

pub mod cursor;
pub mod dashboard;
pub mod loading;
pub mod overlay;
pub mod status_bar;

pub use cursor::CursorComponent;
pub use dashboard::DashboardComponent;
pub use loading::LoadingComponent;
pub use overlay::OverlayComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub loading: LoadingComponent,
    pub dashboard: DashboardComponent,
    pub overlay: OverlayComponent,
    pub status_bar: StatusBarComponent,
    pub cursor: CursorComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components and return the frame's element tree
    ///
    /// Painting order is also hit-test order: dashboard cards, then overlays
    /// in the order they were opened.
    pub fn render(&self, frame: &mut Frame, state: &AppState) -> ElementTree<Msg> {
        let area = frame.area();
        let [main, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let mut tree = ElementTree::new(area);

        if state.page.is_loading() {
            self.loading.view(state, frame, main);
        } else {
            self.dashboard.view(state, frame, main, &mut tree);
            self.overlay.view(state, frame, main, &mut tree);
        }
        self.status_bar.view(state, frame, status);
        self.cursor.view(state, frame, area);

        tree
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::core::{
        cmd::Cmd,
        msg::{pointer::PointerMsg, ui::UiMsg},
        update::update,
        widget::WidgetId,
    };
    use crate::infrastructure::config::Config;

    fn ready(width: u16, height: u16) -> AppState {
        let mut state = AppState::new(Config::default(), width, height);
        let fired: Vec<Msg> = state.ticker.advance(Duration::from_secs(2)).collect();
        for msg in fired {
            update(msg, &mut state);
        }
        state
    }

    fn draw(state: &mut AppState) -> Vec<String> {
        let area = state.viewport();
        let mut terminal = Terminal::new(TestBackend::new(area.width, area.height))
            .unwrap_or_else(|e| panic!("terminal: {e}"));
        let components = Components::new();
        let mut tree = None;
        terminal
            .draw(|f| tree = Some(components.render(f, state)))
            .unwrap_or_else(|e| panic!("draw: {e}"));
        if let Some(tree) = tree {
            state.scene = tree;
        }

        let buffer = terminal.backend().buffer();
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }

    /// Cell where `label` first appears on screen
    fn locate(lines: &[String], label: &str) -> (u16, u16) {
        lines
            .iter()
            .enumerate()
            .find_map(|(y, line)| {
                line.find(label).map(|byte| {
                    let x = line[..byte].chars().count();
                    (x as u16, y as u16)
                })
            })
            .unwrap_or_else(|| panic!("{label} not on screen"))
    }

    #[test]
    fn test_loading_screen() {
        let mut state = AppState::new(Config::default(), 80, 24);
        let lines = draw(&mut state);

        assert!(contains(&lines, "Hi, I'm Farrel!"));
        assert!(contains(&lines, "0%"));
        // only the root element while loading
        assert_eq!(state.scene.len(), 1);
    }

    #[test]
    fn test_wide_dashboard_shows_every_card() {
        let mut state = ready(120, 40);
        let lines = draw(&mut state);

        for title in ["Profile", "About", "Clock", "Skills", "Projects", "Quote", "Blog"] {
            assert!(contains(&lines, title), "{title} missing");
        }
        assert!(contains(&lines, "Front End Web Developer"));
        assert!(contains(&lines, "wide · cursor-suppression"));
    }

    #[test]
    fn test_click_on_card_opens_overlay_and_backdrop_closes_it() {
        let mut state = ready(120, 40);
        let lines = draw(&mut state);

        let (x, y) = locate(&lines, "Certificates");
        update(Msg::Pointer(PointerMsg::Clicked { x, y: y + 1 }), &mut state);
        assert_eq!(state.topmost_overlay(), Some(WidgetId::Certificates));

        let lines = draw(&mut state);
        assert!(contains(&lines, "scroll-lock"));

        // inside the content box: stays open
        let (x, y) = locate(&lines, "j/k scroll");
        update(Msg::Pointer(PointerMsg::Clicked { x, y }), &mut state);
        assert_eq!(state.topmost_overlay(), Some(WidgetId::Certificates));

        // top-left corner is backdrop
        update(Msg::Pointer(PointerMsg::Clicked { x: 0, y: 0 }), &mut state);
        assert_eq!(state.topmost_overlay(), None);
    }

    #[test]
    fn test_close_button_closes_overlay() {
        let mut state = ready(120, 40);
        update(Msg::Ui(UiMsg::OpenOverlay(WidgetId::About)), &mut state);
        let lines = draw(&mut state);

        let (x, y) = locate(&lines, "[x]");
        update(Msg::Pointer(PointerMsg::Clicked { x: x + 1, y }), &mut state);
        assert_eq!(state.topmost_overlay(), None);
    }

    #[test]
    fn test_skill_tab_click_filters() {
        let mut state = ready(120, 40);
        update(Msg::Ui(UiMsg::OpenOverlay(WidgetId::Skills)), &mut state);
        let lines = draw(&mut state);

        let (x, y) = locate(&lines, "Backend");
        update(Msg::Pointer(PointerMsg::Clicked { x, y }), &mut state);
        let lines = draw(&mut state);

        assert!(contains(&lines, "Express"));
        assert!(!contains(&lines, "Figma"));
    }

    #[test]
    fn test_narrow_column_scrolls() {
        let mut state = ready(60, 20);
        let lines = draw(&mut state);
        assert!(contains(&lines, "Profile"));
        assert!(!contains(&lines, "Blog"));
        assert!(!contains(&lines, "cursor-suppression"));

        for _ in 0..100 {
            update(Msg::Ui(UiMsg::ScrollDown), &mut state);
        }
        let lines = draw(&mut state);
        assert!(contains(&lines, "Blog"));
        assert!(!contains(&lines, "Profile"));
    }

    #[test]
    fn test_social_link_click_emits_open_link() {
        let mut state = ready(120, 40);
        let lines = draw(&mut state);

        let (x, y) = locate(&lines, "GitHub");
        let commands = update(Msg::Pointer(PointerMsg::Clicked { x, y }), &mut state);
        assert_eq!(
            commands,
            vec![Cmd::OpenLink {
                href: "https://github.com/Prozycal".to_string()
            }]
        );
    }

    #[test]
    fn test_cursor_drawn_on_wide() {
        let mut state = ready(120, 40);
        update(Msg::Pointer(PointerMsg::Moved { x: 5, y: 5 }), &mut state);
        let lines = draw(&mut state);

        assert!(lines[5].contains('◆') || lines[5].contains('◈'));
    }
}
