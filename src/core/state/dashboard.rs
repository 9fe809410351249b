use chrono::Local;
use color_eyre::eyre::Result;

use super::{
    clock::ClockState, contact::ContactForm, profile::ProfileState, projects::ProjectsPanel,
    quote::QuoteState, skills::SkillsPanel,
};
use crate::content::CERTIFICATES;
use crate::core::{
    markers::Markers, msg::Msg, overlay::OverlayController, scope::Listeners, ticker::Ticker,
    widget::WidgetId,
};
use crate::domain::viewport::ViewportMode;
use crate::infrastructure::config::Config;

/// Content of the certificates overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CertificatesPanel {
    scroll: usize,
}

impl CertificatesPanel {
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(CERTIFICATES.len().saturating_sub(1));
    }
}

/// The bento grid once loading is over
///
/// Each card owns its widget state and overlay. Overlays are independent of
/// each other; `open_order` only remembers which one is on top so Esc and
/// backdrop clicks reach it first.
#[derive(Debug)]
pub struct Dashboard {
    pub profile: ProfileState,
    pub quote: QuoteState,
    pub clock: ClockState,
    pub about: OverlayController<()>,
    pub skills: OverlayController<SkillsPanel>,
    pub projects: OverlayController<ProjectsPanel>,
    pub certificates: OverlayController<CertificatesPanel>,
    pub contacts: OverlayController<ContactForm>,
    /// Page scroll offset in rows
    pub scroll: u16,
    open_order: Vec<WidgetId>,
    markers: Markers,
    gallery_page_size: usize,
}

impl Dashboard {
    pub fn mount(
        ticker: &Ticker<Msg>,
        listeners: &Listeners<WidgetId>,
        markers: &Markers,
        config: &Config,
        mode: ViewportMode,
    ) -> Result<Self> {
        Ok(Self {
            profile: ProfileState::mount(mode, ticker, listeners, &config.timing)?,
            quote: QuoteState::mount(ticker, listeners, &config.timing)?,
            clock: ClockState::mount(Local::now(), ticker, listeners, &config.timing),
            about: OverlayController::new(markers.clone()),
            skills: OverlayController::new(markers.clone()),
            projects: OverlayController::new(markers.clone()),
            certificates: OverlayController::new(markers.clone()),
            contacts: OverlayController::new(markers.clone()),
            scroll: 0,
            open_order: vec![],
            markers: markers.clone(),
            gallery_page_size: config.layout.gallery_page_size,
        })
    }

    pub fn is_open(&self, widget: WidgetId) -> bool {
        match widget {
            WidgetId::About => self.about.is_open(),
            WidgetId::Skills => self.skills.is_open(),
            WidgetId::Projects => self.projects.is_open(),
            WidgetId::Certificates => self.certificates.is_open(),
            WidgetId::Contacts => self.contacts.is_open(),
            _ => false,
        }
    }

    /// Open a card's overlay; widgets without one are ignored
    pub fn open(&mut self, widget: WidgetId) -> bool {
        let opened = match widget {
            WidgetId::About => self.about.open(),
            WidgetId::Skills => self.skills.open(),
            WidgetId::Projects => self.projects.open_with(ProjectsPanel::new(
                self.markers.clone(),
                self.gallery_page_size,
            )),
            WidgetId::Certificates => self.certificates.open(),
            WidgetId::Contacts => self.contacts.open(),
            _ => false,
        };
        if opened {
            self.open_order.push(widget);
        }
        opened
    }

    pub fn close(&mut self, widget: WidgetId) -> bool {
        let closed = match widget {
            WidgetId::About => self.about.close(),
            WidgetId::Skills => self.skills.close(),
            WidgetId::Projects => self.projects.close(),
            WidgetId::Certificates => self.certificates.close(),
            WidgetId::Contacts => self.contacts.close(),
            _ => false,
        };
        self.open_order.retain(|w| *w != widget);
        closed
    }

    /// Overlays currently open, bottom first
    pub fn open_overlays(&self) -> &[WidgetId] {
        &self.open_order
    }

    pub fn topmost(&self) -> Option<WidgetId> {
        self.open_order.last().copied()
    }

    /// Close whatever is on top: the image preview first, then the overlay
    pub fn close_topmost(&mut self) -> bool {
        let Some(top) = self.topmost() else {
            return false;
        };
        if top == WidgetId::Projects {
            if let Some(panel) = self.projects.content_mut() {
                if panel.close_preview() {
                    return true;
                }
            }
        }
        self.close(top)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::markers::{Environment, EnvironmentCall, Marker, RecordingEnvironment};

    struct Harness {
        ticker: Ticker<Msg>,
        listeners: Listeners<WidgetId>,
        markers: Markers,
        env: Rc<RecordingEnvironment>,
    }

    impl Harness {
        fn new() -> Self {
            let env = RecordingEnvironment::new();
            Self {
                ticker: Ticker::new(),
                listeners: Listeners::new(),
                markers: Markers::new(Rc::clone(&env) as Rc<dyn Environment>),
                env,
            }
        }

        fn mount(&self) -> Dashboard {
            Dashboard::mount(
                &self.ticker,
                &self.listeners,
                &self.markers,
                &Config::default(),
                ViewportMode::Wide,
            )
            .unwrap_or_else(|e| panic!("mount failed: {e}"))
        }
    }

    #[test]
    fn test_unmount_releases_everything() {
        let harness = Harness::new();
        let mut dashboard = harness.mount();
        assert_eq!(harness.ticker.active(), 3);
        assert!(!harness.listeners.is_empty());

        dashboard.open(WidgetId::Skills);
        dashboard.open(WidgetId::Projects);
        assert_eq!(harness.markers.holders(Marker::ScrollLock), 2);

        drop(dashboard);
        assert_eq!(harness.ticker.active(), 0);
        assert!(harness.listeners.is_empty());
        assert_eq!(harness.markers.holders(Marker::ScrollLock), 0);
        assert_eq!(
            harness.env.count(EnvironmentCall::Remove(Marker::ScrollLock)),
            1
        );
    }

    #[test]
    fn test_topmost_follows_open_order() {
        let harness = Harness::new();
        let mut dashboard = harness.mount();

        assert!(dashboard.open(WidgetId::About));
        assert!(dashboard.open(WidgetId::Contacts));
        assert!(!dashboard.open(WidgetId::About));
        assert!(!dashboard.open(WidgetId::Clock));
        assert_eq!(
            dashboard.open_overlays(),
            &[WidgetId::About, WidgetId::Contacts]
        );

        assert!(dashboard.close_topmost());
        assert_eq!(dashboard.topmost(), Some(WidgetId::About));
        assert!(dashboard.close_topmost());
        assert!(!dashboard.close_topmost());
        assert!(!harness.markers.is_active(Marker::ScrollLock));
    }

    #[test]
    fn test_close_topmost_closes_preview_first() {
        let harness = Harness::new();
        let mut dashboard = harness.mount();
        dashboard.open(WidgetId::Projects);
        if let Some(panel) = dashboard.projects.content_mut() {
            assert!(panel.preview(0));
        }
        assert_eq!(harness.markers.holders(Marker::ScrollLock), 2);

        assert!(dashboard.close_topmost());
        assert!(dashboard.is_open(WidgetId::Projects));
        assert_eq!(harness.markers.holders(Marker::ScrollLock), 1);

        assert!(dashboard.close_topmost());
        assert!(!dashboard.is_open(WidgetId::Projects));
        assert_eq!(harness.markers.holders(Marker::ScrollLock), 0);
    }

    #[test]
    fn test_certificates_scroll_is_clamped() {
        let mut panel = CertificatesPanel::default();
        panel.scroll_up();
        assert_eq!(panel.scroll(), 0);
        for _ in 0..100 {
            panel.scroll_down();
        }
        assert_eq!(panel.scroll(), CERTIFICATES.len() - 1);
    }
}
