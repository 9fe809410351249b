use std::rc::Rc;

use ratatui::layout::Rect;

pub mod clock;
pub mod contact;
pub mod dashboard;
pub mod profile;
pub mod projects;
pub mod quote;
pub mod skills;
pub mod system;

pub use dashboard::Dashboard;
pub use system::SystemState;

use crate::core::{
    markers::{Environment, Markers},
    msg::{timer::TimerMsg, Msg},
    pointer::PointerTracker,
    scope::{Listeners, Scope},
    ticker::Ticker,
    widget::WidgetId,
};
use crate::domain::{
    element::ElementTree,
    viewport::{Breakpoint, BreakpointObserver, ViewportMode},
};
use crate::infrastructure::{config::Config, environment::Body};

/// Scope owned by one mounted widget
pub type WidgetScope = Scope<Msg, WidgetId>;

/// Which screen is showing
#[derive(Debug)]
pub enum Page {
    /// Simulated loading before the grid mounts
    Loading,
    Ready(Box<Dashboard>),
}

impl Page {
    pub fn is_loading(&self) -> bool {
        matches!(self, Page::Loading)
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            Page::Ready(dashboard) => Some(dashboard),
            Page::Loading => None,
        }
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut Dashboard> {
        match self {
            Page::Ready(dashboard) => Some(dashboard),
            Page::Loading => None,
        }
    }
}

/// Unified application state
///
/// Holds the process-wide pieces (ticker, listener registry, marker
/// registry, pointer tracker) next to the page they serve.
#[derive(Debug)]
pub struct AppState {
    pub page: Page,
    pub system: SystemState,
    pub config: Config,
    pub pointer: PointerTracker,
    pub breakpoint: BreakpointObserver,
    /// Element tree of the last rendered frame
    pub scene: ElementTree<Msg>,
    pub ticker: Ticker<Msg>,
    pub listeners: Listeners<WidgetId>,
    pub markers: Markers,
    pub body: Rc<Body>,
    _root: WidgetScope,
}

impl AppState {
    /// Fresh state on the loading screen for a terminal of the given size
    pub fn new(config: Config, width: u16, height: u16) -> Self {
        let body = Rc::new(Body::new());
        let markers = Markers::new(Rc::clone(&body) as Rc<dyn Environment>);
        let ticker = Ticker::new();
        let listeners = Listeners::new();

        let mut root = WidgetScope::new(WidgetId::Root, &ticker, &listeners);
        root.once(config.timing.loading(), Msg::Timer(TimerMsg::LoadingFinished));

        let mut breakpoint = BreakpointObserver::new(Breakpoint::new(config.layout.breakpoint_px));
        let mut pointer = PointerTracker::new(markers.clone());
        if let Some(mode) = breakpoint.observe(config.layout.width_px(width)) {
            pointer.on_viewport(mode);
        }

        let system = SystemState::with_viewport(width, height);
        Self {
            page: Page::Loading,
            scene: ElementTree::new(system.viewport),
            system,
            config,
            pointer,
            breakpoint,
            ticker,
            listeners,
            markers,
            body,
            _root: root,
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.breakpoint.mode()
    }

    pub fn viewport(&self) -> Rect {
        self.system.viewport
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.page.dashboard()
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut Dashboard> {
        self.page.dashboard_mut()
    }

    /// Overlay that receives Esc and keyboard input
    pub fn topmost_overlay(&self) -> Option<WidgetId> {
        self.dashboard().and_then(Dashboard::topmost)
    }
}
