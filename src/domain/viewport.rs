use serde::{Deserialize, Serialize};

/// Default breakpoint, in pixels, between narrow and wide layouts
pub const DEFAULT_BREAKPOINT_PX: u32 = 768;

/// Coarse responsive classification of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewportMode {
    #[default]
    Narrow,
    Wide,
}

impl ViewportMode {
    pub fn is_wide(self) -> bool {
        self == ViewportMode::Wide
    }

    pub fn is_narrow(self) -> bool {
        self == ViewportMode::Narrow
    }
}

/// Fixed width threshold separating [`ViewportMode::Narrow`] from [`ViewportMode::Wide`]
///
/// A viewport is wide only when it is strictly wider than the breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    width: u32,
}

impl Breakpoint {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn classify(&self, width: u32) -> ViewportMode {
        if width > self.width {
            ViewportMode::Wide
        } else {
            ViewportMode::Narrow
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT_PX)
    }
}

/// Notifies only when the viewport crosses the breakpoint
///
/// Raw resize events are fed through [`BreakpointObserver::observe`]; the observer
/// answers `Some(mode)` for the first observation and for every crossing, and
/// `None` for resizes that stay on the same side.
#[derive(Debug, Clone, Default)]
pub struct BreakpointObserver {
    breakpoint: Breakpoint,
    current: Option<ViewportMode>,
}

impl BreakpointObserver {
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint,
            current: None,
        }
    }

    pub fn observe(&mut self, width: u32) -> Option<ViewportMode> {
        let mode = self.breakpoint.classify(width);
        if self.current == Some(mode) {
            return None;
        }
        self.current = Some(mode);
        Some(mode)
    }

    /// Last classified mode, `Narrow` before the first observation
    pub fn mode(&self) -> ViewportMode {
        self.current.unwrap_or_default()
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(0, ViewportMode::Narrow)]
    #[case(767, ViewportMode::Narrow)]
    #[case(768, ViewportMode::Narrow)]
    #[case(769, ViewportMode::Wide)]
    #[case(1920, ViewportMode::Wide)]
    fn test_classify(#[case] width: u32, #[case] expected: ViewportMode) {
        assert_eq!(Breakpoint::default().classify(width), expected);
    }

    #[test]
    fn test_observer_reports_first_observation() {
        let mut observer = BreakpointObserver::new(Breakpoint::default());
        assert_eq!(observer.observe(400), Some(ViewportMode::Narrow));
    }

    #[test]
    fn test_observer_reports_only_crossings() {
        let mut observer = BreakpointObserver::new(Breakpoint::new(100));

        assert_eq!(observer.observe(200), Some(ViewportMode::Wide));
        assert_eq!(observer.observe(150), None);
        assert_eq!(observer.observe(101), None);
        assert_eq!(observer.observe(100), Some(ViewportMode::Narrow));
        assert_eq!(observer.observe(50), None);
        assert_eq!(observer.observe(101), Some(ViewportMode::Wide));
        assert_eq!(observer.mode(), ViewportMode::Wide);
    }
}
