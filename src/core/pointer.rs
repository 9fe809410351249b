//! Pointer position and hover-target tracking
//!
//! Tracking is only active on wide viewports. On narrow viewports the last
//! position and hover flag stay frozen.

use serde::{Deserialize, Serialize};

use super::markers::{Marker, MarkerGuard, Markers};
use crate::domain::element::{ElementId, ElementTree};
use crate::domain::viewport::ViewportMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerState {
    pub x: u16,
    pub y: u16,
    pub hovering: bool,
}

/// Process-wide pointer tracker
#[derive(Debug)]
pub struct PointerTracker {
    state: PointerState,
    active: bool,
    reset_hover_on_enable: bool,
    mode: ViewportMode,
    markers: Markers,
    cursor_suppression: Option<MarkerGuard>,
}

impl PointerTracker {
    pub fn new(markers: Markers) -> Self {
        Self {
            state: PointerState::default(),
            active: false,
            reset_hover_on_enable: false,
            mode: ViewportMode::Narrow,
            markers,
            cursor_suppression: None,
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    /// Record a new pointer position; ignored while inactive
    pub fn on_move(&mut self, x: u16, y: u16) -> bool {
        if !self.active {
            return false;
        }
        let changed = (self.state.x, self.state.y) != (x, y);
        self.state.x = x;
        self.state.y = y;
        changed
    }

    /// Classify the element under the pointer
    ///
    /// The returned value is the classification itself. The stored `hovering`
    /// flag only follows it while tracking is active.
    pub fn on_hover_check<M: Clone>(&mut self, tree: &ElementTree<M>, target: ElementId) -> bool {
        let interactive = is_interactive(tree, target);
        if self.active {
            self.state.hovering = interactive;
        }
        interactive
    }

    pub fn set_active(&mut self, active: bool) {
        if active == self.active {
            return;
        }
        self.active = active;
        if active {
            if self.reset_hover_on_enable {
                self.state.hovering = false;
                self.reset_hover_on_enable = false;
            }
        } else {
            self.reset_hover_on_enable = true;
        }
    }

    /// Apply a viewport mode change
    ///
    /// Entering wide mode enables tracking and takes a hold on cursor
    /// suppression; leaving it releases that hold and freezes tracking.
    pub fn on_viewport(&mut self, mode: ViewportMode) {
        self.mode = mode;
        match mode {
            ViewportMode::Wide => {
                if self.cursor_suppression.is_none() {
                    self.cursor_suppression = Some(self.markers.acquire(Marker::CursorSuppression));
                }
                self.set_active(true);
            }
            ViewportMode::Narrow => {
                self.cursor_suppression = None;
                self.set_active(false);
            }
        }
    }
}

/// Whether `target` or one of its ancestors is actionable
pub fn is_interactive<M: Clone>(tree: &ElementTree<M>, target: ElementId) -> bool {
    tree.ancestors(target)
        .any(|(_, element)| element.is_interactive())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    use super::*;
    use crate::core::markers::{Environment, EnvironmentCall, RecordingEnvironment};
    use crate::domain::element::{Element, CLICKABLE_CLASS};

    fn tracker() -> (PointerTracker, Rc<RecordingEnvironment>) {
        let env = RecordingEnvironment::new();
        let markers = Markers::new(Rc::clone(&env) as Rc<dyn Environment>);
        (PointerTracker::new(markers), env)
    }

    #[test]
    fn test_narrow_move_leaves_state_unchanged() {
        let (mut tracker, _) = tracker();
        tracker.on_viewport(ViewportMode::Narrow);

        let before = tracker.state();
        assert!(!tracker.on_move(10, 20));
        assert_eq!(tracker.state(), before);
    }

    #[test]
    fn test_wide_move_updates_immediately() {
        let (mut tracker, _) = tracker();
        tracker.on_viewport(ViewportMode::Wide);

        assert!(tracker.on_move(10, 20));
        assert_eq!(
            tracker.state(),
            PointerState {
                x: 10,
                y: 20,
                hovering: false
            }
        );
    }

    #[test]
    fn test_hover_check_walks_ancestors() {
        let (mut tracker, _) = tracker();
        tracker.on_viewport(ViewportMode::Wide);

        let mut tree: ElementTree<()> = ElementTree::new(Rect::new(0, 0, 80, 24));
        let card = tree.insert(
            tree.root(),
            Element::div(Rect::new(0, 0, 40, 10)).class(CLICKABLE_CLASS),
        );
        let label = tree.insert(card, Element::div(Rect::new(1, 1, 10, 1)));
        let plain = tree.insert(tree.root(), Element::div(Rect::new(40, 0, 40, 10)));

        assert!(tracker.on_hover_check(&tree, label));
        assert!(tracker.state().hovering);
        assert!(!tracker.on_hover_check(&tree, plain));
        assert!(!tracker.state().hovering);
    }

    #[test]
    fn test_hover_resets_on_next_enable() {
        let (mut tracker, _) = tracker();
        tracker.on_viewport(ViewportMode::Wide);
        let mut tree: ElementTree<()> = ElementTree::new(Rect::new(0, 0, 80, 24));
        let button = tree.insert(tree.root(), Element::button(Rect::new(0, 0, 5, 1)));
        tracker.on_hover_check(&tree, button);

        tracker.on_viewport(ViewportMode::Narrow);
        assert!(tracker.state().hovering, "frozen while narrow");

        tracker.on_viewport(ViewportMode::Wide);
        assert!(!tracker.state().hovering);
    }

    #[test]
    fn test_cursor_suppression_follows_mode() {
        let (mut tracker, env) = tracker();

        tracker.on_viewport(ViewportMode::Wide);
        tracker.on_viewport(ViewportMode::Wide);
        assert_eq!(
            env.calls(),
            vec![EnvironmentCall::Apply(Marker::CursorSuppression)]
        );

        tracker.on_viewport(ViewportMode::Narrow);
        tracker.on_viewport(ViewportMode::Narrow);
        assert_eq!(
            env.calls(),
            vec![
                EnvironmentCall::Apply(Marker::CursorSuppression),
                EnvironmentCall::Remove(Marker::CursorSuppression),
            ]
        );
    }
}
