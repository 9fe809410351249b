//! Modal overlay lifecycle
//!
//! An [`OverlayController`] is either closed or holds an open session. The
//! session owns the scroll-lock hold and whatever state lives inside the modal
//! (selected filter, form fields, ...), so closing the overlay or dropping the
//! controller releases both together.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

use super::markers::{Marker, MarkerGuard, Markers};
use crate::domain::element::{Element, ElementId, ElementTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug)]
struct Session<S> {
    content: S,
    _scroll_lock: MarkerGuard,
}

#[derive(Debug)]
pub struct OverlayController<S> {
    markers: Markers,
    session: Option<Session<S>>,
}

impl<S> OverlayController<S> {
    pub fn new(markers: Markers) -> Self {
        Self {
            markers,
            session: None,
        }
    }

    /// Close the overlay and discard its content. Closing twice is a no-op.
    pub fn close(&mut self) -> bool {
        self.session.take().is_some()
    }

    pub fn state(&self) -> OverlayState {
        if self.session.is_some() {
            OverlayState::Open
        } else {
            OverlayState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn content(&self) -> Option<&S> {
        self.session.as_ref().map(|session| &session.content)
    }

    pub fn content_mut(&mut self) -> Option<&mut S> {
        self.session.as_mut().map(|session| &mut session.content)
    }
}

impl<S: Default> OverlayController<S> {
    /// Open the overlay with fresh content. Opening twice is a no-op.
    pub fn open(&mut self) -> bool {
        self.open_with(S::default())
    }
}

impl<S> OverlayController<S> {
    /// Open the overlay with the given content unless it is already open
    pub fn open_with(&mut self, content: S) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(Session {
            content,
            _scroll_lock: self.markers.acquire(Marker::ScrollLock),
        });
        true
    }
}

/// Element ids of a rendered overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayer {
    pub backdrop: ElementId,
    pub content: ElementId,
}

/// Insert a backdrop and its content box into the element tree
///
/// Clicking the backdrop emits `close`. The content box stops propagation, so
/// nothing clicked inside it can reach the backdrop's listener.
pub fn layer<M: Clone>(
    tree: &mut ElementTree<M>,
    viewport: Rect,
    content_area: Rect,
    close: M,
) -> OverlayLayer {
    let backdrop = tree.insert(tree.root(), Element::div(viewport).on_click(close));
    let content = tree.insert(backdrop, Element::div(content_area).stop_propagation());
    OverlayLayer { backdrop, content }
}
