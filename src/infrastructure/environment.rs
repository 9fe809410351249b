//! Terminal-side marker environment
//!
//! [`Body`] plays the part of the page's class list: markers applied by the
//! core show up here and the renderer reads them back when drawing.

use std::cell::RefCell;
use std::collections::BTreeSet;

use crate::core::markers::{Environment, Marker};

#[derive(Debug, Default)]
pub struct Body {
    applied: RefCell<BTreeSet<Marker>>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, marker: Marker) -> bool {
        self.applied.borrow().contains(&marker)
    }

    /// Markers currently applied, in a stable order
    pub fn classes(&self) -> Vec<Marker> {
        self.applied.borrow().iter().copied().collect()
    }
}

impl Environment for Body {
    fn apply(&self, marker: Marker) {
        if self.applied.borrow_mut().insert(marker) {
            log::debug!("body: +{marker}");
        }
    }

    fn remove(&self, marker: Marker) {
        if self.applied.borrow_mut().remove(&marker) {
            log::debug!("body: -{marker}");
        }
    }
}
