//! Reference-counted global markers
//!
//! Overlays and the pointer tracker toggle process-wide style markers (scroll
//! lock, cursor suppression). Every holder acquires a [`MarkerGuard`]; the
//! environment sees `apply` when the first guard for a marker is taken and
//! `remove` when the last one is dropped.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Marker {
    /// Page scrolling is suspended while a modal is showing
    ScrollLock,
    /// The native cursor is hidden in favour of the custom one
    CursorSuppression,
}

/// Capability that makes a marker visible
///
/// The host decides what applying a marker means; tests record the calls.
pub trait Environment {
    fn apply(&self, marker: Marker);
    fn remove(&self, marker: Marker);
}

#[derive(Default)]
struct Counts {
    holders: BTreeMap<Marker, usize>,
}

/// Shared registry of marker holders
///
/// Cloning yields another handle to the same counts.
#[derive(Clone)]
pub struct Markers {
    counts: Rc<RefCell<Counts>>,
    environment: Rc<dyn Environment>,
}

impl Markers {
    pub fn new(environment: Rc<dyn Environment>) -> Self {
        Self {
            counts: Rc::new(RefCell::new(Counts::default())),
            environment,
        }
    }

    pub fn acquire(&self, marker: Marker) -> MarkerGuard {
        let first = {
            let mut counts = self.counts.borrow_mut();
            let holders = counts.holders.entry(marker).or_insert(0);
            *holders += 1;
            *holders == 1
        };
        if first {
            log::debug!("applying marker {marker}");
            self.environment.apply(marker);
        }
        MarkerGuard {
            markers: self.clone(),
            marker,
        }
    }

    pub fn holders(&self, marker: Marker) -> usize {
        self.counts
            .borrow()
            .holders
            .get(&marker)
            .copied()
            .unwrap_or(0)
    }

    pub fn is_active(&self, marker: Marker) -> bool {
        self.holders(marker) > 0
    }

    fn release(&self, marker: Marker) {
        let last = {
            let mut counts = self.counts.borrow_mut();
            match counts.holders.get_mut(&marker) {
                Some(holders) if *holders > 0 => {
                    *holders -= 1;
                    *holders == 0
                }
                _ => false,
            }
        };
        if last {
            log::debug!("removing marker {marker}");
            self.environment.remove(marker);
        }
    }
}

impl fmt::Debug for Markers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Markers")
            .field("holders", &self.counts.borrow().holders)
            .finish_non_exhaustive()
    }
}

/// One hold on a marker, released on drop
#[must_use = "dropping the guard releases the marker immediately"]
pub struct MarkerGuard {
    markers: Markers,
    marker: Marker,
}

impl MarkerGuard {
    pub fn marker(&self) -> Marker {
        self.marker
    }
}

impl fmt::Debug for MarkerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MarkerGuard").field(&self.marker).finish()
    }
}

impl Drop for MarkerGuard {
    fn drop(&mut self) {
        self.markers.release(self.marker);
    }
}

/// Environment that records every call, for tests and headless runs
#[derive(Debug, Default)]
pub struct RecordingEnvironment {
    calls: RefCell<Vec<EnvironmentCall>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentCall {
    Apply(Marker),
    Remove(Marker),
}

impl RecordingEnvironment {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<EnvironmentCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: EnvironmentCall) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }
}

impl Environment for RecordingEnvironment {
    fn apply(&self, marker: Marker) {
        self.calls.borrow_mut().push(EnvironmentCall::Apply(marker));
    }

    fn remove(&self, marker: Marker) {
        self.calls.borrow_mut().push(EnvironmentCall::Remove(marker));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn markers() -> (Markers, Rc<RecordingEnvironment>) {
        let env = RecordingEnvironment::new();
        let markers = Markers::new(Rc::clone(&env) as Rc<dyn Environment>);
        (markers, env)
    }

    #[test]
    fn test_first_acquire_applies_and_last_release_removes() {
        let (markers, env) = markers();

        let a = markers.acquire(Marker::ScrollLock);
        let b = markers.acquire(Marker::ScrollLock);
        assert_eq!(markers.holders(Marker::ScrollLock), 2);
        assert_eq!(env.calls(), vec![EnvironmentCall::Apply(Marker::ScrollLock)]);

        drop(a);
        assert!(markers.is_active(Marker::ScrollLock));
        assert_eq!(env.count(EnvironmentCall::Remove(Marker::ScrollLock)), 0);

        drop(b);
        assert!(!markers.is_active(Marker::ScrollLock));
        assert_eq!(
            env.calls(),
            vec![
                EnvironmentCall::Apply(Marker::ScrollLock),
                EnvironmentCall::Remove(Marker::ScrollLock),
            ]
        );
    }

    #[test]
    fn test_markers_are_counted_independently() {
        let (markers, env) = markers();

        let scroll = markers.acquire(Marker::ScrollLock);
        let cursor = markers.acquire(Marker::CursorSuppression);
        drop(scroll);

        assert!(markers.is_active(Marker::CursorSuppression));
        assert!(!markers.is_active(Marker::ScrollLock));
        assert_eq!(env.count(EnvironmentCall::Remove(Marker::CursorSuppression)), 0);
        drop(cursor);
        assert_eq!(env.count(EnvironmentCall::Remove(Marker::CursorSuppression)), 1);
    }

    #[test]
    fn test_marker_display() {
        assert_eq!(Marker::ScrollLock.to_string(), "scroll-lock");
        assert_eq!(Marker::CursorSuppression.to_string(), "cursor-suppression");
    }
}
