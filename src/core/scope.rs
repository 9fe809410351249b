//! Lifecycle scopes
//!
//! A mounted widget owns a [`Scope`]. Every ticker and event listener the
//! widget registers goes through it, and dropping the scope cancels all of them
//! at once, so a widget can never be torn down with a timer still running or a
//! listener still attached.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ticker::{Ticker, TickerHandle};

/// Event sources a widget can listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Resize,
    PointerMove,
    PointerOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Debug)]
struct Registration<O> {
    id: ListenerId,
    kind: EventKind,
    owner: O,
}

#[derive(Debug)]
struct ListenerTable<O> {
    next_id: u64,
    registrations: Vec<Registration<O>>,
}

/// Shared listener registry
///
/// Registrations for one event kind are reported in the order they were added.
pub struct Listeners<O> {
    table: Rc<RefCell<ListenerTable<O>>>,
}

impl<O> Clone for Listeners<O> {
    fn clone(&self) -> Self {
        Self {
            table: Rc::clone(&self.table),
        }
    }
}

impl<O> Default for Listeners<O> {
    fn default() -> Self {
        Self {
            table: Rc::new(RefCell::new(ListenerTable {
                next_id: 0,
                registrations: vec![],
            })),
        }
    }
}

impl<O> fmt::Debug for Listeners<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("registrations", &self.table.borrow().registrations.len())
            .finish()
    }
}

impl<O> Listeners<O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, kind: EventKind, owner: O) -> ListenerId {
        let mut table = self.table.borrow_mut();
        let id = ListenerId(table.next_id);
        table.next_id += 1;
        table.registrations.push(Registration { id, kind, owner });
        id
    }

    pub fn remove(&self, id: ListenerId) -> bool {
        let mut table = self.table.borrow_mut();
        let before = table.registrations.len();
        table.registrations.retain(|registration| registration.id != id);
        table.registrations.len() != before
    }

    pub fn len(&self) -> usize {
        self.table.borrow().registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<O: Clone> Listeners<O> {
    /// Owners listening to `kind`, in registration order
    pub fn owners(&self, kind: EventKind) -> Vec<O> {
        self.table
            .borrow()
            .registrations
            .iter()
            .filter(|registration| registration.kind == kind)
            .map(|registration| registration.owner.clone())
            .collect()
    }
}

/// Everything one mounted widget has registered
pub struct Scope<M, O> {
    owner: O,
    ticker: Ticker<M>,
    listeners: Listeners<O>,
    timers: Vec<TickerHandle>,
    registrations: Vec<ListenerId>,
}

impl<M, O: Clone + fmt::Debug> Scope<M, O> {
    pub fn new(owner: O, ticker: &Ticker<M>, listeners: &Listeners<O>) -> Self {
        Self {
            owner,
            ticker: ticker.clone(),
            listeners: listeners.clone(),
            timers: vec![],
            registrations: vec![],
        }
    }

    /// Start a repeating timer owned by this scope
    pub fn every(&mut self, interval: Duration, payload: M) -> TickerHandle {
        let handle = self.ticker.start(interval, payload);
        self.timers.push(handle);
        handle
    }

    /// Start a one-shot timer owned by this scope
    pub fn once(&mut self, delay: Duration, payload: M) -> TickerHandle {
        let handle = self.ticker.once(delay, payload);
        self.timers.push(handle);
        handle
    }

    pub fn listen(&mut self, kind: EventKind) -> ListenerId {
        let id = self.listeners.add(kind, self.owner.clone());
        self.registrations.push(id);
        id
    }

    pub fn owner(&self) -> &O {
        &self.owner
    }

    /// Timers and listeners still held by this scope
    pub fn held(&self) -> (usize, usize) {
        let timers = self
            .timers
            .iter()
            .filter(|handle| self.ticker.is_active(**handle))
            .count();
        (timers, self.registrations.len())
    }
}

impl<M, O> Scope<M, O> {
    fn release(&mut self) {
        for handle in self.timers.drain(..) {
            self.ticker.cancel(handle);
        }
        for id in self.registrations.drain(..) {
            self.listeners.remove(id);
        }
    }
}

impl<M, O> Drop for Scope<M, O> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<M, O: fmt::Debug> fmt::Debug for Scope<M, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("owner", &self.owner)
            .field("timers", &self.timers)
            .field("registrations", &self.registrations)
            .finish()
    }
}
