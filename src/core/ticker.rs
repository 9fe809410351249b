//! Cancellable periodic timers on a virtual clock
//!
//! The ticker never reads wall-clock time itself. The host loop measures how much
//! time passed and calls [`Ticker::advance`], which yields the payload of every
//! timer that came due, in deadline order. A timer started with an interval
//! first fires one full interval after it was started.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Smallest accepted period; zero would fire forever within one advance
const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickerHandle(u64);

#[derive(Debug)]
struct Timer<M> {
    interval: Duration,
    due: Duration,
    repeat: bool,
    payload: M,
}

#[derive(Debug)]
struct Schedule<M> {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TickerHandle, Timer<M>>,
}

impl<M> Default for Schedule<M> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            timers: BTreeMap::new(),
        }
    }
}

/// Shared timer schedule
///
/// Handles are cheap to clone and all point at the same schedule, so widgets
/// can hold one for cancellation while the host loop drives time forward.
pub struct Ticker<M> {
    schedule: Rc<RefCell<Schedule<M>>>,
}

impl<M> Clone for Ticker<M> {
    fn clone(&self) -> Self {
        Self {
            schedule: Rc::clone(&self.schedule),
        }
    }
}

impl<M> Default for Ticker<M> {
    fn default() -> Self {
        Self {
            schedule: Rc::new(RefCell::new(Schedule::default())),
        }
    }
}

impl<M> fmt::Debug for Ticker<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = self.schedule.borrow();
        f.debug_struct("Ticker")
            .field("now", &schedule.now)
            .field("active", &schedule.timers.len())
            .finish()
    }
}

impl<M> Ticker<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `payload` every `interval`, starting one interval from now
    pub fn start(&self, interval: Duration, payload: M) -> TickerHandle {
        self.schedule_timer(interval, payload, true)
    }

    /// Emit `payload` once after `delay`
    pub fn once(&self, delay: Duration, payload: M) -> TickerHandle {
        self.schedule_timer(delay, payload, false)
    }

    /// Stop a timer. Cancelling an unknown or already cancelled handle is a no-op.
    pub fn cancel(&self, handle: TickerHandle) -> bool {
        let removed = self.schedule.borrow_mut().timers.remove(&handle).is_some();
        if removed {
            log::trace!("cancelled ticker {handle:?}");
        }
        removed
    }

    pub fn is_active(&self, handle: TickerHandle) -> bool {
        self.schedule.borrow().timers.contains_key(&handle)
    }

    /// Number of live timers
    pub fn active(&self) -> usize {
        self.schedule.borrow().timers.len()
    }

    pub fn now(&self) -> Duration {
        self.schedule.borrow().now
    }

    /// Time until the earliest pending timer, if any
    pub fn next_due(&self) -> Option<Duration> {
        let schedule = self.schedule.borrow();
        schedule
            .timers
            .values()
            .map(|timer| timer.due.saturating_sub(schedule.now))
            .min()
    }

    fn schedule_timer(&self, interval: Duration, payload: M, repeat: bool) -> TickerHandle {
        let interval = interval.max(MIN_INTERVAL);
        let mut schedule = self.schedule.borrow_mut();
        let handle = TickerHandle(schedule.next_id);
        schedule.next_id += 1;
        let due = schedule.now + interval;
        schedule.timers.insert(
            handle,
            Timer {
                interval,
                due,
                repeat,
                payload,
            },
        );
        log::trace!("started ticker {handle:?} every {interval:?} (repeat: {repeat})");
        handle
    }
}

impl<M: Clone> Ticker<M> {
    /// Move the clock forward, yielding due payloads one at a time
    ///
    /// Timers are looked up lazily, so a timer cancelled while the iterator is
    /// being consumed never fires afterwards. Repeating timers that missed
    /// several periods fire once per period.
    pub fn advance(&self, elapsed: Duration) -> Fired<M> {
        let deadline = self.now() + elapsed;
        Fired {
            ticker: self.clone(),
            deadline,
        }
    }

    fn pop_due(&self, deadline: Duration) -> Option<M> {
        let mut schedule = self.schedule.borrow_mut();
        let handle = schedule
            .timers
            .iter()
            .filter(|(_, timer)| timer.due <= deadline)
            .min_by_key(|(handle, timer)| (timer.due, **handle))
            .map(|(handle, _)| *handle);

        let Some(handle) = handle else {
            schedule.now = schedule.now.max(deadline);
            return None;
        };

        let timer = schedule.timers.get_mut(&handle)?;
        let due = timer.due;
        let payload = timer.payload.clone();
        if timer.repeat {
            timer.due += timer.interval;
        } else {
            schedule.timers.remove(&handle);
        }
        schedule.now = due;
        Some(payload)
    }
}

/// Iterator over the payloads that came due during one [`Ticker::advance`]
pub struct Fired<M> {
    ticker: Ticker<M>,
    deadline: Duration,
}

impl<M: Clone> Iterator for Fired<M> {
    type Item = M;

    fn next(&mut self) -> Option<M> {
        self.ticker.pop_due(self.deadline)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_first_tick_after_one_interval() {
        let ticker = Ticker::new();
        ticker.start(ms(1000), "clock");

        assert_eq!(ticker.advance(ms(0)).count(), 0);
        assert_eq!(ticker.advance(ms(999)).count(), 0);
        assert_eq!(ticker.advance(ms(1)).collect::<Vec<_>>(), vec!["clock"]);
    }

    #[test]
    fn test_catch_up_fires_once_per_period() {
        let ticker = Ticker::new();
        ticker.start(ms(1000), ());

        assert_eq!(ticker.advance(ms(3500)).count(), 3);
        assert_eq!(ticker.advance(ms(500)).count(), 1);
        assert_eq!(ticker.now(), ms(4000));
    }

    #[test]
    fn test_independent_periods_ordered_by_deadline() {
        let ticker = Ticker::new();
        ticker.start(ms(3000), "title");
        ticker.start(ms(1000), "clock");

        let fired: Vec<_> = ticker.advance(ms(3000)).collect();
        assert_eq!(fired, vec!["clock", "clock", "title", "clock"]);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let ticker = Ticker::new();
        let handle = ticker.start(ms(10), ());

        assert!(ticker.cancel(handle));
        assert!(!ticker.cancel(handle));
        assert!(!ticker.is_active(handle));
        assert_eq!(ticker.advance(ms(100)).count(), 0);
    }

    #[test]
    fn test_cancel_during_advance_stops_remaining_ticks() {
        let ticker = Ticker::new();
        let handle = ticker.start(ms(10), ());

        let mut fired = ticker.advance(ms(100));
        assert_eq!(fired.next(), Some(()));
        ticker.cancel(handle);
        assert_eq!(fired.next(), None);
    }

    #[test]
    fn test_once_fires_a_single_time() {
        let ticker = Ticker::new();
        let handle = ticker.once(ms(2000), "loaded");

        assert_eq!(ticker.advance(ms(5000)).collect::<Vec<_>>(), vec!["loaded"]);
        assert!(!ticker.is_active(handle));
        assert_eq!(ticker.active(), 0);
    }

    #[test]
    fn test_next_due() {
        let ticker = Ticker::new();
        assert_eq!(ticker.next_due(), None);

        ticker.start(ms(1000), ());
        ticker.start(ms(300), ());
        assert_eq!(ticker.next_due(), Some(ms(300)));

        let _ = ticker.advance(ms(250)).count();
        assert_eq!(ticker.next_due(), Some(ms(50)));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let ticker = Ticker::new();
        ticker.start(Duration::ZERO, ());
        assert_eq!(ticker.advance(ms(5)).count(), 5);
    }
}
