//! Single-threaded cooperative timers.
//!
//! A [`TimerQueue`] keeps its own virtual clock, measured from the moment it
//! was created. The owner advances that clock from its frame loop and pops
//! due timers one at a time, so a callback can cancel or schedule timers
//! before the next one is considered. Nothing here runs on another thread.

use std::time::Duration;

/// Revocable handle to a scheduled timer. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Schedule {
    Once,
    Every(Duration),
}

#[derive(Debug)]
struct Entry<E> {
    handle: TimerHandle,
    deadline: Duration,
    schedule: Schedule,
    event: E,
}

#[derive(Debug)]
pub struct TimerQueue<E> {
    now: Duration,
    next_handle: u64,
    entries: Vec<Entry<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_handle: 0,
            entries: Vec::new(),
        }
    }

    /// Current position of the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|entry| entry.handle == handle)
    }

    /// Fires `event` once, `delay` from now.
    pub fn schedule_once(&mut self, delay: Duration, event: E) -> TimerHandle {
        self.push(delay, Schedule::Once, event)
    }

    /// Fires `event` every `interval`, first time one interval from now.
    ///
    /// A zero period cannot advance the clock, so it fires once.
    pub fn schedule_repeating(&mut self, interval: Duration, event: E) -> TimerHandle {
        debug_assert!(
            !interval.is_zero(),
            "repeating timer needs a non-zero period"
        );
        if interval.is_zero() {
            return self.push(interval, Schedule::Once, event);
        }
        self.push(interval, Schedule::Every(interval), event)
    }

    /// Revokes a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        self.entries.len() != before
    }

    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.entries.len();
        self.entries.clear();
        cancelled
    }

    /// Moves the clock forward to `until` without firing anything.
    ///
    /// Call this after [`pop_due`](Self::pop_due) has drained every timer due
    /// by `until`; the clock never runs backwards.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// One-shot deadlines past the end of the clock saturate at
    /// `Duration::MAX`. Repeating timers that would start there are never
    /// queued: the handle is returned already expired.
    fn push(&mut self, delay: Duration, schedule: Schedule, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        let deadline = match (self.now.checked_add(delay), schedule) {
            (Some(deadline), _) => deadline,
            (None, Schedule::Once) => Duration::MAX,
            (None, Schedule::Every(_)) => return handle,
        };
        self.entries.push(Entry {
            handle,
            deadline,
            schedule,
            event,
        });
        handle
    }

    fn earliest_due(&self, until: Duration) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline <= until)
            .min_by_key(|(_, entry)| (entry.deadline, entry.handle.0))
            .map(|(position, _)| position)
    }
}

impl<E: Clone> TimerQueue<E> {
    /// Pops the earliest timer due at or before `until`.
    ///
    /// The clock jumps to that timer's deadline. One-shot timers are removed;
    /// repeating timers stay pending under the same handle, one period later.
    /// Ties are resolved in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, E)> {
        let position = self.earliest_due(until)?;
        let entry = &self.entries[position];
        let fired = (entry.handle, entry.event.clone());
        let schedule = entry.schedule;
        self.now = self.now.max(entry.deadline);

        let next = match schedule {
            Schedule::Once => None,
            Schedule::Every(interval) => self.entries[position].deadline.checked_add(interval),
        };
        match next {
            Some(deadline) => self.entries[position].deadline = deadline,
            None => {
                self.entries.swap_remove(position);
            }
        }
        Some(fired)
    }
}
