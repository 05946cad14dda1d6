// File: crates/clock-core/src/schedule.rs
// Summary: Repaint scheduling primitive and a virtual-time timer queue implementing it.

use std::time::Duration;

/// Identifies one scheduled repaint. Handles are never reused by a scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// Host scheduling primitive. Every task stands for "deliver a repaint to the widget";
/// the host dispatches due handles back to it.
pub trait Scheduler {
    fn schedule_after(&mut self, delay: Duration) -> TaskHandle;
    fn schedule_now(&mut self) -> TaskHandle;
    /// Returns `false` if the task already fired or was cancelled.
    fn cancel(&mut self, handle: TaskHandle) -> bool;
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    due: Duration,
    handle: TaskHandle,
}

/// Timer queue over an explicitly advanced clock.
///
/// Time is a `Duration` since the queue's origin; hosts map it onto a real clock
/// (the window demo uses `Instant` at startup), tests advance it by hand.
/// Tasks scheduled while the caller is handling a batch are never part of that batch.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<Entry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|e| e.handle == handle)
    }

    /// Earliest due time, if any task is pending.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|e| e.due).min()
    }

    pub fn advance(&mut self, by: Duration) -> Vec<TaskHandle> {
        let target = self.now.saturating_add(by);
        self.advance_to(target)
    }

    /// Move the clock to `t` (never backwards) and pop every task due by then,
    /// ordered by due time, then by scheduling order.
    pub fn advance_to(&mut self, t: Duration) -> Vec<TaskHandle> {
        self.now = self.now.max(t);
        let now = self.now;

        let (mut due, rest): (Vec<Entry>, Vec<Entry>) =
            self.pending.drain(..).partition(|e| e.due <= now);
        self.pending = rest;

        due.sort_by_key(|e| (e.due, e.handle));
        due.into_iter().map(|e| e.handle).collect()
    }

    fn push(&mut self, due: Duration) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Entry { due, handle });
        handle
    }
}

impl Scheduler for TimerQueue {
    fn schedule_after(&mut self, delay: Duration) -> TaskHandle {
        self.push(self.now.saturating_add(delay))
    }

    fn schedule_now(&mut self) -> TaskHandle {
        self.push(self.now)
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|e| e.handle != handle);
        self.pending.len() != before
    }
}
