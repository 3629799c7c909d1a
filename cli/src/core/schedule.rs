//! # MIC Deferred Task Scheduler
//!
//! File: cli/src/core/schedule.rs
//!
//! ## Overview
//!
//! A single-threaded queue of one-shot deferred tasks driven by a virtual
//! clock. Both the lookup result and each bot reply are delivered through it
//! after the configured delay.
//!
//! The scheduler never looks at the wall clock. Whoever owns it decides how
//! virtual time moves forward: tests call [`Scheduler::advance_by`] directly,
//! while the CLI maps tokio's monotonic clock onto it (see `common::pacing`).
//!
//! ## Ordering
//!
//! - Tasks fire in order of their due time.
//! - Tasks due at the same instant fire in the order they were scheduled.
//! - A task always fires exactly once; there is no cancellation or retry.
//!
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;
use tracing::trace;

/// Identifies a task scheduled on a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// A task whose due time has been reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    pub id: TaskId,
    /// Virtual time at which the task was due.
    pub due: Duration,
    pub payload: T,
}

#[derive(Debug)]
struct Pending<T> {
    due: Duration,
    id: TaskId,
    payload: T,
}

// BinaryHeap is a max-heap; invert so the earliest (due, id) sits on top.
impl<T> Ord for Pending<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl<T> PartialOrd for Pending<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Pending<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.id == other.id
    }
}

impl<T> Eq for Pending<T> {}

/// Virtual-time queue of one-shot deferred tasks.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    pending: BinaryHeap<Pending<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Creates an empty scheduler with its clock at zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: BinaryHeap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `payload` to fire once `delay` of virtual time has passed.
    pub fn schedule_after(&mut self, delay: Duration, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let due = self.now + delay;
        trace!("Scheduling task {:?} due at {:?}", id, due);
        self.pending.push(Pending { due, id, payload });
        id
    }

    /// Virtual time at which the earliest pending task is due.
    pub fn next_due_at(&self) -> Option<Duration> {
        self.pending.peek().map(|p| p.due)
    }

    /// Number of tasks still waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Moves the clock forward by `delta` and returns every task that became
    /// due, in firing order.
    pub fn advance_by(&mut self, delta: Duration) -> Vec<Fired<T>> {
        self.advance_to(self.now + delta)
    }

    /// Moves the clock to `target` and returns every task that became due, in
    /// firing order. A target in the past leaves the clock where it is but
    /// still fires anything already due.
    pub fn advance_to(&mut self, target: Duration) -> Vec<Fired<T>> {
        if target > self.now {
            self.now = target;
        }
        let mut fired = Vec::new();
        while self.pending.peek().is_some_and(|p| p.due <= self.now) {
            if let Some(Pending { due, id, payload }) = self.pending.pop() {
                trace!("Firing task {:?} (due {:?}, now {:?})", id, due, self.now);
                fired.push(Fired { id, due, payload });
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payloads<T: Clone>(fired: &[Fired<T>]) -> Vec<T> {
        fired.iter().map(|f| f.payload.clone()).collect()
    }

    #[test]
    fn nothing_fires_before_the_delay_elapses() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_after(Duration::from_secs(1), "reply");

        assert!(scheduler.advance_by(Duration::from_millis(999)).is_empty());
        assert_eq!(scheduler.pending_count(), 1);

        let fired = scheduler.advance_by(Duration::from_millis(1));
        assert_eq!(payloads(&fired), vec!["reply"]);
        assert_eq!(fired[0].due, Duration::from_secs(1));
        assert!(scheduler.is_idle());
    }

    #[test]
    fn tasks_fire_in_due_order_not_submission_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_after(Duration::from_millis(300), "slow");
        scheduler.schedule_after(Duration::from_millis(100), "fast");

        assert_eq!(scheduler.next_due_at(), Some(Duration::from_millis(100)));
        let fired = scheduler.advance_by(Duration::from_secs(1));
        assert_eq!(payloads(&fired), vec!["fast", "slow"]);
    }

    #[test]
    fn simultaneous_tasks_fire_in_scheduling_order() {
        let mut scheduler = Scheduler::new();
        let first = scheduler.schedule_after(Duration::from_secs(1), 1);
        let second = scheduler.schedule_after(Duration::from_secs(1), 2);
        let third = scheduler.schedule_after(Duration::from_secs(1), 3);
        assert!(first < second && second < third);

        let fired = scheduler.advance_by(Duration::from_secs(1));
        assert_eq!(payloads(&fired), vec![1, 2, 3]);
    }

    #[test]
    fn delays_are_relative_to_the_current_virtual_time() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_by(Duration::from_millis(400));
        scheduler.schedule_after(Duration::from_secs(1), ());

        assert_eq!(scheduler.next_due_at(), Some(Duration::from_millis(1400)));
        assert!(scheduler.advance_to(Duration::from_millis(1399)).is_empty());
        assert_eq!(scheduler.advance_to(Duration::from_millis(1400)).len(), 1);
    }

    #[test]
    fn zero_delay_fires_without_moving_the_clock() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_after(Duration::ZERO, "now");
        let fired = scheduler.advance_by(Duration::ZERO);
        assert_eq!(payloads(&fired), vec!["now"]);
        assert_eq!(scheduler.now(), Duration::ZERO);
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut scheduler: Scheduler<()> = Scheduler::new();
        scheduler.advance_to(Duration::from_secs(5));
        scheduler.advance_to(Duration::from_secs(2));
        assert_eq!(scheduler.now(), Duration::from_secs(5));
    }
}
