//! Virtual-clock task queue for delayed transitions and animation steps.
use serde::{Deserialize, Serialize};

/// Handle returned by [`Scheduler::schedule`], usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    id: TimerId,
    due_ms: u64,
    task: T,
}

/// Delayed tasks ordered by due time, then by scheduling order.
///
/// Time only moves when [`Scheduler::advance`] is called, so callers control
/// the clock: browsers feed it elapsed wall time, tests feed it exact steps.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn schedule(&mut self, delay_ms: u64, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due_ms: self.now_ms.saturating_add(delay_ms),
            task,
        });
        id
    }

    /// Returns `true` if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|pending| pending.id != id);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Milliseconds until the earliest pending task, if any.
    #[must_use]
    pub fn next_due_in(&self) -> Option<u64> {
        self.pending
            .iter()
            .map(|pending| pending.due_ms.saturating_sub(self.now_ms))
            .min()
    }

    /// Pop the earliest task due at or before `deadline_ms`, moving the clock
    /// to its due time.
    ///
    /// Callers that fire tasks one at a time can schedule follow-ups between
    /// pops; a follow-up that falls inside the same window fires in order.
    pub fn pop_due(&mut self, deadline_ms: u64) -> Option<T> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due_ms <= deadline_ms)
            .min_by_key(|(_, pending)| (pending.due_ms, pending.id))
            .map(|(idx, _)| idx)?;
        let pending = self.pending.remove(position);
        self.now_ms = self.now_ms.max(pending.due_ms);
        Some(pending.task)
    }

    /// Move the clock forward by `elapsed_ms`, returning every task that came
    /// due in firing order.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<T> {
        let deadline = self.now_ms.saturating_add(elapsed_ms);
        let mut fired = Vec::new();
        while let Some(task) = self.pop_due(deadline) {
            fired.push(task);
        }
        self.advance_to(deadline);
        fired
    }

    /// Move the clock to `deadline_ms` without firing anything; the clock
    /// never moves backwards.
    pub fn advance_to(&mut self, deadline_ms: u64) {
        self.now_ms = self.now_ms.max(deadline_ms);
    }
}
