// Scheduled-task queue driven by host ticks.
// The page's setInterval/setTimeout pairs become owned entries here so the
// controller can enforce its single-live-timer invariant: cancel the old
// handle, then schedule the replacement.

use crate::types::Timestamp;

/// Opaque timer handle. Ids are never reused within one queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct TimerEntry<K> {
    id: TimerId,
    deadline: Timestamp,
    period_ms: Option<u64>,
    task: K,
}

/// Deadline-ordered queue of one-shot and repeating tasks.
#[derive(Debug)]
pub struct TimerQueue<K> {
    next_id: u64,
    entries: Vec<TimerEntry<K>>,
}

impl<K: Copy> TimerQueue<K> {
    pub fn new() -> Self {
        TimerQueue {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Schedule a one-shot task `delay_ms` from `now`.
    pub fn schedule(&mut self, now: Timestamp, delay_ms: u64, task: K) -> TimerId {
        self.push(now.saturating_add(delay_ms), None, task)
    }

    /// Schedule a repeating task firing every `period_ms` from `now`.
    /// A zero period is clamped to 1ms so polling always terminates.
    pub fn schedule_repeating(&mut self, now: Timestamp, period_ms: u64, task: K) -> TimerId {
        let period = period_ms.max(1);
        self.push(now.saturating_add(period), Some(period), task)
    }

    fn push(&mut self, deadline: Timestamp, period_ms: Option<u64>, task: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            deadline,
            period_ms,
            task,
        });
        id
    }

    /// Remove a task. Cancelling an already-fired or unknown id is a no-op.
    pub fn cancel(&mut self, id: TimerId) {
        self.entries.retain(|e| e.id != id);
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pop the earliest task due at or before `now`, if any. Repeating tasks
    /// reschedule by their period, so a queue polled after a long gap fires
    /// once per missed period (ties break in scheduling order). Callers loop
    /// until `None`; cancellations between polls drop any still-due fires.
    pub fn poll_one(&mut self, now: Timestamp) -> Option<K> {
        let pos = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.id.0))
            .map(|(i, _)| i)?;

        let task = self.entries[pos].task;
        match self.entries[pos].period_ms {
            Some(period) => {
                let entry = &mut self.entries[pos];
                entry.deadline = entry.deadline.saturating_add(period);
            }
            None => {
                self.entries.swap_remove(pos);
            }
        }
        Some(task)
    }
}

impl<K: Copy> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}
