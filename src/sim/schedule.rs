//! Deadline-ordered task queue
//!
//! Stands in for a host timer service: the session pushes one-shot tasks with
//! absolute deadlines on its own clock and drains the due ones at the start of
//! every tick. Tasks are never cancelled; resetting a session means building a
//! new queue.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::state::EnemyKind;

/// Work the spawner can defer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Launch the next wave of the script
    AdvanceWave,
    /// Put one enemy of this kind on the perimeter
    Spawn(EnemyKind),
}

#[derive(Debug, Clone)]
struct Entry {
    deadline: f64,
    seq: u64,
    task: Task,
}

// BinaryHeap is a max-heap, so the ordering is reversed: earliest deadline
// first, then earliest insertion.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .total_cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Pending one-shot tasks keyed by deadline (seconds on the session clock)
#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run once the clock reaches `deadline`
    pub fn schedule_at(&mut self, deadline: f64, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            deadline,
            seq,
            task,
        });
    }

    /// Pop the earliest task whose deadline is at or before `now`
    ///
    /// Returns the deadline the task was due at so follow-up work can be
    /// scheduled relative to it rather than to the (later) drain time.
    pub fn pop_due(&mut self, now: f64) -> Option<(f64, Task)> {
        if self.heap.peek()?.deadline > now {
            return None;
        }
        self.heap.pop().map(|e| (e.deadline, e.task))
    }

    /// Deadline of the next pending task
    pub fn next_deadline(&self) -> Option<f64> {
        self.heap.peek().map(|e| e.deadline)
    }

    /// Number of pending tasks matching `task`
    pub fn count(&self, task: Task) -> usize {
        self.heap.iter().filter(|e| e.task == task).count()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
