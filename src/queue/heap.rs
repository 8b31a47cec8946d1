//! Priority Task Queue Module
//!
//! Binary min-heap of tasks keyed by `(priority, sequence)`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use crate::error::{Error, Result};
use crate::models::{QueueSnapshot, TaskSummary};
use crate::queue::{PriorityBounds, Task};

// == Priority Task Queue ==
/// Queue serving the lowest priority value first, FIFO among equals.
///
/// Backed by an array-based binary heap: `add_task` and `remove_next` are
/// O(log n), `peek` is O(1). Ties are broken by a per-queue sequence number
/// assigned at insertion, so equal-priority tasks leave in arrival order.
#[derive(Debug, Clone)]
pub struct PriorityTaskQueue<T> {
    /// Max-heap over reversed tasks, so the root is the next task to serve
    heap: BinaryHeap<Reverse<Task<T>>>,
    /// Sequence number handed to the next accepted task
    next_sequence: u64,
    /// Accepted priority range
    bounds: PriorityBounds,
}

impl<T> PriorityTaskQueue<T> {
    // == Constructor ==
    /// Creates an empty queue accepting priorities 1 through 10.
    pub fn new() -> Self {
        Self::with_bounds(PriorityBounds::default())
    }

    /// Creates an empty queue accepting priorities within `bounds`.
    pub fn with_bounds(bounds: PriorityBounds) -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            bounds,
        }
    }

    // == Add Task ==
    /// Adds a task to the queue.
    ///
    /// # Arguments
    /// * `name` - Task name/description
    /// * `priority` - Priority level (1 = highest, 10 = lowest by default)
    /// * `payload` - Caller data carried with the task
    ///
    /// # Errors
    /// Returns [`Error::InvalidPriority`] if `priority` is out of range. The
    /// queue and its sequence counter are left unchanged in that case.
    pub fn add_task(&mut self, name: impl Into<String>, priority: i64, payload: T) -> Result<()> {
        let priority = self.bounds.check(priority)?;

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap
            .push(Reverse(Task::new(name.into(), priority, sequence, payload)));
        Ok(())
    }

    // == Remove Next ==
    /// Removes and returns the task with the smallest `(priority, sequence)`.
    ///
    /// # Errors
    /// Returns [`Error::EmptyQueue`] if no tasks remain.
    pub fn remove_next(&mut self) -> Result<Task<T>> {
        self.heap
            .pop()
            .map(|Reverse(task)| task)
            .ok_or(Error::EmptyQueue)
    }

    // == Peek ==
    /// Returns the task `remove_next` would return, without removing it.
    ///
    /// # Errors
    /// Returns [`Error::EmptyQueue`] if no tasks remain.
    pub fn peek(&self) -> Result<&Task<T>> {
        self.heap
            .peek()
            .map(|Reverse(task)| task)
            .ok_or(Error::EmptyQueue)
    }

    // == Length ==
    /// Returns the number of queued tasks.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the accepted priority range.
    pub fn bounds(&self) -> PriorityBounds {
        self.bounds
    }

    /// Returns the sequence number the next accepted task will receive.
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    // == Clear ==
    /// Drops every queued task. The sequence counter keeps counting.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    // == Drain ==
    /// Removes all tasks and returns them in service order.
    pub fn drain_ordered(&mut self) -> Vec<Task<T>> {
        let mut tasks = Vec::with_capacity(self.heap.len());
        while let Some(Reverse(task)) = self.heap.pop() {
            tasks.push(task);
        }
        tasks
    }

    // == Iterate ==
    /// Iterates queued tasks in arbitrary heap order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Task<T>> + '_ {
        self.heap.iter().map(|Reverse(task)| task)
    }

    /// Borrows all queued tasks in service order without removing them.
    pub fn ordered(&self) -> Vec<&Task<T>> {
        let mut tasks: Vec<&Task<T>> = self.iter().collect();
        tasks.sort_unstable();
        tasks
    }

    // == Snapshot ==
    /// Captures the queue contents in service order in a serializable form.
    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            len: self.len(),
            tasks: self.ordered().into_iter().map(TaskSummary::from).collect(),
        }
    }
}

impl<T> Default for PriorityTaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for PriorityTaskQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PriorityTaskQueue({}): [", self.len())?;
        for (i, task) in self.ordered().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", task)?;
        }
        write!(f, "]")
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn names(tasks: &[Task<()>]) -> Vec<&str> {
        tasks.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_queue_new() {
        let queue: PriorityTaskQueue<()> = PriorityTaskQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.next_sequence(), 0);
        assert_eq!(queue.bounds(), PriorityBounds::default());
    }

    #[test]
    fn test_priority_order() {
        let mut queue = PriorityTaskQueue::new();
        queue.add_task("Low priority task", 5, ()).unwrap();
        queue.add_task("High priority task", 1, ()).unwrap();
        queue.add_task("Medium priority task", 3, ()).unwrap();
        assert_eq!(queue.len(), 3);

        let priorities: Vec<i64> = (0..3)
            .map(|_| queue.remove_next().unwrap().priority)
            .collect();
        assert_eq!(priorities, vec![1, 3, 5]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_fifo_tie_break() {
        let mut queue = PriorityTaskQueue::new();
        queue.add_task("first", 2, ()).unwrap();
        queue.add_task("urgent", 1, ()).unwrap();
        queue.add_task("second", 2, ()).unwrap();
        queue.add_task("third", 2, ()).unwrap();

        let drained = queue.drain_ordered();
        assert_eq!(names(&drained), vec!["urgent", "first", "second", "third"]);
    }

    #[test]
    fn test_out_of_range_priorities_rejected() {
        let mut queue = PriorityTaskQueue::new();
        queue.add_task("ok", 10, ()).unwrap();

        for priority in [0, 11, -1, i64::MAX] {
            let result = queue.add_task("bad", priority, ());
            assert_eq!(
                result,
                Err(Error::InvalidPriority {
                    priority,
                    min: 1,
                    max: 10
                })
            );
        }

        assert_eq!(queue.len(), 1);
        // Rejected tasks never consumed a sequence number
        assert_eq!(queue.next_sequence(), 1);
    }

    #[test]
    fn test_custom_bounds() {
        let mut queue = PriorityTaskQueue::with_bounds(PriorityBounds::new(0, 3).unwrap());
        queue.add_task("zero", 0, ()).unwrap();
        assert!(queue.add_task("four", 4, ()).is_err());
        assert_eq!(queue.peek().unwrap().name, "zero");
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut queue: PriorityTaskQueue<()> = PriorityTaskQueue::new();
        assert_eq!(queue.remove_next().unwrap_err(), Error::EmptyQueue);
        assert_eq!(queue.peek().unwrap_err(), Error::EmptyQueue);
    }

    #[test]
    fn test_peek_is_idempotent() {
        let mut queue = PriorityTaskQueue::new();
        queue.add_task("b", 2, "payload b").unwrap();
        queue.add_task("a", 1, "payload a").unwrap();

        let first = queue.peek().unwrap().clone();
        let second = queue.peek().unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(first.name, "a");
        assert_eq!(queue.len(), 2);

        let removed = queue.remove_next().unwrap();
        assert_eq!(removed, first);
        assert_eq!(removed.payload, "payload a");
    }

    #[test]
    fn test_clear_keeps_sequence() {
        let mut queue = PriorityTaskQueue::new();
        queue.add_task("a", 1, ()).unwrap();
        queue.add_task("b", 1, ()).unwrap();

        queue.clear();
        assert!(queue.is_empty());

        queue.add_task("c", 1, ()).unwrap();
        assert_eq!(queue.peek().unwrap().sequence, 2);
    }

    #[test]
    fn test_ordered_does_not_remove() {
        let mut queue = PriorityTaskQueue::new();
        queue.add_task("late", 9, ()).unwrap();
        queue.add_task("early", 1, ()).unwrap();

        let ordered: Vec<&str> = queue.ordered().into_iter().map(|t| t.name.as_str()).collect();
        assert_eq!(ordered, vec!["early", "late"]);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.iter().count(), 2);
    }

    #[test]
    fn test_display() {
        let mut queue = PriorityTaskQueue::new();
        assert_eq!(queue.to_string(), "PriorityTaskQueue(0): []");

        queue.add_task("b", 3, ()).unwrap();
        queue.add_task("a", 1, ()).unwrap();
        assert_eq!(
            queue.to_string(),
            "PriorityTaskQueue(2): [Task('a', priority=1), Task('b', priority=3)]"
        );
    }

    #[test]
    fn test_snapshot() {
        let mut queue = PriorityTaskQueue::new();
        queue.add_task("b", 3, 20).unwrap();
        queue.add_task("a", 1, 10).unwrap();

        let snapshot = queue.snapshot();
        assert_eq!(snapshot.len, 2);
        assert_eq!(snapshot.tasks[0].name, "a");
        assert_eq!(snapshot.tasks[0].sequence, 1);
        assert_eq!(snapshot.tasks[1].name, "b");
    }
}
