//! Deferred Queue: single-threaded delayed callbacks on a virtual clock.
//!
//! The queue never reads the wall clock. Hosts move time forward with
//! [`DeferredQueue::advance_to`] (typically from a [`super::Tick`]), and
//! tests move it forward exactly. Every task due by then runs in order of
//! due time, ties broken by scheduling order. While a task runs the clock
//! reads that task's due time.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// A deferred callback. It receives the queue time at which it runs.
type Task = Box<dyn FnOnce(Duration)>;

/// Identifier returned when a task is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Default)]
struct QueueState {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<(Duration, TaskId), Task>,
}

/// A cloneable handle to a shared single-threaded task queue.
///
/// Clones share the same clock and tasks. The handle is `!Send`: tasks and
/// the code that schedules them live on one thread.
#[derive(Clone, Default)]
pub struct DeferredQueue {
    state: Rc<RefCell<QueueState>>,
}

impl DeferredQueue {
    /// Create an empty queue with its clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current queue time.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    /// Due time of the earliest waiting task.
    pub fn next_due(&self) -> Option<Duration> {
        self.state.borrow().tasks.keys().next().map(|(due, _)| *due)
    }

    /// Schedule `task` to run `delay` after the current queue time.
    pub fn after<F>(&self, delay: Duration, task: F) -> TaskId
    where
        F: FnOnce(Duration) + 'static,
    {
        let mut state = self.state.borrow_mut();
        let id = TaskId(state.next_id);
        state.next_id += 1;
        let due = state.now.saturating_add(delay);
        state.tasks.insert((due, id), Box::new(task));
        id
    }

    /// Advance the clock by `delta`, running due tasks.
    ///
    /// The clock saturates at `Duration::MAX`.
    ///
    /// Returns the number of tasks that ran.
    pub fn advance_by(&self, delta: Duration) -> usize {
        let target = self.now().saturating_add(delta);
        self.advance_to(target)
    }

    /// Advance the clock to `target`, running every task due by then.
    ///
    /// Tasks scheduled by a running task are picked up in the same call if
    /// they fall due by `target`. A `target` in the past runs nothing and
    /// leaves the clock where it is. Returns the number of tasks that ran.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut ran = 0;
        loop {
            // Release the borrow before running: tasks may schedule more work.
            let next = {
                let mut state = self.state.borrow_mut();
                match state.tasks.first_entry() {
                    Some(entry) if entry.key().0 <= target => {
                        let ((due, _), task) = entry.remove_entry();
                        state.now = state.now.max(due);
                        Some((state.now, task))
                    }
                    _ => None,
                }
            };
            let Some((at, task)) = next else {
                break;
            };
            task(at);
            ran += 1;
        }

        let mut state = self.state.borrow_mut();
        state.now = state.now.max(target);
        ran
    }

    /// Run every waiting task regardless of its due time.
    ///
    /// The clock ends at the last task's due time.
    pub fn drain(&self) -> usize {
        let mut ran = 0;
        while let Some(due) = self.next_due() {
            ran += self.advance_to(due);
        }
        ran
    }
}

impl fmt::Debug for DeferredQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("DeferredQueue")
            .field("now", &state.now)
            .field("pending", &state.tasks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<(u32, Duration)>>>, DeferredQueue) {
        (Rc::new(RefCell::new(Vec::new())), DeferredQueue::new())
    }

    #[test]
    fn test_tasks_run_in_due_order() {
        let (log, queue) = recorder();
        for (label, ms) in [(2, 660), (0, 0), (1, 330)] {
            let log = Rc::clone(&log);
            queue.after(Duration::from_millis(ms), move |at| log.borrow_mut().push((label, at)));
        }

        assert_eq!(queue.pending(), 3);
        assert_eq!(queue.advance_to(Duration::from_secs(1)), 3);
        assert_eq!(
            *log.borrow(),
            vec![
                (0, Duration::ZERO),
                (1, Duration::from_millis(330)),
                (2, Duration::from_millis(660)),
            ]
        );
        assert_eq!(queue.now(), Duration::from_secs(1));
    }

    #[test]
    fn test_ties_keep_scheduling_order() {
        let (log, queue) = recorder();
        for label in 0..3 {
            let log = Rc::clone(&log);
            queue.after(Duration::from_millis(10), move |at| log.borrow_mut().push((label, at)));
        }
        queue.advance_by(Duration::from_millis(10));
        let labels: Vec<u32> = log.borrow().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec![0, 1, 2]);
    }

    #[test]
    fn test_partial_advance() {
        let (log, queue) = recorder();
        let log2 = Rc::clone(&log);
        queue.after(Duration::from_millis(500), move |at| log2.borrow_mut().push((7, at)));

        assert_eq!(queue.advance_by(Duration::from_millis(100)), 0);
        assert_eq!(queue.pending(), 1);
        assert_eq!(queue.next_due(), Some(Duration::from_millis(500)));

        assert_eq!(queue.advance_by(Duration::from_millis(400)), 1);
        assert_eq!(log.borrow()[0], (7, Duration::from_millis(500)));
    }

    #[test]
    fn test_huge_delays_saturate() {
        let (log, queue) = recorder();
        let log2 = Rc::clone(&log);
        queue.advance_to(Duration::from_secs(1));
        queue.after(Duration::MAX, move |at| log2.borrow_mut().push((9, at)));
        assert_eq!(queue.next_due(), Some(Duration::MAX));

        assert_eq!(queue.advance_by(Duration::MAX), 1);
        assert_eq!(queue.now(), Duration::MAX);
        assert_eq!(log.borrow()[0], (9, Duration::MAX));
        assert_eq!(queue.advance_by(Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_task_can_schedule_more_work() {
        let (log, queue) = recorder();
        let inner_queue = queue.clone();
        let log2 = Rc::clone(&log);
        queue.after(Duration::from_millis(10), move |_| {
            let log3 = Rc::clone(&log2);
            inner_queue.after(Duration::from_millis(5), move |at| log3.borrow_mut().push((1, at)));
        });

        assert_eq!(queue.advance_to(Duration::from_millis(20)), 2);
        assert_eq!(log.borrow()[0], (1, Duration::from_millis(15)));
    }

    #[test]
    fn test_clock_never_goes_backwards() {
        let queue = DeferredQueue::new();
        queue.advance_to(Duration::from_secs(2));
        queue.advance_to(Duration::from_secs(1));
        assert_eq!(queue.now(), Duration::from_secs(2));
    }

    #[test]
    fn test_drain() {
        let (log, queue) = recorder();
        let log2 = Rc::clone(&log);
        queue.after(Duration::from_secs(30), move |at| log2.borrow_mut().push((9, at)));
        assert_eq!(queue.drain(), 1);
        assert_eq!(queue.now(), Duration::from_secs(30));
        assert_eq!(queue.pending(), 0);
    }
}
