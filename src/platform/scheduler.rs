//! Virtual-clock cooperative scheduler
//!
//! Behaves like the firmware scheduler the game was written for: tasks run to
//! completion one at a time, a registered task runs once at its due time and
//! then sleeps until it is re-planned, one-shot tasks disappear after running.
//! Time only moves when the driver pops a task or calls `advance_to`.

use std::collections::BTreeMap;

use super::{Scheduler, Task, TaskHandle};

#[derive(Debug, Clone)]
struct Entry {
    task: Task,
    /// `None` while sleeping
    due_ms: Option<u64>,
    once: bool,
}

#[derive(Debug, Clone)]
pub struct VirtualScheduler {
    now_ms: u64,
    next_id: u32,
    entries: BTreeMap<TaskHandle, Entry>,
    current: Option<TaskHandle>,
}

impl Default for VirtualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            entries: BTreeMap::new(),
            current: None,
        }
    }

    /// Virtual time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_registered(&self, handle: TaskHandle) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Due time of a registered task, `None` if sleeping or gone
    pub fn due_ms(&self, handle: TaskHandle) -> Option<u64> {
        self.entries.get(&handle).and_then(|e| e.due_ms)
    }

    /// Due time of the earliest pending instance of `task`
    pub fn next_due_of(&self, task: Task) -> Option<u64> {
        self.entries
            .values()
            .filter(|e| e.task == task)
            .filter_map(|e| e.due_ms)
            .min()
    }

    /// Number of registered tasks, sleeping ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pop the earliest task due at or before `until_ms`
    ///
    /// Moves the clock to the task's due time and makes it the current task
    /// until the next pop or [`VirtualScheduler::advance_to`]. Ties run in
    /// registration order.
    pub fn next_due(&mut self, until_ms: u64) -> Option<Task> {
        let (handle, due) = self
            .entries
            .iter()
            .filter_map(|(h, e)| e.due_ms.map(|d| (*h, d)))
            .min_by_key(|&(h, d)| (d, h))?;
        if due > until_ms {
            return None;
        }

        self.now_ms = self.now_ms.max(due);
        self.current = Some(handle);

        let entry = self.entries.get_mut(&handle)?;
        let task = entry.task;
        if entry.once {
            self.entries.remove(&handle);
        } else {
            entry.due_ms = None;
        }
        Some(task)
    }

    /// Move the clock forward without running anything
    pub fn advance_to(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
        self.current = None;
    }

    fn allocate(&mut self) -> TaskHandle {
        loop {
            let id = self.next_id;
            self.next_id = self.next_id.wrapping_add(1);
            if let Some(handle) = TaskHandle::new(id) {
                if !self.entries.contains_key(&handle) {
                    return handle;
                }
            }
        }
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule_periodic(&mut self, task: Task) -> TaskHandle {
        let handle = self.allocate();
        self.entries.insert(
            handle,
            Entry {
                task,
                due_ms: Some(self.now_ms),
                once: false,
            },
        );
        log::trace!("registered {:?} as {:?}", task, handle);
        handle
    }

    fn schedule_once(&mut self, task: Task, delay_ms: u64) {
        let handle = self.allocate();
        self.entries.insert(
            handle,
            Entry {
                task,
                due_ms: Some(self.now_ms + delay_ms),
                once: true,
            },
        );
        log::trace!("planned {:?} in {} ms", task, delay_ms);
    }

    fn unschedule(&mut self, handle: TaskHandle) {
        self.entries.remove(&handle);
        if self.current == Some(handle) {
            self.current = None;
        }
    }

    fn reschedule_current(&mut self, delay_ms: u64) {
        let now = self.now_ms;
        if let Some(entry) = self.current.and_then(|h| self.entries.get_mut(&h)) {
            entry.due_ms = Some(now + delay_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodic_runs_once_then_sleeps() {
        let mut sched = VirtualScheduler::new();
        let handle = sched.schedule_periodic(Task::Update);
        assert_eq!(sched.due_ms(handle), Some(0));

        assert_eq!(sched.next_due(0), Some(Task::Update));
        assert!(sched.is_registered(handle));
        assert_eq!(sched.due_ms(handle), None);
        assert_eq!(sched.next_due(u64::MAX), None);
    }

    #[test]
    fn test_reschedule_current_replans_from_now() {
        let mut sched = VirtualScheduler::new();
        let handle = sched.schedule_periodic(Task::Update);

        assert_eq!(sched.next_due(0), Some(Task::Update));
        sched.reschedule_current(16);
        assert_eq!(sched.due_ms(handle), Some(16));

        // Not due yet
        assert_eq!(sched.next_due(15), None);
        assert_eq!(sched.next_due(100), Some(Task::Update));
        assert_eq!(sched.now_ms(), 16);
        sched.reschedule_current(16);
        assert_eq!(sched.due_ms(handle), Some(32));
    }

    #[test]
    fn test_once_task_is_removed_after_running() {
        let mut sched = VirtualScheduler::new();
        sched.schedule_once(Task::Reset, 5000);
        assert_eq!(sched.next_due_of(Task::Reset), Some(5000));
        assert_eq!(sched.len(), 1);

        assert_eq!(sched.next_due(4999), None);
        assert_eq!(sched.next_due(5000), Some(Task::Reset));
        assert!(sched.is_empty());
        assert_eq!(sched.now_ms(), 5000);

        // Re-planning a finished one-shot does nothing
        sched.reschedule_current(10);
        assert!(sched.is_empty());
    }

    #[test]
    fn test_unschedule_current_blocks_replanning() {
        let mut sched = VirtualScheduler::new();
        let handle = sched.schedule_periodic(Task::Update);
        sched.next_due(0);

        sched.unschedule(handle);
        sched.reschedule_current(16);
        assert!(!sched.is_registered(handle));
        assert_eq!(sched.next_due(u64::MAX), None);
    }

    #[test]
    fn test_ties_run_in_registration_order() {
        let mut sched = VirtualScheduler::new();
        sched.schedule_once(Task::Reset, 0);
        sched.schedule_periodic(Task::Update);

        assert_eq!(sched.next_due(0), Some(Task::Reset));
        assert_eq!(sched.next_due(0), Some(Task::Update));
    }

    #[test]
    fn test_advance_to_clears_current() {
        let mut sched = VirtualScheduler::new();
        let handle = sched.schedule_periodic(Task::Update);
        sched.next_due(0);

        sched.advance_to(50);
        sched.reschedule_current(10);
        assert_eq!(sched.due_ms(handle), None);
        assert_eq!(sched.now_ms(), 50);

        // Clock never runs backwards
        sched.advance_to(10);
        assert_eq!(sched.now_ms(), 50);
    }
}
