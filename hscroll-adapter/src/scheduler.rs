use std::collections::VecDeque;

/// A handle to a scheduled frame callback or timeout.
///
/// Handles are only compared for identity; a controller ignores callbacks whose handle it no
/// longer holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskId(pub u64);

/// The host's cooperative scheduling primitives (e.g. `requestAnimationFrame` + `setTimeout`).
///
/// Nothing here blocks. When a scheduled task comes due the host calls back into the controller
/// (`Controller::on_frame` / `Controller::on_timeout`) with the same [`TaskId`].
pub trait Scheduler {
    /// Requests a single callback on the next animation frame.
    fn request_frame(&mut self) -> TaskId;

    /// Requests a single callback after `delay_ms`.
    fn set_timeout(&mut self, delay_ms: u64) -> TaskId;

    /// Cancels a pending frame or timeout. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, task: TaskId);
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn request_frame(&mut self) -> TaskId {
        (**self).request_frame()
    }

    fn set_timeout(&mut self, delay_ms: u64) -> TaskId {
        (**self).set_timeout(delay_ms)
    }

    fn cancel(&mut self, task: TaskId) {
        (**self).cancel(task)
    }
}

/// A deterministic in-memory scheduler with a manually advanced clock.
///
/// Frames are delivered one at a time via [`ManualScheduler::take_frame`]; timeouts become due as
/// [`ManualScheduler::advance`] moves the clock. Useful for headless hosts (TUI loops, servers
/// rendering snapshots) and for tests.
#[derive(Clone, Debug)]
pub struct ManualScheduler {
    now_ms: u64,
    next_id: u64,
    frames: VecDeque<TaskId>,
    timers: Vec<(u64, TaskId)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            frames: VecDeque::new(),
            timers: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_idle(&self) -> bool {
        self.frames.is_empty() && self.timers.is_empty()
    }

    /// Pops the oldest requested frame.
    pub fn take_frame(&mut self) -> Option<TaskId> {
        self.frames.pop_front()
    }

    /// Moves the clock forward and returns the timeouts that came due, earliest first.
    pub fn advance(&mut self, ms: u64) -> Vec<TaskId> {
        self.now_ms = self.now_ms.saturating_add(ms);
        let now = self.now_ms;
        let mut due: Vec<(u64, TaskId)> = Vec::new();
        self.timers.retain(|&(deadline, task)| {
            if deadline <= now {
                due.push((deadline, task));
                false
            } else {
                true
            }
        });
        due.sort_unstable();
        due.into_iter().map(|(_, task)| task).collect()
    }

    fn alloc(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) -> TaskId {
        let task = self.alloc();
        self.frames.push_back(task);
        task
    }

    fn set_timeout(&mut self, delay_ms: u64) -> TaskId {
        let task = self.alloc();
        self.timers.push((self.now_ms.saturating_add(delay_ms), task));
        task
    }

    fn cancel(&mut self, task: TaskId) {
        self.frames.retain(|&t| t != task);
        self.timers.retain(|&(_, t)| t != task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_in_deadline_order() {
        let mut s = ManualScheduler::new();
        let late = s.set_timeout(50);
        let early = s.set_timeout(10);
        let never = s.set_timeout(500);

        assert!(s.advance(9).is_empty());
        assert_eq!(s.advance(41), vec![early, late]);
        s.cancel(never);
        assert!(s.is_idle());
    }

    #[test]
    fn cancelled_frame_is_not_delivered() {
        let mut s = ManualScheduler::new();
        let a = s.request_frame();
        let b = s.request_frame();
        s.cancel(a);
        assert_eq!(s.take_frame(), Some(b));
        assert_eq!(s.take_frame(), None);
    }
}
