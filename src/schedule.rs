//! Scheduled continuations: animation frames and fixed-delay timers.
//!
//! DESIGN
//! ======
//! A continuation is plain data ([`Task`]) rather than a closure. The
//! scheduler hands the task back to `Site::run_task` when it fires, so the
//! component that requested it resumes with full access to the DOM and the
//! scheduler again. `web::WebScheduler` backs this with
//! `requestAnimationFrame` and `setTimeout`; [`ManualScheduler`] backs it
//! with a virtual clock so tests decide exactly when frames and timers fire.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use crate::components::accordion::AccordionTask;
use crate::components::scroll::Watch;
use crate::components::tabs::TabsTask;

/// Identifies a pending continuation so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(pub u64);

/// A continuation routed back to the component that requested it.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Accordion(AccordionTask),
    Tabs(TabsTask),
    Scroll(Watch),
}

pub trait Scheduler {
    /// Run `task` once before the next repaint.
    fn request_frame(&mut self, task: Task) -> TaskHandle;

    /// Run `task` once after `delay_ms`.
    fn set_timeout(&mut self, delay_ms: u32, task: Task) -> TaskHandle;

    /// Drop a pending continuation. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TaskHandle);
}

#[derive(Debug, Clone)]
struct Timer {
    handle: TaskHandle,
    due_ms: u64,
    task: Task,
}

/// Deterministic scheduler driven explicitly by the caller.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    next_id: u64,
    now_ms: u64,
    frames: Vec<(TaskHandle, Task)>,
    timers: Vec<Timer>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(&mut self) -> TaskHandle {
        self.next_id += 1;
        TaskHandle(self.next_id)
    }

    /// Virtual time elapsed so far.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Take every frame callback requested so far, in request order.
    ///
    /// Frames requested while the returned tasks run belong to the next frame.
    pub fn take_frame(&mut self) -> Vec<Task> {
        std::mem::take(&mut self.frames).into_iter().map(|(_, task)| task).collect()
    }

    /// Pop the earliest timer due at or before `until_ms`, advancing the clock to it.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Task> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.handle))
            .map(|(i, _)| i)?;
        let timer = self.timers.remove(index);
        self.now_ms = self.now_ms.max(timer.due_ms);
        Some(timer.task)
    }

    /// Move the clock forward to `until_ms` without firing anything.
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self, task: Task) -> TaskHandle {
        let handle = self.issue();
        self.frames.push((handle, task));
        handle
    }

    fn set_timeout(&mut self, delay_ms: u32, task: Task) -> TaskHandle {
        let handle = self.issue();
        let due_ms = self.now_ms + u64::from(delay_ms);
        self.timers.push(Timer { handle, due_ms, task });
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        self.frames.retain(|(h, _)| *h != handle);
        self.timers.retain(|t| t.handle != handle);
    }
}
