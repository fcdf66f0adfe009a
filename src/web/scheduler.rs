//! [`Scheduler`] backed by `requestAnimationFrame` and `setTimeout`.
//!
//! Each pending callback is kept alive in a shared map keyed by handle. When
//! it fires it removes its own entry, hands the task to the sink, and only
//! then drops the entry. Cancelling removes the entry and tells the browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use super::describe;
use crate::schedule::{Scheduler, Task, TaskHandle};

/// Receives fired tasks; normally routes them into `Site::run_task`.
pub type TaskSink = Rc<dyn Fn(Task)>;

enum Pending {
    Frame { id: i32, _callback: Closure<dyn FnMut(f64)> },
    Timer(Timeout),
}

type PendingMap = Rc<RefCell<HashMap<u64, Pending>>>;

pub struct WebScheduler {
    window: Window,
    next: u64,
    pending: PendingMap,
    sink: TaskSink,
}

impl WebScheduler {
    pub fn new(window: Window, sink: TaskSink) -> Self {
        Self { window, next: 0, pending: Rc::new(RefCell::new(HashMap::new())), sink }
    }

    fn issue(&mut self) -> TaskHandle {
        self.next += 1;
        TaskHandle(self.next)
    }

    fn release(&self, pending: Pending) {
        match pending {
            Pending::Frame { id, .. } => {
                if let Err(err) = self.window.cancel_animation_frame(id) {
                    log::debug!("cancelAnimationFrame failed: {}", describe(&err));
                }
            }
            // Dropping a gloo timeout clears it.
            Pending::Timer(timeout) => drop(timeout),
        }
    }
}

impl Scheduler for WebScheduler {
    fn request_frame(&mut self, task: Task) -> TaskHandle {
        let handle = self.issue();
        let key = handle.0;
        let pending = Rc::clone(&self.pending);
        let sink = Rc::clone(&self.sink);
        let callback = Closure::once(move |_ts: f64| {
            let entry = pending.borrow_mut().remove(&key);
            sink(task);
            drop(entry);
        });

        match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => {
                self.pending.borrow_mut().insert(key, Pending::Frame { id, _callback: callback });
            }
            Err(err) => log::warn!("requestAnimationFrame failed: {}", describe(&err)),
        }
        handle
    }

    fn set_timeout(&mut self, delay_ms: u32, task: Task) -> TaskHandle {
        let handle = self.issue();
        let key = handle.0;
        let pending = Rc::clone(&self.pending);
        let sink = Rc::clone(&self.sink);
        let timeout = Timeout::new(delay_ms, move || {
            let entry = pending.borrow_mut().remove(&key);
            sink(task);
            drop(entry);
        });
        self.pending.borrow_mut().insert(key, Pending::Timer(timeout));
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        let entry = self.pending.borrow_mut().remove(&handle.0);
        if let Some(pending) = entry {
            self.release(pending);
        }
    }
}

impl Drop for WebScheduler {
    fn drop(&mut self) {
        let drained: Vec<Pending> = self.pending.borrow_mut().drain().map(|(_, p)| p).collect();
        for pending in drained {
            self.release(pending);
        }
    }
}
