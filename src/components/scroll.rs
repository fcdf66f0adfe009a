//! Scroll-driven header style and back-to-top visibility.
//!
//! Both are the same pattern: a class mirrored from `scrollY > threshold`,
//! recomputed at most once per animation frame. Every scroll or resize
//! cancels the watcher's pending frame and requests a fresh one, so a burst
//! of events costs one recomputation.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::ScrollConfig;
use crate::dom::Dom;
use crate::schedule::{Scheduler, Task, TaskHandle};

const SCROLLED: &str = "scrolled";
const VISIBLE: &str = "visible";

/// Which watcher a frame callback belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watch {
    Header,
    BackToTop,
}

pub struct ScrollWatcher<D: Dom> {
    watch: Watch,
    node: D::Node,
    class: &'static str,
    threshold: f64,
    pending: Option<TaskHandle>,
}

impl<D: Dom> ScrollWatcher<D> {
    fn new(watch: Watch, node: D::Node, class: &'static str, threshold: f64) -> Self {
        Self { watch, node, class, threshold, pending: None }
    }

    /// Apply the class for the current scroll offset; returns the new flag.
    pub fn recompute(&self, dom: &mut D) -> bool {
        let on = dom.scroll_y() > self.threshold;
        if on {
            dom.add_class(&self.node, self.class);
        } else {
            dom.remove_class(&self.node, self.class);
        }
        on
    }

    fn schedule(&mut self, sched: &mut dyn Scheduler) {
        if let Some(handle) = self.pending.take() {
            sched.cancel(handle);
        }
        self.pending = Some(sched.request_frame(Task::Scroll(self.watch)));
    }

    fn cancel(&mut self, sched: &mut dyn Scheduler) {
        if let Some(handle) = self.pending.take() {
            sched.cancel(handle);
        }
    }
}

pub struct ScrollVisibility<D: Dom> {
    header: Option<ScrollWatcher<D>>,
    back_to_top: Option<ScrollWatcher<D>>,
}

impl<D: Dom> ScrollVisibility<D> {
    pub fn init(dom: &mut D, config: &ScrollConfig) -> Self {
        let header = dom
            .query(&config.header)
            .map(|node| ScrollWatcher::new(Watch::Header, node, SCROLLED, config.header_threshold));
        if header.is_none() {
            log::debug!("header {} not found", config.header);
        }

        let back_to_top = dom
            .element_by_id(&config.back_to_top_id)
            .map(|node| ScrollWatcher::new(Watch::BackToTop, node, VISIBLE, config.back_to_top_threshold));
        if back_to_top.is_none() {
            log::warn!("back to top button not found");
        }

        let visibility = Self { header, back_to_top };
        // The page may load already scrolled (deep link, history restore).
        for watcher in visibility.watchers() {
            watcher.recompute(dom);
        }
        visibility
    }

    fn watchers(&self) -> impl Iterator<Item = &ScrollWatcher<D>> {
        self.header.iter().chain(self.back_to_top.iter())
    }

    fn watchers_mut(&mut self) -> impl Iterator<Item = &mut ScrollWatcher<D>> {
        self.header.iter_mut().chain(self.back_to_top.iter_mut())
    }

    #[must_use]
    pub fn header_scrolled(&self, dom: &D) -> bool {
        self.header.as_ref().is_some_and(|w| dom.has_class(&w.node, SCROLLED))
    }

    #[must_use]
    pub fn back_to_top_visible(&self, dom: &D) -> bool {
        self.back_to_top.as_ref().is_some_and(|w| dom.has_class(&w.node, VISIBLE))
    }

    /// Scroll and resize both land here.
    pub fn on_viewport_change(&mut self, sched: &mut dyn Scheduler) {
        for watcher in self.watchers_mut() {
            watcher.schedule(sched);
        }
    }

    /// Back-to-top activation; returns whether the click hit the button.
    pub fn on_click(&mut self, dom: &mut D, target: &D::Node) -> bool {
        let Some(button) = &self.back_to_top else {
            return false;
        };
        if !dom.contains(&button.node, target) {
            return false;
        }
        dom.smooth_scroll_to(0.0);
        true
    }

    pub fn run(&mut self, dom: &mut D, watch: Watch) {
        let watcher = match watch {
            Watch::Header => self.header.as_mut(),
            Watch::BackToTop => self.back_to_top.as_mut(),
        };
        if let Some(watcher) = watcher {
            watcher.pending = None;
            watcher.recompute(dom);
        }
    }

    pub fn teardown(&mut self, sched: &mut dyn Scheduler) {
        for watcher in self.watchers_mut() {
            watcher.cancel(sched);
        }
    }
}
