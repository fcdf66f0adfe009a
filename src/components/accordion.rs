//! FAQ accordion with animated `max-height` transitions.
//!
//! State lives on the page: `aria-expanded` on each question, `open` on its
//! answer. Opening pins `max-height` to 0, raises it to the measured content
//! height on the next frame, then releases it to `none` once the transition
//! has had time to finish so later reflow (resize, font load) is not clipped.
//! Closing pins the current height and drops to 0 on the next frame.
//!
//! Each item tracks at most one pending continuation. A click that lands
//! while an item is still animating cancels it first, so the newest click
//! decides the final state.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use super::{ARIA_EXPANDED, is_expanded};
use crate::config::AccordionConfig;
use crate::dom::Dom;
use crate::schedule::{Scheduler, Task, TaskHandle};

const OPEN: &str = "open";
const MAX_HEIGHT: &str = "max-height";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccordionTask {
    /// Second half of a collapse: drop to zero.
    CollapseFrame { item: usize },
    /// Second half of an expand: raise to the measured height.
    ExpandFrame { item: usize, height: f64 },
    /// Release the height constraint after the opening transition.
    Settle { item: usize },
}

struct FaqItem<N> {
    question: N,
    answer: N,
    content: Option<N>,
    pending: Option<TaskHandle>,
}

pub struct Accordion<D: Dom> {
    items: Vec<FaqItem<D::Node>>,
    config: AccordionConfig,
}

fn px(value: f64) -> String {
    format!("{value}px")
}

impl<D: Dom> Accordion<D> {
    pub fn init(dom: &D, config: &AccordionConfig) -> Self {
        let items = dom
            .query_all(&config.question)
            .into_iter()
            .filter_map(|question| {
                let answer = dom.parent(&question).and_then(|item| dom.query_within(&item, &config.answer));
                let Some(answer) = answer else {
                    log::warn!("faq question without {} skipped", config.answer);
                    return None;
                };
                let content = dom.query_within(&answer, &config.content);
                Some(FaqItem { question, answer, content, pending: None })
            })
            .collect();
        Self { items, config: config.clone() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_open(&self, dom: &D, item: usize) -> bool {
        self.items.get(item).is_some_and(|i| is_expanded(dom, &i.question))
    }

    /// Whether `item` still has a frame or timer outstanding.
    #[must_use]
    pub fn is_animating(&self, item: usize) -> bool {
        self.items.get(item).is_some_and(|i| i.pending.is_some())
    }

    /// Handle a click; returns whether it hit a question.
    pub fn on_click(&mut self, dom: &mut D, sched: &mut dyn Scheduler, target: &D::Node) -> bool {
        let Some(index) = self.items.iter().position(|i| dom.contains(&i.question, target)) else {
            return false;
        };
        self.toggle(dom, sched, index);
        true
    }

    pub fn toggle(&mut self, dom: &mut D, sched: &mut dyn Scheduler, index: usize) {
        if self.is_open(dom, index) {
            self.collapse(dom, sched, index);
        } else {
            if self.config.exclusive {
                for other in 0..self.items.len() {
                    if other != index && self.is_open(dom, other) {
                        self.collapse(dom, sched, other);
                    }
                }
            }
            self.expand(dom, sched, index);
        }
    }

    fn cancel_pending(&mut self, sched: &mut dyn Scheduler, index: usize) {
        if let Some(handle) = self.items.get_mut(index).and_then(|i| i.pending.take()) {
            sched.cancel(handle);
        }
    }

    fn collapse(&mut self, dom: &mut D, sched: &mut dyn Scheduler, index: usize) {
        self.cancel_pending(sched, index);
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        dom.set_attribute(&item.question, ARIA_EXPANDED, "false");
        let current = dom.scroll_height(&item.answer);
        dom.set_style(&item.answer, MAX_HEIGHT, &px(current));
        item.pending = Some(sched.request_frame(Task::Accordion(AccordionTask::CollapseFrame { item: index })));
    }

    fn expand(&mut self, dom: &mut D, sched: &mut dyn Scheduler, index: usize) {
        self.cancel_pending(sched, index);
        let padding = self.config.padding_px;
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        dom.set_attribute(&item.question, ARIA_EXPANDED, "true");
        dom.add_class(&item.answer, OPEN);
        let measured = item.content.as_ref().unwrap_or(&item.answer);
        let height = dom.scroll_height(measured) + padding;
        dom.set_style(&item.answer, MAX_HEIGHT, "0px");
        item.pending = Some(sched.request_frame(Task::Accordion(AccordionTask::ExpandFrame { item: index, height })));
    }

    /// Resume a continuation this component scheduled.
    pub fn run(&mut self, dom: &mut D, sched: &mut dyn Scheduler, task: AccordionTask) {
        match task {
            AccordionTask::CollapseFrame { item } => {
                let Some(entry) = self.items.get_mut(item) else {
                    return;
                };
                entry.pending = None;
                dom.set_style(&entry.answer, MAX_HEIGHT, "0px");
                dom.remove_class(&entry.answer, OPEN);
            }
            AccordionTask::ExpandFrame { item, height } => {
                let settle_ms = self.config.settle_ms;
                let Some(entry) = self.items.get_mut(item) else {
                    return;
                };
                dom.set_style(&entry.answer, MAX_HEIGHT, &px(height));
                entry.pending = Some(sched.set_timeout(settle_ms, Task::Accordion(AccordionTask::Settle { item })));
            }
            AccordionTask::Settle { item } => {
                let Some(entry) = self.items.get_mut(item) else {
                    return;
                };
                entry.pending = None;
                if dom.has_class(&entry.answer, OPEN) {
                    dom.set_style(&entry.answer, MAX_HEIGHT, "none");
                }
            }
        }
    }

    /// Cancel every outstanding continuation.
    pub fn teardown(&mut self, sched: &mut dyn Scheduler) {
        for item in &mut self.items {
            if let Some(handle) = item.pending.take() {
                sched.cancel(handle);
            }
        }
    }
}
