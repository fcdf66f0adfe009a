//! Three-step process tabs.
//!
//! Exactly one button carries `active`. A click clears every button and
//! panel synchronously, marks the clicked button, and activates the target
//! panel after a short delay so the outgoing panel has rendered inactive
//! first. Activation also replays the panel image's entrance animation.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use super::ACTIVE;
use crate::config::TabsConfig;
use crate::dom::Dom;
use crate::schedule::{Scheduler, Task, TaskHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabsTask {
    Activate { tab: usize },
}

struct Tab<N> {
    button: N,
    /// Id of the panel this button shows.
    target: Option<String>,
}

pub struct TabSwitcher<D: Dom> {
    tabs: Vec<Tab<D::Node>>,
    panels: Vec<D::Node>,
    pending: Option<TaskHandle>,
    config: TabsConfig,
}

impl<D: Dom> TabSwitcher<D> {
    pub fn init(dom: &D, config: &TabsConfig) -> Self {
        let tabs = dom
            .query_all(&config.button)
            .into_iter()
            .map(|button| {
                let target = dom.attribute(&button, &config.target_attribute).filter(|t| !t.is_empty());
                if target.is_none() {
                    log::debug!("tab button without {}", config.target_attribute);
                }
                Tab { button, target }
            })
            .collect();
        Self { tabs, panels: dom.query_all(&config.panel), pending: None, config: config.clone() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Index of the button currently marked active.
    #[must_use]
    pub fn active_tab(&self, dom: &D) -> Option<usize> {
        self.tabs.iter().position(|t| dom.has_class(&t.button, ACTIVE))
    }

    /// Panels currently marked active.
    #[must_use]
    pub fn active_panels(&self, dom: &D) -> Vec<D::Node> {
        self.panels.iter().filter(|p| dom.has_class(p, ACTIVE)).cloned().collect()
    }

    /// Handle a click; returns whether it hit a tab button.
    pub fn on_click(&mut self, dom: &mut D, sched: &mut dyn Scheduler, target: &D::Node) -> bool {
        let Some(index) = self.tabs.iter().position(|t| dom.contains(&t.button, target)) else {
            return false;
        };
        self.select(dom, sched, index);
        true
    }

    pub fn select(&mut self, dom: &mut D, sched: &mut dyn Scheduler, index: usize) {
        let Some(tab) = self.tabs.get(index) else {
            return;
        };
        for other in &self.tabs {
            dom.remove_class(&other.button, ACTIVE);
        }
        for panel in &self.panels {
            dom.remove_class(panel, ACTIVE);
        }
        dom.add_class(&tab.button, ACTIVE);

        if let Some(handle) = self.pending.take() {
            sched.cancel(handle);
        }
        let has_panel = tab.target.as_deref().and_then(|id| dom.element_by_id(id)).is_some();
        if has_panel {
            let delay = self.config.activation_delay_ms;
            self.pending = Some(sched.set_timeout(delay, Task::Tabs(TabsTask::Activate { tab: index })));
        }
    }

    pub fn run(&mut self, dom: &mut D, task: TabsTask) {
        match task {
            TabsTask::Activate { tab } => {
                self.pending = None;
                let Some(panel) = self
                    .tabs
                    .get(tab)
                    .and_then(|t| t.target.as_deref())
                    .and_then(|id| dom.element_by_id(id))
                else {
                    return;
                };
                dom.add_class(&panel, ACTIVE);
                if let Some(image) = dom.query_within(&panel, &self.config.image) {
                    self.replay_entrance(dom, &image);
                }
            }
        }
    }

    fn replay_entrance(&self, dom: &mut D, image: &D::Node) {
        dom.set_style(image, "animation", "none");
        // Reading layout flushes the style change so the animation restarts.
        dom.offset_height(image);
        dom.set_style(image, "animation", &self.config.entrance_animation);
    }

    pub fn teardown(&mut self, sched: &mut dyn Scheduler) {
        if let Some(handle) = self.pending.take() {
            sched.cancel(handle);
        }
    }
}
