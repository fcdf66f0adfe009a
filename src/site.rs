//! Page-wide orchestrator: owns every component and routes events to them.
//!
//! ARCHITECTURE
//! ============
//! The browser layer (or a test) feeds discrete [`Event`]s in and hands
//! fired continuations back through [`Site::run_task`]. Clicks are offered
//! to each component's element-level handler, then to the document-level
//! outside-click handler, mirroring bubbling order. Components share the
//! document but no state.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use crate::components::accordion::Accordion;
use crate::components::anchors::SmoothScroll;
use crate::components::image_modal::ImageModal;
use crate::components::mobile_menu::MobileMenu;
use crate::components::scroll::ScrollVisibility;
use crate::components::tabs::TabSwitcher;
use crate::components::theme::ThemeController;
use crate::config::SiteConfig;
use crate::dom::Dom;
use crate::schedule::{ManualScheduler, Scheduler, Task};
use crate::store::KeyValueStore;
use crate::styles;

const NO_JS: &str = "no-js";

/// A discrete browser event, already reduced to what components need.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<N> {
    Click(N),
    KeyDown(String),
    Scroll,
    Resize,
}

/// What the browser layer must do after an event was handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub prevent_default: bool,
}

pub struct Site<D: Dom, S: Scheduler> {
    dom: D,
    scheduler: S,
    store: Box<dyn KeyValueStore>,
    config: SiteConfig,
    theme: ThemeController<D>,
    accordion: Accordion<D>,
    tabs: TabSwitcher<D>,
    scroll: ScrollVisibility<D>,
    anchors: SmoothScroll<D>,
    menu: Option<MobileMenu<D>>,
    modal: Option<ImageModal<D>>,
    torn_down: bool,
}

impl<D: Dom, S: Scheduler> Site<D, S> {
    /// Initialize every component against the current document.
    pub fn new(mut dom: D, scheduler: S, store: Box<dyn KeyValueStore>, config: SiteConfig) -> Self {
        if let Some(root) = dom.document_element() {
            dom.remove_class(&root, NO_JS);
        }
        styles::inject(&mut dom);

        let scroll = ScrollVisibility::init(&mut dom, &config.scroll);
        let theme = ThemeController::init(&mut dom, &*store, &config.theme);
        let accordion = Accordion::init(&dom, &config.accordion);
        let tabs = TabSwitcher::init(&dom, &config.tabs);
        let anchors = SmoothScroll::init(&dom, &config.anchors);
        let menu = MobileMenu::init(&dom, &config.mobile_menu);
        let modal = ImageModal::init(&mut dom, &config.modal);

        log::info!(
            "site ready: theme={} faq={} tabs={} anchors={} menu={} modal={}",
            theme.current().as_str(),
            accordion.len(),
            tabs.len(),
            anchors.len(),
            menu.is_some(),
            modal.is_some()
        );

        Self {
            dom,
            scheduler,
            store,
            config,
            theme,
            accordion,
            tabs,
            scroll,
            anchors,
            menu,
            modal,
            torn_down: false,
        }
    }

    // --- Accessors ---

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        &*self.store
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn theme(&self) -> &ThemeController<D> {
        &self.theme
    }

    pub fn accordion(&self) -> &Accordion<D> {
        &self.accordion
    }

    pub fn tabs(&self) -> &TabSwitcher<D> {
        &self.tabs
    }

    pub fn scroll(&self) -> &ScrollVisibility<D> {
        &self.scroll
    }

    pub fn anchors(&self) -> &SmoothScroll<D> {
        &self.anchors
    }

    pub fn menu(&self) -> Option<&MobileMenu<D>> {
        self.menu.as_ref()
    }

    pub fn modal(&self) -> Option<&ImageModal<D>> {
        self.modal.as_ref()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    // --- Routing ---

    pub fn handle(&mut self, event: Event<D::Node>) -> Outcome {
        if self.torn_down {
            return Outcome::default();
        }
        match event {
            Event::Click(target) => self.click(&target),
            Event::KeyDown(key) => {
                if let Some(modal) = &mut self.modal {
                    modal.on_key(&mut self.dom, &key);
                }
                Outcome::default()
            }
            Event::Scroll => {
                self.scroll.on_viewport_change(&mut self.scheduler);
                Outcome::default()
            }
            Event::Resize => {
                self.scroll.on_viewport_change(&mut self.scheduler);
                if let Some(menu) = &mut self.menu {
                    menu.on_resize(&mut self.dom);
                }
                Outcome::default()
            }
        }
    }

    fn click(&mut self, target: &D::Node) -> Outcome {
        let dom = &mut self.dom;

        self.theme.on_click(dom, &mut *self.store, target);
        self.accordion.on_click(dom, &mut self.scheduler, target);
        self.tabs.on_click(dom, &mut self.scheduler, target);
        self.scroll.on_click(dom, target);
        let anchor = self.anchors.on_click(dom, target);
        if let Some(menu) = &mut self.menu {
            menu.on_click(dom, target);
        }
        if let Some(modal) = &mut self.modal {
            modal.on_click(dom, target);
        }
        // Document-level listeners run after the element-level ones.
        if let Some(menu) = &mut self.menu {
            menu.on_document_click(dom, target);
        }

        Outcome { prevent_default: anchor.prevents_default() }
    }

    /// Resume a continuation previously requested through the scheduler.
    pub fn run_task(&mut self, task: Task) {
        if self.torn_down {
            return;
        }
        match task {
            Task::Accordion(task) => self.accordion.run(&mut self.dom, &mut self.scheduler, task),
            Task::Tabs(task) => self.tabs.run(&mut self.dom, task),
            Task::Scroll(watch) => self.scroll.run(&mut self.dom, watch),
        }
    }

    /// Cancel pending continuations and undo page-level side effects.
    ///
    /// Listener removal belongs to the browser layer; after teardown every
    /// event and task is ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.accordion.teardown(&mut self.scheduler);
        self.tabs.teardown(&mut self.scheduler);
        self.scroll.teardown(&mut self.scheduler);
        if let Some(menu) = &mut self.menu {
            menu.close(&mut self.dom);
        }
        if let Some(modal) = &mut self.modal {
            modal.teardown(&mut self.dom);
        }
        self.torn_down = true;
        log::debug!("site torn down");
    }
}

impl<D: Dom> Site<D, ManualScheduler> {
    /// Fire every frame callback requested so far.
    pub fn flush_frame(&mut self) {
        for task in self.scheduler.take_frame() {
            self.run_task(task);
        }
    }

    /// Advance virtual time by `ms`, firing timers as they come due.
    pub fn advance(&mut self, ms: u64) {
        let until = self.scheduler.now_ms() + ms;
        while let Some(task) = self.scheduler.pop_due(until) {
            self.run_task(task);
        }
        self.scheduler.settle(until);
    }
}
