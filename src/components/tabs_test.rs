use super::*;
use crate::headless::{HeadlessDom, NodeId};
use crate::schedule::ManualScheduler;

struct Page {
    dom: HeadlessDom,
    sched: ManualScheduler,
    buttons: Vec<NodeId>,
    panels: Vec<NodeId>,
    images: Vec<NodeId>,
}

fn page() -> Page {
    let mut dom = HeadlessDom::new();
    let body = dom.body().unwrap();
    let nav = dom.append(body, "div", &["tab-buttons"]);
    let mut buttons = Vec::new();
    let mut panels = Vec::new();
    let mut images = Vec::new();
    for (i, id) in ["step-1", "step-2", "step-3"].iter().enumerate() {
        let button = dom.append(nav, "button", &["tab-button"]);
        dom.set_attribute(&button, "data-tab", id);
        let panel = dom.append(body, "div", &["tab-content"]);
        dom.set_attribute(&panel, "id", id);
        let image = dom.append(panel, "div", &["step-image"]);
        if i == 0 {
            dom.add_class(&button, "active");
            dom.add_class(&panel, "active");
        }
        buttons.push(button);
        panels.push(panel);
        images.push(image);
    }
    Page { dom, sched: ManualScheduler::new(), buttons, panels, images }
}

impl Page {
    fn click(&mut self, tabs: &mut TabSwitcher<HeadlessDom>, index: usize) {
        let target = self.buttons[index];
        assert!(tabs.on_click(&mut self.dom, &mut self.sched, &target));
    }

    fn advance(&mut self, tabs: &mut TabSwitcher<HeadlessDom>, ms: u64) {
        let until = self.sched.now_ms() + ms;
        while let Some(task) = self.sched.pop_due(until) {
            if let Task::Tabs(task) = task {
                tabs.run(&mut self.dom, task);
            }
        }
        self.sched.settle(until);
    }
}

#[test]
fn initial_state_comes_from_markup() {
    let p = page();
    let tabs = TabSwitcher::init(&p.dom, &TabsConfig::default());
    assert_eq!(tabs.len(), 3);
    assert_eq!(tabs.active_tab(&p.dom), Some(0));
    assert_eq!(tabs.active_panels(&p.dom), vec![p.panels[0]]);
}

#[test]
fn click_clears_immediately_and_activates_after_delay() {
    let mut p = page();
    let mut tabs = TabSwitcher::init(&p.dom, &TabsConfig::default());

    p.click(&mut tabs, 1);
    assert_eq!(tabs.active_tab(&p.dom), Some(1));
    assert!(tabs.active_panels(&p.dom).is_empty());

    p.advance(&mut tabs, 49);
    assert!(tabs.active_panels(&p.dom).is_empty());
    p.advance(&mut tabs, 1);
    assert_eq!(tabs.active_panels(&p.dom), vec![p.panels[1]]);
}

#[test]
fn activation_replays_entrance_animation() {
    let mut p = page();
    let mut tabs = TabSwitcher::init(&p.dom, &TabsConfig::default());
    let reads_before = p.dom.layout_reads();

    p.click(&mut tabs, 2);
    p.advance(&mut tabs, 50);
    assert_eq!(
        p.dom.style(&p.images[2], "animation").as_deref(),
        Some("slideInRight 0.8s ease-out 0.2s forwards")
    );
    assert!(p.dom.layout_reads() > reads_before);
    assert_eq!(p.dom.style(&p.images[0], "animation"), None);
}

#[test]
fn exactly_one_panel_active_after_any_click_sequence() {
    let mut p = page();
    let mut tabs = TabSwitcher::init(&p.dom, &TabsConfig::default());
    for index in [2, 0, 1, 1, 2] {
        p.click(&mut tabs, index);
        p.advance(&mut tabs, 50);
        assert_eq!(tabs.active_panels(&p.dom), vec![p.panels[index]]);
        assert_eq!(tabs.active_tab(&p.dom), Some(index));
    }
}

#[test]
fn clicking_active_tab_replays_animation() {
    let mut p = page();
    let mut tabs = TabSwitcher::init(&p.dom, &TabsConfig::default());
    p.click(&mut tabs, 0);
    p.advance(&mut tabs, 50);
    p.dom.set_style(&p.images[0], "animation", "done");

    p.click(&mut tabs, 0);
    p.advance(&mut tabs, 50);
    assert_eq!(tabs.active_panels(&p.dom), vec![p.panels[0]]);
    assert_eq!(
        p.dom.style(&p.images[0], "animation").as_deref(),
        Some("slideInRight 0.8s ease-out 0.2s forwards")
    );
}

#[test]
fn rapid_clicks_activate_only_the_last_panel() {
    let mut p = page();
    let mut tabs = TabSwitcher::init(&p.dom, &TabsConfig::default());
    p.click(&mut tabs, 1);
    p.advance(&mut tabs, 10);
    p.click(&mut tabs, 2);
    assert_eq!(p.sched.pending_timers(), 1);
    p.advance(&mut tabs, 100);
    assert_eq!(tabs.active_panels(&p.dom), vec![p.panels[2]]);
}

#[test]
fn button_with_missing_panel_schedules_nothing() {
    let mut p = page();
    let body = p.dom.body().unwrap();
    let stray = p.dom.append(body, "button", &["tab-button"]);
    p.dom.set_attribute(&stray, "data-tab", "missing");
    let mut tabs = TabSwitcher::init(&p.dom, &TabsConfig::default());

    assert!(tabs.on_click(&mut p.dom, &mut p.sched, &stray));
    assert_eq!(tabs.active_tab(&p.dom), Some(3));
    assert_eq!(p.sched.pending_timers(), 0);
    assert!(tabs.active_panels(&p.dom).is_empty());
}

#[test]
fn teardown_cancels_pending_activation() {
    let mut p = page();
    let mut tabs = TabSwitcher::init(&p.dom, &TabsConfig::default());
    p.click(&mut tabs, 1);
    tabs.teardown(&mut p.sched);
    p.advance(&mut tabs, 100);
    assert!(tabs.active_panels(&p.dom).is_empty());
}
