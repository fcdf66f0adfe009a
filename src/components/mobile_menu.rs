//! Mobile navigation drawer.
//!
//! Open state is mirrored three ways: `aria-expanded` on the toggle,
//! `active` on the nav container, and a body scroll lock. The toggle flips
//! it; a nav link, an outside click, or widening past the breakpoint force
//! it closed. Closing releases only the drawer's own hold on the scroll
//! lock, so an open modal keeps the page pinned.

#[cfg(test)]
#[path = "mobile_menu_test.rs"]
mod mobile_menu_test;

use super::{ACTIVE, ARIA_EXPANDED, is_expanded, lock_page_scroll};

const LOCK_HOLDER: &str = "mobile-menu";
use crate::config::MobileMenuConfig;
use crate::dom::Dom;

pub struct MobileMenu<D: Dom> {
    toggle: D::Node,
    container: D::Node,
    links: Vec<D::Node>,
    breakpoint_px: f64,
}

impl<D: Dom> MobileMenu<D> {
    /// Requires both the toggle and the container; otherwise the drawer is inactive.
    pub fn init(dom: &D, config: &MobileMenuConfig) -> Option<Self> {
        let (Some(toggle), Some(container)) = (dom.query(&config.toggle), dom.query(&config.container)) else {
            log::debug!("mobile menu {} / {} not found", config.toggle, config.container);
            return None;
        };
        Some(Self { toggle, container, links: dom.query_all(&config.links), breakpoint_px: config.breakpoint_px })
    }

    #[must_use]
    pub fn is_open(&self, dom: &D) -> bool {
        is_expanded(dom, &self.toggle) || dom.has_class(&self.container, ACTIVE)
    }

    /// Toggle and nav-link clicks; returns whether the click was one of them.
    pub fn on_click(&mut self, dom: &mut D, target: &D::Node) -> bool {
        if dom.contains(&self.toggle, target) {
            let open = !self.is_open(dom);
            self.set_open(dom, open);
            return true;
        }
        if self.links.iter().any(|l| dom.contains(l, target)) {
            self.close(dom);
            return true;
        }
        false
    }

    /// Document-level click: anything outside the toggle and the drawer closes it.
    pub fn on_document_click(&mut self, dom: &mut D, target: &D::Node) {
        if !dom.contains(&self.toggle, target) && !dom.contains(&self.container, target) {
            self.close(dom);
        }
    }

    pub fn on_resize(&mut self, dom: &mut D) {
        if dom.inner_width() > self.breakpoint_px {
            self.close(dom);
        }
    }

    pub fn close(&mut self, dom: &mut D) {
        if self.is_open(dom) {
            self.set_open(dom, false);
        }
    }

    fn set_open(&self, dom: &mut D, open: bool) {
        dom.set_attribute(&self.toggle, ARIA_EXPANDED, if open { "true" } else { "false" });
        if open {
            dom.add_class(&self.container, ACTIVE);
        } else {
            dom.remove_class(&self.container, ACTIVE);
        }
        lock_page_scroll(dom, LOCK_HOLDER, open);
    }
}
