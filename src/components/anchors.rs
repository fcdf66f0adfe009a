//! Smooth scrolling for same-page anchor links.
//!
//! The landing position leaves room for the fixed header: the target's
//! `offsetTop` minus the header height minus a small gap.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

use crate::config::AnchorConfig;
use crate::dom::Dom;

/// What a click on an anchor link did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorOutcome {
    /// The click was not on a tracked link.
    NotALink,
    /// Bare `#`, empty href or unknown id: default navigation proceeds.
    Ignored,
    /// Scrolled to `top`; default navigation must be suppressed.
    Scrolled { top: f64 },
}

impl AnchorOutcome {
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Scrolled { .. })
    }
}

pub struct SmoothScroll<D: Dom> {
    links: Vec<D::Node>,
    config: AnchorConfig,
}

impl<D: Dom> SmoothScroll<D> {
    pub fn init(dom: &D, config: &AnchorConfig) -> Self {
        Self { links: dom.query_all(&config.links), config: config.clone() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn on_click(&mut self, dom: &mut D, target: &D::Node) -> AnchorOutcome {
        let Some(link) = self.links.iter().find(|l| dom.contains(l, target)) else {
            return AnchorOutcome::NotALink;
        };
        let href = dom.attribute(link, "href").unwrap_or_default();
        let Some(top) = self.landing_position(dom, &href) else {
            return AnchorOutcome::Ignored;
        };
        dom.smooth_scroll_to(top);
        AnchorOutcome::Scrolled { top }
    }

    /// Scroll offset for `href`, or `None` when it names no element.
    #[must_use]
    pub fn landing_position(&self, dom: &D, href: &str) -> Option<f64> {
        let id = href.strip_prefix('#').unwrap_or(href);
        if id.is_empty() {
            return None;
        }
        let target = dom.element_by_id(id)?;
        let header = dom.query(&self.config.header).map_or(0.0, |h| dom.offset_height(&h));
        Some(dom.offset_top(&target) - header - self.config.offset_px)
    }
}
