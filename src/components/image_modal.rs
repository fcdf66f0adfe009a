//! Lightbox for product images.
//!
//! One overlay is built at startup and appended to the body, hidden until an
//! image is activated. Close button, backdrop and Escape all run the same
//! close, which is a no-op when the overlay is already hidden.

#[cfg(test)]
#[path = "image_modal_test.rs"]
mod image_modal_test;

use super::{ACTIVE, lock_page_scroll};
use crate::config::ModalConfig;
use crate::dom::Dom;

pub const OVERLAY_CLASS: &str = "image-modal";

const LOCK_HOLDER: &str = "image-modal";

pub struct ImageModal<D: Dom> {
    overlay: D::Node,
    image: D::Node,
    close_button: D::Node,
    backdrop: D::Node,
    sources: Vec<D::Node>,
}

impl<D: Dom> ImageModal<D> {
    pub fn init(dom: &mut D, config: &ModalConfig) -> Option<Self> {
        let Some(body) = dom.body() else {
            log::debug!("no <body>; image modal disabled");
            return None;
        };

        let overlay = element(dom, "div", OVERLAY_CLASS)?;
        let backdrop = element(dom, "div", "modal-backdrop")?;
        let content = element(dom, "div", "modal-content")?;
        let close_button = element(dom, "button", "modal-close")?;
        dom.set_attribute(&close_button, "aria-label", "Close modal");
        dom.set_text(&close_button, "\u{d7}");
        let image = element(dom, "img", "modal-image")?;
        dom.set_attribute(&image, "src", "");
        dom.set_attribute(&image, "alt", "");

        dom.append_child(&content, &close_button);
        dom.append_child(&content, &image);
        dom.append_child(&overlay, &backdrop);
        dom.append_child(&overlay, &content);
        dom.append_child(&body, &overlay);

        let sources = dom
            .query_all(&config.frame)
            .into_iter()
            .filter_map(|frame| dom.query_within(&frame, &config.image))
            .collect::<Vec<_>>();
        for source in &sources {
            dom.set_style(source, "cursor", "pointer");
        }

        Some(Self { overlay, image, close_button, backdrop, sources })
    }

    #[must_use]
    pub fn is_open(&self, dom: &D) -> bool {
        dom.has_class(&self.overlay, ACTIVE)
    }

    /// `(src, alt)` currently shown by the overlay.
    #[must_use]
    pub fn current_image(&self, dom: &D) -> (String, String) {
        (
            dom.attribute(&self.image, "src").unwrap_or_default(),
            dom.attribute(&self.image, "alt").unwrap_or_default(),
        )
    }

    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Image, close-button and backdrop clicks; returns whether one was hit.
    pub fn on_click(&mut self, dom: &mut D, target: &D::Node) -> bool {
        if let Some(source) = self.sources.iter().find(|s| dom.contains(s, target)).cloned() {
            self.open(dom, &source);
            return true;
        }
        if dom.contains(&self.close_button, target) || dom.contains(&self.backdrop, target) {
            self.close(dom);
            return true;
        }
        false
    }

    /// Escape closes while visible; returns whether the key was consumed.
    pub fn on_key(&mut self, dom: &mut D, key: &str) -> bool {
        if key != "Escape" || !self.is_open(dom) {
            return false;
        }
        self.close(dom);
        true
    }

    pub fn open(&mut self, dom: &mut D, source: &D::Node) {
        let src = dom.attribute(source, "src").unwrap_or_default();
        let alt = dom.attribute(source, "alt").unwrap_or_default();
        dom.set_attribute(&self.image, "src", &src);
        dom.set_attribute(&self.image, "alt", &alt);
        dom.add_class(&self.overlay, ACTIVE);
        lock_page_scroll(dom, LOCK_HOLDER, true);
    }

    pub fn close(&mut self, dom: &mut D) {
        if !self.is_open(dom) {
            return;
        }
        dom.remove_class(&self.overlay, ACTIVE);
        lock_page_scroll(dom, LOCK_HOLDER, false);
    }

    /// Detach the overlay so a later init starts from a clean page.
    pub fn teardown(&mut self, dom: &mut D) {
        self.close(dom);
        dom.remove(&self.overlay);
    }
}

fn element<D: Dom>(dom: &mut D, tag: &str, class: &str) -> Option<D::Node> {
    let node = dom.create_element(tag)?;
    dom.add_class(&node, class);
    Some(node)
}
