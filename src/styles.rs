//! Baseline animation stylesheet injected into `<head>`.
//!
//! Guarantees the entrance-animation end states exist even when the external
//! stylesheet loads late or fails. Injection is keyed by element id, so
//! re-initialization never adds a second copy.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

use crate::dom::Dom;

pub const STYLE_ELEMENT_ID: &str = "animation-styles";

pub const ANIMATION_CSS: &str = "
    .animate-fadeInUp {
        opacity: 1 !important;
        transform: translateY(0) !important;
    }

    .animate-fadeIn {
        opacity: 1 !important;
    }

    .hero h1,
    .hero p,
    .hero-cta,
    .hero-visual {
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
";

/// Append the stylesheet unless an element with its id already exists.
///
/// Returns whether a new element was inserted.
pub fn inject<D: Dom>(dom: &mut D) -> bool {
    if dom.element_by_id(STYLE_ELEMENT_ID).is_some() {
        return false;
    }
    let Some(head) = dom.head() else {
        log::debug!("no <head>; skipping animation styles");
        return false;
    };
    let Some(style) = dom.create_element("style") else {
        return false;
    };
    dom.set_attribute(&style, "id", STYLE_ELEMENT_ID);
    dom.set_text(&style, ANIMATION_CSS);
    dom.append_child(&head, &style);
    true
}
