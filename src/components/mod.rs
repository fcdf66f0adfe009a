//! Interactive page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component is constructed once from the live document, owns the
//! elements it found, and reacts to routed events (and its own scheduled
//! tasks). None reads another component's state. A component whose required
//! elements are missing is not constructed at all.

pub mod accordion;
pub mod anchors;
pub mod image_modal;
pub mod mobile_menu;
pub mod scroll;
pub mod tabs;
pub mod theme;

use crate::dom::Dom;

pub(crate) const ACTIVE: &str = "active";
pub(crate) const ARIA_EXPANDED: &str = "aria-expanded";

/// Body attribute listing every component currently holding the scroll lock.
pub(crate) const SCROLL_LOCK_HOLDERS: &str = "data-scroll-lock";

/// Page-level scroll lock shared by the drawer and the modal.
///
/// Each holder is recorded on the body; overflow returns to `auto` only once
/// the last holder lets go.
pub(crate) fn lock_page_scroll<D: Dom>(dom: &mut D, holder: &str, locked: bool) {
    let Some(body) = dom.body() else {
        return;
    };
    let current = dom.attribute(&body, SCROLL_LOCK_HOLDERS).unwrap_or_default();
    let mut holders: Vec<&str> = current.split_whitespace().filter(|h| *h != holder).collect();
    if locked {
        holders.push(holder);
    }
    dom.set_attribute(&body, SCROLL_LOCK_HOLDERS, &holders.join(" "));
    dom.set_style(&body, "overflow", if holders.is_empty() { "auto" } else { "hidden" });
}

/// `aria-expanded="true"` check shared by the accordion and the drawer.
pub(crate) fn is_expanded<D: Dom>(dom: &D, node: &D::Node) -> bool {
    dom.attribute(node, ARIA_EXPANDED).as_deref() == Some("true")
}
