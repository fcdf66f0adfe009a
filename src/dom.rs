//! The DOM capability surface the components are written against.
//!
//! Components never touch `web-sys` directly. They locate collaborators with
//! selectors, read and write attributes, classes and inline styles, and ask
//! for a handful of layout metrics. `web::WebDom` implements this over the
//! live document; `headless::HeadlessDom` implements it in memory for tests.
//!
//! Write operations are infallible by contract: a browser call that fails is
//! logged by the implementation and otherwise ignored, matching the page's
//! "feature silently not activating" failure mode.

use std::fmt::Debug;

pub trait Dom {
    /// Element handle. Cheap to clone; equality is element identity.
    type Node: Clone + PartialEq + Debug;

    // --- Lookup ---

    fn document_element(&self) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;
    fn head(&self) -> Option<Self::Node>;

    /// First element in document order matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// First descendant of `scope` matching `selector`.
    fn query_within(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    // --- Attributes and classes ---

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Flip `class` on `node`, returning whether it is now present.
    fn toggle_class(&mut self, node: &Self::Node, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    // --- Inline style ---

    fn style(&self, node: &Self::Node, property: &str) -> Option<String>;
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    // --- Layout metrics (CSS pixels) ---

    fn scroll_height(&self, node: &Self::Node) -> f64;
    fn offset_top(&self, node: &Self::Node) -> f64;
    fn offset_height(&self, node: &Self::Node) -> f64;

    // --- Tree mutation ---

    /// A detached element, or `None` when the document refuses the tag.
    fn create_element(&mut self, tag: &str) -> Option<Self::Node>;
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);
    fn remove(&mut self, node: &Self::Node);
    fn set_text(&mut self, node: &Self::Node, text: &str);

    // --- Viewport ---

    /// Vertical scroll offset of the page.
    fn scroll_y(&self) -> f64;
    fn inner_width(&self) -> f64;
    /// Smooth-scroll the page so its top edge lands at `top`.
    fn smooth_scroll_to(&mut self, top: f64);
}
