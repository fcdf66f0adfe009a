#![allow(clippy::float_cmp)]

use super::*;
use crate::headless::{HeadlessDom, NodeId};

fn link(dom: &mut HeadlessDom, href: &str) -> NodeId {
    let body = dom.body().unwrap();
    let a = dom.append(body, "a", &[]);
    dom.set_attribute(&a, "href", href);
    a
}

fn page() -> HeadlessDom {
    let mut dom = HeadlessDom::new();
    let body = dom.body().unwrap();
    let header = dom.append(body, "header", &["header"]);
    dom.set_offset_height(header, 80.0);
    let section = dom.append(body, "section", &[]);
    dom.set_attribute(&section, "id", "features");
    dom.set_offset_top(section, 1_000.0);
    dom
}

#[test]
fn valid_fragment_scrolls_below_header_and_prevents_default() {
    let mut dom = page();
    let a = link(&mut dom, "#features");
    let mut anchors = SmoothScroll::init(&dom, &AnchorConfig::default());

    let outcome = anchors.on_click(&mut dom, &a);
    assert_eq!(outcome, AnchorOutcome::Scrolled { top: 900.0 });
    assert!(outcome.prevents_default());
    assert_eq!(dom.scroll_log(), &[900.0]);
}

#[test]
fn bare_hash_does_nothing_and_allows_default() {
    let mut dom = page();
    let a = link(&mut dom, "#");
    let mut anchors = SmoothScroll::init(&dom, &AnchorConfig::default());

    let outcome = anchors.on_click(&mut dom, &a);
    assert_eq!(outcome, AnchorOutcome::Ignored);
    assert!(!outcome.prevents_default());
    assert!(dom.scroll_log().is_empty());
}

#[test]
fn unknown_fragment_does_nothing() {
    let mut dom = page();
    let a = link(&mut dom, "#pricing");
    let mut anchors = SmoothScroll::init(&dom, &AnchorConfig::default());
    assert_eq!(anchors.on_click(&mut dom, &a), AnchorOutcome::Ignored);
    assert!(dom.scroll_log().is_empty());
}

#[test]
fn missing_header_counts_as_zero_height() {
    let mut dom = HeadlessDom::new();
    let body = dom.body().unwrap();
    let section = dom.append(body, "section", &[]);
    dom.set_attribute(&section, "id", "faq");
    dom.set_offset_top(section, 400.0);
    let a = link(&mut dom, "#faq");
    let mut anchors = SmoothScroll::init(&dom, &AnchorConfig::default());
    assert_eq!(anchors.on_click(&mut dom, &a), AnchorOutcome::Scrolled { top: 380.0 });
}

#[test]
fn click_on_child_of_link_counts() {
    let mut dom = page();
    let a = link(&mut dom, "#features");
    let label = dom.append(a, "span", &[]);
    let mut anchors = SmoothScroll::init(&dom, &AnchorConfig::default());
    assert!(anchors.on_click(&mut dom, &label).prevents_default());
}

#[test]
fn only_fragment_links_are_tracked() {
    let mut dom = page();
    link(&mut dom, "#features");
    let external = link(&mut dom, "https://example.com/#features");
    let mut anchors = SmoothScroll::init(&dom, &AnchorConfig::default());
    assert_eq!(anchors.len(), 1);
    assert_eq!(anchors.on_click(&mut dom, &external), AnchorOutcome::NotALink);
}
