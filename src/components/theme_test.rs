use super::*;
use crate::error::StoreError;
use crate::headless::{HeadlessDom, NodeId};
use crate::store::MemoryStore;

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write("denied".into()))
    }
}

fn page() -> (HeadlessDom, NodeId, NodeId) {
    let mut dom = HeadlessDom::new();
    let body = dom.body().unwrap();
    let toggle = dom.append(body, "button", &["theme-toggle"]);
    let icon = dom.append(toggle, "img", &["theme-toggle-icon"]);
    (dom, toggle, icon)
}

fn body_theme(dom: &HeadlessDom) -> Option<String> {
    dom.attribute(&dom.body().unwrap(), "data-theme")
}

// =============================================================
// Theme value
// =============================================================

#[test]
fn theme_parse_accepts_only_known_names() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_opposite_is_involution() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_ne!(theme.opposite(), theme);
        assert_eq!(theme.opposite().opposite(), theme);
    }
}

// =============================================================
// Startup
// =============================================================

#[test]
fn startup_defaults_to_dark() {
    let (mut dom, _, icon) = page();
    let controller = ThemeController::init(&mut dom, &MemoryStore::new(), &ThemeConfig::default());
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(body_theme(&dom).as_deref(), Some("dark"));
    assert_eq!(dom.attribute(&icon, "src").as_deref(), Some("assets/icons/light-theme-icon.svg"));
    assert_eq!(dom.attribute(&icon, "alt").as_deref(), Some("Switch to light mode"));
}

#[test]
fn startup_applies_stored_light() {
    let (mut dom, _, icon) = page();
    let store = MemoryStore::with("theme", "light");
    let controller = ThemeController::init(&mut dom, &store, &ThemeConfig::default());
    assert_eq!(controller.current(), Theme::Light);
    assert_eq!(body_theme(&dom).as_deref(), Some("light"));
    assert_eq!(dom.attribute(&icon, "src").as_deref(), Some("assets/icons/dark-theme-icon.svg"));
    assert_eq!(dom.attribute(&icon, "alt").as_deref(), Some("Switch to dark mode"));
}

#[test]
fn startup_ignores_unknown_stored_value() {
    let (mut dom, _, _) = page();
    let store = MemoryStore::with("theme", "solarized");
    let controller = ThemeController::init(&mut dom, &store, &ThemeConfig::default());
    assert_eq!(controller.current(), Theme::Dark);
}

#[test]
fn startup_without_toggle_still_applies_theme() {
    let mut dom = HeadlessDom::new();
    let store = MemoryStore::with("theme", "light");
    let mut controller = ThemeController::init(&mut dom, &store, &ThemeConfig::default());
    assert_eq!(body_theme(&dom).as_deref(), Some("light"));

    let body = dom.body().unwrap();
    let mut store = store;
    assert!(!controller.on_click(&mut dom, &mut store, &body));
    assert_eq!(body_theme(&dom).as_deref(), Some("light"));
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn click_on_toggle_switches_and_persists() {
    let (mut dom, toggle, icon) = page();
    let mut store = MemoryStore::new();
    let mut controller = ThemeController::init(&mut dom, &store, &ThemeConfig::default());

    assert!(controller.on_click(&mut dom, &mut store, &toggle));
    assert_eq!(controller.current(), Theme::Light);
    assert_eq!(body_theme(&dom).as_deref(), Some("light"));
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    assert_eq!(dom.attribute(&icon, "alt").as_deref(), Some("Switch to dark mode"));
}

#[test]
fn click_on_icon_inside_toggle_counts() {
    let (mut dom, _, icon) = page();
    let mut store = MemoryStore::new();
    let mut controller = ThemeController::init(&mut dom, &store, &ThemeConfig::default());
    assert!(controller.on_click(&mut dom, &mut store, &icon));
    assert_eq!(controller.current(), Theme::Light);
}

#[test]
fn click_elsewhere_is_ignored() {
    let (mut dom, _, _) = page();
    let body = dom.body().unwrap();
    let other = dom.append(body, "p", &[]);
    let mut store = MemoryStore::new();
    let mut controller = ThemeController::init(&mut dom, &store, &ThemeConfig::default());
    assert!(!controller.on_click(&mut dom, &mut store, &other));
    assert_eq!(store.get("theme").unwrap(), None);
}

#[test]
fn toggling_twice_restores_each_theme() {
    for start in ["dark", "light"] {
        let (mut dom, toggle, _) = page();
        let mut store = MemoryStore::with("theme", start);
        let mut controller = ThemeController::init(&mut dom, &store, &ThemeConfig::default());
        controller.on_click(&mut dom, &mut store, &toggle);
        controller.on_click(&mut dom, &mut store, &toggle);
        assert_eq!(body_theme(&dom).as_deref(), Some(start));
        assert_eq!(store.get("theme").unwrap().as_deref(), Some(start));
    }
}

#[test]
fn toggle_follows_attribute_changed_elsewhere() {
    let (mut dom, _, _) = page();
    let mut store = MemoryStore::new();
    let mut controller = ThemeController::init(&mut dom, &store, &ThemeConfig::default());
    let body = dom.body().unwrap();
    dom.set_attribute(&body, "data-theme", "light");
    assert_eq!(controller.toggle(&mut dom, &mut store), Theme::Dark);
}

#[test]
fn broken_store_still_toggles_in_memory() {
    let (mut dom, toggle, _) = page();
    let mut store = BrokenStore;
    let mut controller = ThemeController::init(&mut dom, &store, &ThemeConfig::default());
    assert_eq!(controller.current(), Theme::Dark);
    assert!(controller.on_click(&mut dom, &mut store, &toggle));
    assert_eq!(body_theme(&dom).as_deref(), Some("light"));
}
