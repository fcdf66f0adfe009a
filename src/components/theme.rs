//! Dark/light theme preference.
//!
//! Reads the stored preference at startup and applies it as `data-theme` on
//! the body. The toggle writes back to the store and flips that attribute.
//! The icon always advertises the theme a click would switch *to*.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: an unreadable store means the default theme,
//! an unwritable one means the choice lasts only for this page view.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeConfig;
use crate::dom::Dom;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored value. Anything but the two known names is rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

pub struct ThemeController<D: Dom> {
    target: Option<D::Node>,
    toggle: Option<D::Node>,
    current: Theme,
    config: ThemeConfig,
}

impl<D: Dom> ThemeController<D> {
    pub fn init(dom: &mut D, store: &dyn KeyValueStore, config: &ThemeConfig) -> Self {
        let current = match store.get(&config.storage_key) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                log::debug!("ignoring unknown stored theme {raw:?}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                log::warn!("theme preference unreadable, using default: {err}");
                Theme::default()
            }
        };

        let toggle = dom.query(&config.toggle);
        if toggle.is_none() {
            log::debug!("theme toggle {} not found", config.toggle);
        }

        let controller = Self { target: dom.query(&config.target), toggle, current, config: config.clone() };
        controller.apply(dom);
        controller
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Handle a click; returns whether it hit the toggle.
    pub fn on_click(&mut self, dom: &mut D, store: &mut dyn KeyValueStore, target: &D::Node) -> bool {
        let Some(toggle) = &self.toggle else {
            return false;
        };
        if !dom.contains(toggle, target) {
            return false;
        }
        self.toggle(dom, store);
        true
    }

    /// Switch to the opposite of what the document currently shows.
    pub fn toggle(&mut self, dom: &mut D, store: &mut dyn KeyValueStore) -> Theme {
        let shown = self
            .target
            .as_ref()
            .and_then(|node| dom.attribute(node, &self.config.attribute))
            .map_or(self.current, |raw| if raw == "dark" { Theme::Dark } else { Theme::Light });
        self.current = shown.opposite();
        self.apply(dom);
        if let Err(err) = store.set(&self.config.storage_key, self.current.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
        self.current
    }

    fn apply(&self, dom: &mut D) {
        if let Some(target) = &self.target {
            dom.set_attribute(target, &self.config.attribute, self.current.as_str());
        }
        let Some(icon) = dom.query(&self.config.icon) else {
            return;
        };
        let (src, alt) = match self.current {
            Theme::Dark => (&self.config.icon_when_dark, &self.config.alt_when_dark),
            Theme::Light => (&self.config.icon_when_light, &self.config.alt_when_light),
        };
        dom.set_attribute(&icon, "src", src);
        dom.set_attribute(&icon, "alt", alt);
    }
}
