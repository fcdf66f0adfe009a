//! Site configuration: selectors, thresholds and timings.
//!
//! Every section has defaults matching the shipped markup, so the page works
//! with no configuration at all. A page may override any subset by embedding
//! `<script type="application/json" id="site-config">` with partial JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::carousel::CarouselConfig;
use crate::error::SiteError;
use crate::selector::Selector;

/// Element id of the optional inline JSON config.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub accordion: AccordionConfig,
    pub tabs: TabsConfig,
    pub scroll: ScrollConfig,
    pub anchors: AnchorConfig,
    pub mobile_menu: MobileMenuConfig,
    pub modal: ModalConfig,
    pub carousel: CarouselConfig,
}

impl SiteConfig {
    /// Parse and validate a (possibly partial) JSON override.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every configured selector is in the supported subset.
    pub fn validate(&self) -> Result<(), SiteError> {
        for selector in self.selectors() {
            Selector::parse(selector)?;
        }
        Ok(())
    }

    fn selectors(&self) -> [&str; 21] {
        [
            &self.theme.toggle,
            &self.theme.icon,
            &self.accordion.question,
            &self.accordion.answer,
            &self.accordion.content,
            &self.tabs.button,
            &self.tabs.panel,
            &self.tabs.image,
            &self.scroll.header,
            &self.anchors.links,
            &self.anchors.header,
            &self.mobile_menu.toggle,
            &self.mobile_menu.container,
            &self.mobile_menu.links,
            &self.modal.frame,
            &self.modal.image,
            &self.carousel.container,
            &self.carousel.pagination_el,
            &self.carousel.next_el,
            &self.carousel.prev_el,
            &self.theme.target,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle: String,
    pub icon: String,
    /// Element carrying the theme attribute.
    pub target: String,
    pub attribute: String,
    pub storage_key: String,
    pub icon_when_dark: String,
    pub alt_when_dark: String,
    pub icon_when_light: String,
    pub alt_when_light: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle: ".theme-toggle".into(),
            icon: ".theme-toggle-icon".into(),
            target: "body".into(),
            attribute: "data-theme".into(),
            storage_key: "theme".into(),
            icon_when_dark: "assets/icons/light-theme-icon.svg".into(),
            alt_when_dark: "Switch to light mode".into(),
            icon_when_light: "assets/icons/dark-theme-icon.svg".into(),
            alt_when_light: "Switch to dark mode".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccordionConfig {
    pub question: String,
    pub answer: String,
    pub content: String,
    /// Collapse the other items when one opens.
    pub exclusive: bool,
    /// Added to the content's scroll height to cover the answer's padding.
    pub padding_px: f64,
    /// Delay after the opening frame before `max-height` is released.
    pub settle_ms: u32,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            question: ".faq-question".into(),
            answer: ".faq-answer".into(),
            content: ".faq-content".into(),
            exclusive: false,
            padding_px: 40.0,
            settle_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    pub button: String,
    pub panel: String,
    pub image: String,
    pub target_attribute: String,
    pub activation_delay_ms: u32,
    pub entrance_animation: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            button: ".tab-button".into(),
            panel: ".tab-content".into(),
            image: ".step-image".into(),
            target_attribute: "data-tab".into(),
            activation_delay_ms: 50,
            entrance_animation: "slideInRight 0.8s ease-out 0.2s forwards".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub header: String,
    pub header_threshold: f64,
    pub back_to_top_id: String,
    pub back_to_top_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header: ".header".into(),
            header_threshold: 100.0,
            back_to_top_id: "backToTop".into(),
            back_to_top_threshold: 200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub links: String,
    pub header: String,
    /// Extra gap left between the fixed header and the scrolled-to target.
    pub offset_px: f64,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self { links: r##"a[href^="#"]"##.into(), header: ".header".into(), offset_px: 20.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MobileMenuConfig {
    pub toggle: String,
    pub container: String,
    pub links: String,
    /// Viewport widths above this force the drawer closed.
    pub breakpoint_px: f64,
}

impl Default for MobileMenuConfig {
    fn default() -> Self {
        Self {
            toggle: ".mobile-menu-toggle".into(),
            container: ".nav-content".into(),
            links: ".nav-links a".into(),
            breakpoint_px: 768.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub frame: String,
    /// Clickable image, looked up inside each frame.
    pub image: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self { frame: ".image-frame".into(), image: ".placeholder-content img".into() }
    }
}
