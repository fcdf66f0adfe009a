//! Carousel widget configuration.
//!
//! The slider itself is a third-party script exposing a global `Swiper`
//! constructor. This crate only decides whether to mount it and with which
//! options; `web::mount_carousel` performs the constructor call.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use serde::{Deserialize, Serialize};

use crate::dom::Dom;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub enabled: bool,
    pub container: String,
    pub pagination_el: String,
    pub pagination_type: String,
    pub next_el: String,
    pub prev_el: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            container: ".mySwiper".into(),
            pagination_el: ".swiper-pagination".into(),
            pagination_type: "progressbar".into(),
            next_el: ".swiper-button-next".into(),
            prev_el: ".swiper-button-prev".into(),
        }
    }
}

/// Options object in the shape the widget's constructor expects.
#[derive(Debug, Serialize)]
pub struct SwiperOptions<'a> {
    pub pagination: Pagination<'a>,
    pub navigation: Navigation<'a>,
}

#[derive(Debug, Serialize)]
pub struct Pagination<'a> {
    pub el: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation<'a> {
    pub next_el: &'a str,
    pub prev_el: &'a str,
}

impl CarouselConfig {
    #[must_use]
    pub fn options(&self) -> SwiperOptions<'_> {
        SwiperOptions {
            pagination: Pagination { el: &self.pagination_el, kind: &self.pagination_type },
            navigation: Navigation { next_el: &self.next_el, prev_el: &self.prev_el },
        }
    }

    /// Mount only when enabled and the container is in the page.
    #[must_use]
    pub fn should_mount<D: Dom>(&self, dom: &D) -> bool {
        if !self.enabled {
            return false;
        }
        if dom.query(&self.container).is_none() {
            log::debug!("carousel container {} not found", self.container);
            return false;
        }
        true
    }
}
