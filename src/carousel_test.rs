use super::*;
use crate::headless::HeadlessDom;

#[test]
fn options_serialize_in_widget_shape() {
    let config = CarouselConfig::default();
    let value = serde_json::to_value(config.options()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "pagination": { "el": ".swiper-pagination", "type": "progressbar" },
            "navigation": { "nextEl": ".swiper-button-next", "prevEl": ".swiper-button-prev" }
        })
    );
}

#[test]
fn should_mount_requires_container() {
    let mut dom = HeadlessDom::new();
    let config = CarouselConfig::default();
    assert!(!config.should_mount(&dom));

    let body = dom.body().unwrap();
    dom.append(body, "div", &["swiper", "mySwiper"]);
    assert!(config.should_mount(&dom));

    let disabled = CarouselConfig { enabled: false, ..CarouselConfig::default() };
    assert!(!disabled.should_mount(&dom));
}
