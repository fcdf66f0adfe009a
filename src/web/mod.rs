//! Browser entry point and glue (feature `hydrate`).
//!
//! LIFECYCLE
//! =========
//! `start` runs when the module loads. Once the document is parsed it builds
//! the [`Site`] and installs one delegated listener per event type on the
//! document or window, then mounts the carousel. The resulting
//! [`SiteHandle`] is parked in a thread-local so `teardownSite` (or a
//! repeated `initSite`) can remove the listeners and cancel pending work.
//!
//! Scheduled tasks re-enter the site through a weak reference, so a task
//! firing after teardown finds nothing and is dropped.

mod dom;
mod scheduler;
mod storage;

pub use dom::WebDom;
pub use scheduler::{TaskSink, WebScheduler};
pub use storage::LocalStore;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, KeyboardEvent, Window};

use crate::carousel::CarouselConfig;
use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::dom::Dom;
use crate::error::SiteError;
use crate::site::{Event, Outcome, Site};
use crate::store::{KeyValueStore, MemoryStore};

type WebSite = Site<WebDom, WebScheduler>;
type Handler = Box<dyn FnMut(web_sys::Event)>;

thread_local! {
    static ACTIVE: RefCell<Option<SiteHandle>> = const { RefCell::new(None) };
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already installed");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(init_site);
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
            log::error!("cannot wait for DOMContentLoaded: {}", describe(&err));
        }
    } else {
        init_site();
    }
}

/// Initialize the page, tearing down any previous instance first.
#[wasm_bindgen(js_name = initSite)]
pub fn init_site() {
    teardown_site();
    match boot() {
        Ok(handle) => ACTIVE.with(|active| *active.borrow_mut() = Some(handle)),
        Err(err) => log::error!("site init failed: {err}"),
    }
}

/// Remove every listener and cancel pending frames and timers.
#[wasm_bindgen(js_name = teardownSite)]
pub fn teardown_site() {
    let previous = ACTIVE.with(|active| active.borrow_mut().take());
    if let Some(handle) = previous {
        handle.teardown();
    }
}

// =============================================================================
// SITE HANDLE
// =============================================================================

pub struct SiteHandle {
    site: Rc<RefCell<WebSite>>,
    listeners: Vec<Listener>,
    carousel: Option<JsValue>,
}

impl SiteHandle {
    fn teardown(self) {
        for listener in self.listeners {
            listener.remove();
        }
        if let Some(carousel) = &self.carousel {
            destroy_carousel(carousel);
        }
        match self.site.try_borrow_mut() {
            Ok(mut site) => site.teardown(),
            Err(_) => log::warn!("site busy during teardown"),
        }
    }
}

fn boot() -> Result<SiteHandle, SiteError> {
    let dom = WebDom::new()?;
    let window = dom.window().clone();
    let document = dom.document().clone();
    let config = load_config(&dom);
    let store = open_store(&window);
    let carousel = mount_carousel(&dom, &config.carousel);

    let site = Rc::new_cyclic(|weak: &Weak<RefCell<WebSite>>| {
        let weak = weak.clone();
        let sink: TaskSink = Rc::new(move |task| {
            let Some(site) = weak.upgrade() else {
                return;
            };
            match site.try_borrow_mut() {
                Ok(mut site) => site.run_task(task),
                Err(_) => log::warn!("task dropped: site busy"),
            }
        });
        RefCell::new(Site::new(dom, WebScheduler::new(window.clone(), sink), store, config))
    });

    let listeners = match listen(&site, &window, &document) {
        Ok(listeners) => listeners,
        Err(err) => {
            if let Some(carousel) = &carousel {
                destroy_carousel(carousel);
            }
            return Err(err);
        }
    };
    Ok(SiteHandle { site, listeners, carousel })
}

fn load_config(dom: &WebDom) -> SiteConfig {
    let Some(raw) = dom.element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("site config rejected, using defaults: {err}");
            SiteConfig::default()
        }
    }
}

fn open_store(window: &Window) -> Box<dyn KeyValueStore> {
    match LocalStore::open(window) {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("{err}; theme preference will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

// =============================================================================
// EVENT LISTENERS
// =============================================================================

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    fn install(target: &EventTarget, kind: &'static str, passive: bool, handler: Handler) -> Result<Self, SiteError> {
        let callback = Closure::wrap(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| SiteError::Js(describe(&err)))?;
        Ok(Self { target: target.clone(), kind, callback })
    }

    fn remove(self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("removeEventListener {} failed: {}", self.kind, describe(&err));
        }
    }
}

fn dispatch(site: &Weak<RefCell<WebSite>>, event: Event<Element>) -> Outcome {
    let Some(site) = site.upgrade() else {
        return Outcome::default();
    };
    match site.try_borrow_mut() {
        Ok(mut site) => site.handle(event),
        Err(_) => {
            log::debug!("event dropped: site busy");
            Outcome::default()
        }
    }
}

fn listen(site: &Rc<RefCell<WebSite>>, window: &Window, document: &Document) -> Result<Vec<Listener>, SiteError> {
    let on_click: Handler = {
        let site = Rc::downgrade(site);
        Box::new(move |event: web_sys::Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_ref::<Element>().cloned()) else {
                return;
            };
            if dispatch(&site, Event::Click(target)).prevent_default {
                event.prevent_default();
            }
        })
    };
    let on_key: Handler = {
        let site = Rc::downgrade(site);
        Box::new(move |event: web_sys::Event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                dispatch(&site, Event::KeyDown(key));
            }
        })
    };
    let on_scroll: Handler = {
        let site = Rc::downgrade(site);
        Box::new(move |_: web_sys::Event| {
            dispatch(&site, Event::Scroll);
        })
    };
    let on_resize: Handler = {
        let site = Rc::downgrade(site);
        Box::new(move |_: web_sys::Event| {
            dispatch(&site, Event::Resize);
        })
    };

    let specs: [(&EventTarget, &'static str, bool, Handler); 4] = [
        (document.as_ref(), "click", false, on_click),
        (document.as_ref(), "keydown", false, on_key),
        (window.as_ref(), "scroll", true, on_scroll),
        (window.as_ref(), "resize", true, on_resize),
    ];

    let mut listeners = Vec::with_capacity(specs.len());
    for (target, kind, passive, handler) in specs {
        match Listener::install(target, kind, passive, handler) {
            Ok(listener) => listeners.push(listener),
            Err(err) => {
                for listener in listeners {
                    listener.remove();
                }
                return Err(err);
            }
        }
    }
    Ok(listeners)
}

// =============================================================================
// CAROUSEL
// =============================================================================

fn mount_carousel(dom: &WebDom, config: &CarouselConfig) -> Option<JsValue> {
    if !config.should_mount(dom) {
        return None;
    }
    let constructor = match js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("Swiper")) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Swiper lookup failed: {}", describe(&err));
            return None;
        }
    };
    let Some(constructor) = constructor.dyn_ref::<js_sys::Function>() else {
        log::warn!("Swiper not loaded; carousel disabled");
        return None;
    };

    let options = match carousel_options(config) {
        Ok(options) => options,
        Err(err) => {
            log::warn!("carousel options unusable: {err}");
            return None;
        }
    };
    let args = js_sys::Array::of2(&JsValue::from_str(&config.container), &options);
    match js_sys::Reflect::construct(constructor, &args) {
        Ok(instance) => {
            log::debug!("carousel mounted on {}", config.container);
            Some(instance)
        }
        Err(err) => {
            log::warn!("Swiper constructor threw: {}", describe(&err));
            None
        }
    }
}

fn carousel_options(config: &CarouselConfig) -> Result<JsValue, SiteError> {
    let json = serde_json::to_string(&config.options())?;
    js_sys::JSON::parse(&json).map_err(|err| SiteError::Js(describe(&err)))
}

fn destroy_carousel(instance: &JsValue) {
    let destroy = match js_sys::Reflect::get(instance, &JsValue::from_str("destroy")) {
        Ok(value) => value,
        Err(err) => {
            log::debug!("carousel has no destroy: {}", describe(&err));
            return;
        }
    };
    if let Some(destroy) = destroy.dyn_ref::<js_sys::Function>() {
        if let Err(err) = destroy.call0(instance) {
            log::debug!("carousel destroy threw: {}", describe(&err));
        }
    }
}
