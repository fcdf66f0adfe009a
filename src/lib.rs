//! Progressive enhancement for the marketing landing page.
//!
//! This crate is compiled to WebAssembly and runs in the browser once the
//! static markup is parsed. It wires the interactive pieces of the page:
//! theme switching with a persisted preference, the FAQ accordion, the
//! step tabs, scroll-driven header and back-to-top state, in-page anchor
//! scrolling, the mobile navigation drawer, and the image lightbox.
//!
//! Everything except [`web`] is plain Rust over the [`dom::Dom`] and
//! [`schedule::Scheduler`] traits, so the behavior is exercised natively
//! against [`headless::HeadlessDom`] and [`schedule::ManualScheduler`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Owns all components and routes events and scheduled tasks |
//! | [`components`] | The individual page widgets |
//! | [`config`] | Selectors and tunables, deserialized from an inline JSON block |
//! | [`dom`] | Document access trait |
//! | [`headless`] | In-memory document used by tests |
//! | [`selector`] | The CSS selector subset understood by [`headless`] |
//! | [`schedule`] | Frame/timer continuations as data |
//! | [`store`] | Key-value persistence for the theme preference |
//! | [`styles`] | Animation stylesheet injected at startup |
//! | [`carousel`] | Options for the third-party testimonial carousel |
//! | [`error`] | Error types |
//! | `web` | Browser bindings (feature `hydrate`) |

pub mod carousel;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod headless;
pub mod schedule;
pub mod selector;
pub mod site;
pub mod store;
pub mod styles;

#[cfg(feature = "hydrate")]
pub mod web;
