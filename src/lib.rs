#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod blog;
pub mod contact;
pub mod content;
#[cfg(any(feature = "ssr", feature = "rss"))]
mod highlight;
pub mod motion;
pub mod profile;
#[cfg(feature = "rss")]
pub mod rss;
pub mod scroll;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (hot reload) is harmless
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating {}", profile::DOMAIN);
    leptos::mount::hydrate_body(App);
}
