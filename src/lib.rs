//! Novack Security - Corporate Security Platform Landing Page
//!
//! A server-rendered, hydrated marketing page built with Leptos and
//! WebAssembly. Headline figures count up once when they scroll into view.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use leptos::prelude::*;
    console_error_panic_hook::set_once();
    let site_url = SiteUrl::from_document();
    leptos::mount::hydrate_body(move || {
        provide_context(site_url);
        view! { <App/> }
    });
}
