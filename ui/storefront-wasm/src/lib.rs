//! Storefront WASM Frontend
//!
//! Browser glue for the storefront: binds the page's elements, runs the
//! session gate, then wires the handlers from `sf-shop-core` to the DOM.

pub mod api;
pub mod dom;
pub mod events;
pub mod reveal;
pub mod storage;
pub mod surface;
pub mod theme;

use sf_api_types::Page;
use sf_shop_core::{apply, handlers};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::storage::LocalStore;
use crate::surface::DomSurface;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    let document = dom::document();
    if !dom::is_loading(&document) {
        return init();
    }
    let cb = Closure::once(move || {
        if let Err(e) = init() {
            gloo_console::error!("storefront init failed", e);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Page-load sequence: gate first, and nothing else if it redirects.
fn init() -> Result<(), JsValue> {
    let store = LocalStore::open();
    let page = Page::from_path(&dom::window().location().pathname()?);
    let load = handlers::page_load(&store, &page);

    let els = dom::Elements::bind();
    apply(&load.effects, &mut DomSurface::new(&els));
    if !load.proceed() {
        return Ok(());
    }

    events::bind_events(&els, &store);
    if let Err(e) = reveal::observe() {
        gloo_console::warn!("scroll reveal unavailable", e);
    }

    wasm_bindgen_futures::spawn_local(async move {
        api::load_catalog(&els).await;
    });

    Ok(())
}
