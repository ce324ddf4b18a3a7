//! Event binding.
//!
//! Wires every storefront listener. Each listener turns the DOM event into a
//! handler call and applies the returned effects through a [`DomSurface`].

use sf_api_types::CartItem;
use sf_session::{DEMO_CREDENTIALS, LoginAttempt};
use sf_shop_core::{Effect, LogoutPrompt, apply, handlers};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, EventTarget};

use crate::dom::{self, Elements};
use crate::storage::LocalStore;
use crate::surface::DomSurface;
use crate::theme;

const ADD_TO_CART_BUTTONS: &str = ".product-card .btn-primary, .btn-add-to-cart";
const REMOVE_BUTTON: &str = ".remove-btn";

/// Attach a listener for the lifetime of the page.
fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_err()
    {
        gloo_console::warn!("could not attach listener:", event.to_string());
    }
    cb.forget();
}

/// Helper: listener that suppresses the default action and applies the
/// effects produced by `$handler`.
macro_rules! on_event {
    ($target:expr, $event:expr, $els:expr, $handler:expr) => {{
        let els = $els.clone();
        let handler = $handler;
        listen($target, $event, move |event: web_sys::Event| {
            event.prevent_default();
            let effects: Vec<Effect> = handler();
            apply(&effects, &mut DomSurface::new(&els));
        });
    }};
}

/// Bind all storefront listeners. Call once after the gate let the page load.
pub fn bind_events(els: &Elements, store: &LocalStore) {
    // ── Login ──
    if let Some(form) = &els.login_form {
        let store = store.clone();
        let fields = (els.username.clone(), els.password.clone());
        on_event!(form, "submit", els, move || {
            let username = fields.0.as_ref().map(dom::get_input_value).unwrap_or_default();
            let password = fields.1.as_ref().map(dom::get_input_value).unwrap_or_default();
            let attempt = LoginAttempt::new(&username, &password);
            handlers::submit_login(&store, &attempt, &DEMO_CREDENTIALS)
        });
    }

    // ── Logout ──
    if let Some(btn) = &els.logout_btn {
        let store = store.clone();
        on_event!(btn, "click", els, move || handlers::logout(
            &store,
            LogoutPrompt::Confirm
        ));
    }
    if let Some(btn) = &els.logout {
        let store = store.clone();
        on_event!(btn, "click", els, move || handlers::logout(
            &store,
            LogoutPrompt::Silent
        ));
    }
    if let Some(link) = &els.login_link {
        // Only intercepts while it reads "Logout"; otherwise it is a plain link.
        let store = store.clone();
        let els2 = els.clone();
        listen(link, "click", move |event| {
            if sf_session::is_logged_in(&store) {
                event.prevent_default();
                let effects = handlers::logout(&store, LogoutPrompt::Silent);
                apply(&effects, &mut DomSurface::new(&els2));
            }
        });
    }

    // ── Theme ──
    if let Some(toggle) = &els.theme_toggle {
        let store = store.clone();
        let els2 = els.clone();
        listen(toggle, "click", move |_| {
            let effects = handlers::toggle_theme(&store, theme::current(&els2));
            apply(&effects, &mut DomSurface::new(&els2));
        });
    }

    // ── Cart ──
    // Delegated from the document so cards rendered from the catalog later
    // are covered too.
    {
        let store = store.clone();
        let els2 = els.clone();
        listen(&dom::document(), "click", move |event| {
            let Some(button) = dom::closest_from_event(&event, ADD_TO_CART_BUTTONS) else {
                return;
            };
            event.prevent_default();
            let Some(item) = scrape_card(&button) else {
                return;
            };
            let effects = handlers::add_to_cart(&store, item);
            apply(&effects, &mut DomSurface::with_trigger(&els2, button));
        });
    }
    if let Some(container) = &els.cart_items {
        let store = store.clone();
        let els2 = els.clone();
        listen(container, "click", move |event| {
            let Some(button) = dom::closest_from_event(&event, REMOVE_BUTTON) else {
                return;
            };
            let raw = button.get_attribute("data-index").unwrap_or_default();
            let effects = handlers::remove_from_cart(&store, &raw);
            apply(&effects, &mut DomSurface::new(&els2));
        });
    }

    // ── Checkout / Contact ──
    if let Some(form) = &els.checkout_form {
        let store = store.clone();
        on_event!(form, "submit", els, move || handlers::confirm_checkout(&store));
    }
    if let Some(form) = &els.contact_form {
        on_event!(form, "submit", els, handlers::confirm_contact);
    }
}

/// Read name and price off the product card holding `button`.
/// Buttons outside a card are ignored.
fn scrape_card(button: &Element) -> Option<CartItem> {
    let card = button.closest(".product-card").ok().flatten()?;
    let title = dom::text_within(&card, ".card-title");
    let price = dom::text_within(&card, ".card-text");
    Some(CartItem::from_card(title.as_deref(), price.as_deref()))
}
