//! DOM element bindings.
//!
//! Every page carries a different subset of the storefront's elements, so
//! each binding is optional and handlers skip what the page lacks.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nl) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Trimmed text of the first match under `parent`.
pub fn text_within(parent: &Element, selector: &str) -> Option<String> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .map(|text| text.trim().to_string())
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

/// Whether the document is still parsing, read as the plain `readyState`
/// string.
pub fn is_loading(document: &Document) -> bool {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "loading")
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document().create_element(tag)
}

/// Nearest ancestor (or self) of the event target matching `selector`.
pub fn closest_from_event(event: &web_sys::Event, selector: &str) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(selector).ok().flatten()
}

// ── Elements struct ──

/// Storefront elements present on the current page.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub body: HtmlElement,
    /// `<main>` when present, otherwise the body; the welcome banner goes here.
    pub main: Element,

    // Login
    pub login_form: Option<HtmlFormElement>,
    pub username: Option<HtmlInputElement>,
    pub password: Option<HtmlInputElement>,
    pub login_message: Option<Element>,

    // Navbar
    pub logout_btn: Option<Element>,
    pub logout: Option<Element>,
    pub login_link: Option<Element>,
    pub theme_toggle: Option<Element>,
    pub cart_count: Option<Element>,

    // Cart / catalog
    pub cart_items: Option<Element>,
    pub catalog: Option<Element>,

    // Forms
    pub checkout_form: Option<HtmlFormElement>,
    pub contact_form: Option<HtmlFormElement>,
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Elements {
        let body = gloo_utils::body();
        let main = query("main").unwrap_or_else(|| body.clone().into());
        Elements {
            body,
            main,

            login_form: by_id_typed("loginForm"),
            username: by_id_typed("username"),
            password: by_id_typed("password"),
            login_message: by_id("message").or_else(|| by_id("loginMessage")),

            logout_btn: by_id("logoutBtn"),
            logout: by_id("logout"),
            login_link: by_id("loginLink"),
            theme_toggle: by_id("theme-toggle"),
            cart_count: by_id("cart-count"),

            cart_items: by_id("cartItems"),
            catalog: query(sf_shop_core::catalog::CATALOG_CONTAINER),

            checkout_form: by_id_typed("checkoutForm"),
            contact_form: by_id_typed("contactForm"),
        }
    }
}
