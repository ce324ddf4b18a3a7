//! The DOM as a [`Surface`] for handler effects.

use gloo_timers::callback::Timeout;
use sf_api_types::{Page, Theme};
use sf_shop_core::{CartView, Form, Surface, messages, render};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom::{self, Elements};
use crate::theme;

const WELCOME_VISIBLE_MS: u32 = 5_000;
const WELCOME_FADE_MS: u32 = 1_000;
const ADDED_FEEDBACK_MS: u32 = 800;

pub struct DomSurface<'a> {
    els: &'a Elements,
    /// Element that fired the event, for feedback on the button itself.
    trigger: Option<Element>,
}

impl<'a> DomSurface<'a> {
    pub fn new(els: &'a Elements) -> Self {
        Self { els, trigger: None }
    }

    pub fn with_trigger(els: &'a Elements, trigger: Element) -> Self {
        Self {
            els,
            trigger: Some(trigger),
        }
    }

    fn form(&self, form: Form) -> Option<&web_sys::HtmlFormElement> {
        match form {
            Form::Login => self.els.login_form.as_ref(),
            Form::Contact => self.els.contact_form.as_ref(),
        }
    }
}

impl Surface for DomSurface<'_> {
    fn navigate(&mut self, page: &Page) {
        let _ = dom::window().location().set_href(page.file_name());
    }

    fn reload(&mut self) {
        let _ = dom::window().location().reload();
    }

    fn alert(&mut self, message: &str) {
        let _ = dom::window().alert_with_message(message);
    }

    fn show_inline_message(&mut self, message: &str) -> bool {
        match &self.els.login_message {
            Some(slot) => {
                dom::set_text(slot, message);
                true
            }
            None => false,
        }
    }

    fn mark_invalid(&mut self, form: Form) {
        if let Some(form) = self.form(form) {
            dom::add_class(form, "was-validated");
        }
    }

    fn reset_form(&mut self, form: Form) {
        if let Some(form) = self.form(form) {
            form.reset();
        }
    }

    fn set_cart_count(&mut self, count: usize) {
        if let Some(badge) = &self.els.cart_count {
            dom::set_text(badge, &count.to_string());
        }
    }

    fn render_cart(&mut self, view: &CartView) {
        if let Some(container) = &self.els.cart_items {
            dom::set_inner_html(container, &render::cart_html(view));
        }
    }

    fn apply_theme(&mut self, theme: Theme) {
        theme::apply(self.els, theme);
    }

    fn set_auth_link(&mut self, logged_in: bool) {
        let Some(link) = &self.els.login_link else {
            return;
        };
        if logged_in {
            dom::set_text(link, "Logout");
            let _ = link.set_attribute("href", "#");
            dom::remove_class(link, "nav-link");
            for cls in ["btn", "btn-outline-danger", "ms-3"] {
                dom::add_class(link, cls);
            }
        } else {
            dom::set_text(link, "Login");
            let _ = link.set_attribute("href", Page::Login.file_name());
            for cls in ["btn", "btn-outline-danger", "ms-3"] {
                dom::remove_class(link, cls);
            }
            dom::add_class(link, "nav-link");
        }
    }

    fn show_welcome(&mut self, username: &str) {
        let Ok(banner) = dom::create_element("div") else {
            return;
        };
        let _ = banner.set_attribute("class", "alert alert-info text-center fade-in");
        dom::set_inner_html(&banner, &render::welcome_html(username));
        let html: &HtmlElement = banner.unchecked_ref();
        let _ = html.style().set_property("margin-top", "20px");
        if self.els.main.prepend_with_node_1(&banner).is_err() {
            return;
        }

        Timeout::new(WELCOME_VISIBLE_MS, move || {
            let html: &HtmlElement = banner.unchecked_ref();
            let style = html.style();
            let _ = style.set_property("transition", "opacity 1s ease");
            let _ = style.set_property("opacity", "0");
            Timeout::new(WELCOME_FADE_MS, move || banner.remove()).forget();
        })
        .forget();
    }

    fn flash_added(&mut self) {
        let Some(button) = self.trigger.clone() else {
            return;
        };
        if let Some(html) = button.dyn_ref::<HtmlElement>() {
            let _ = html.blur();
        }
        let previous = button.text_content().unwrap_or_default();
        dom::set_text(&button, messages::ADDED);
        Timeout::new(ADDED_FEEDBACK_MS, move || dom::set_text(&button, &previous)).forget();
    }
}
