//! Light/dark theme on the page body.
//!
//! Dark mode is the `dark-mode` class on `<body>`; the toggle button's label
//! always names the theme a click switches to.

use crate::dom::{self, Elements};
use sf_api_types::Theme;

const DARK_CLASS: &str = "dark-mode";

pub fn apply(els: &Elements, theme: Theme) {
    dom::toggle_class(&els.body, DARK_CLASS, theme.is_dark());
    if let Some(toggle) = &els.theme_toggle {
        dom::set_text(toggle, theme.toggle_label());
    }
}

/// Theme currently shown on the page.
pub fn current(els: &Elements) -> Theme {
    if dom::has_class(&els.body, DARK_CLASS) {
        Theme::Dark
    } else {
        Theme::Light
    }
}
