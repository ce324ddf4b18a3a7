//! UI effects and the surface they are applied to.

use sf_api_types::{Page, Theme};

use crate::cart::CartView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Login,
    Contact,
}

/// What a handler wants the page to do. Produced by [`crate::handlers`],
/// consumed by [`apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigate(Page),
    Reload,
    Alert(String),
    /// Inline when the page has a message slot, otherwise an alert.
    LoginFailed(String),
    MarkInvalid(Form),
    ResetForm(Form),
    CartCount(usize),
    CartContents(CartView),
    Theme(Theme),
    AuthLink { logged_in: bool },
    Welcome { username: String },
    AddedFeedback,
}

/// The page as seen by [`apply`]. Implementations no-op for any element the
/// current page does not have.
pub trait Surface {
    fn navigate(&mut self, page: &Page);
    fn reload(&mut self);
    fn alert(&mut self, message: &str);
    /// Returns `false` when there is no inline message slot.
    fn show_inline_message(&mut self, message: &str) -> bool;
    fn mark_invalid(&mut self, form: Form);
    fn reset_form(&mut self, form: Form);
    fn set_cart_count(&mut self, count: usize);
    fn render_cart(&mut self, view: &CartView);
    fn apply_theme(&mut self, theme: Theme);
    fn set_auth_link(&mut self, logged_in: bool);
    fn show_welcome(&mut self, username: &str);
    fn flash_added(&mut self);
}

/// Apply effects in order. Navigation and reload end the page, so anything
/// after them is dropped.
pub fn apply<S: Surface + ?Sized>(effects: &[Effect], surface: &mut S) {
    for effect in effects {
        match effect {
            Effect::Navigate(page) => {
                surface.navigate(page);
                return;
            }
            Effect::Reload => {
                surface.reload();
                return;
            }
            Effect::Alert(message) => surface.alert(message),
            Effect::LoginFailed(message) => {
                if !surface.show_inline_message(message) {
                    surface.alert(message);
                }
            }
            Effect::MarkInvalid(form) => surface.mark_invalid(*form),
            Effect::ResetForm(form) => surface.reset_form(*form),
            Effect::CartCount(count) => surface.set_cart_count(*count),
            Effect::CartContents(view) => surface.render_cart(view),
            Effect::Theme(theme) => surface.apply_theme(*theme),
            Effect::AuthLink { logged_in } => surface.set_auth_link(*logged_in),
            Effect::Welcome { username } => surface.show_welcome(username),
            Effect::AddedFeedback => surface.flash_added(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records every call as a short string.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub inline_slot: bool,
        pub calls: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn navigate(&mut self, page: &Page) {
            self.calls.push(format!("navigate {page}"));
        }
        fn reload(&mut self) {
            self.calls.push("reload".into());
        }
        fn alert(&mut self, message: &str) {
            self.calls.push(format!("alert {message}"));
        }
        fn show_inline_message(&mut self, message: &str) -> bool {
            if self.inline_slot {
                self.calls.push(format!("inline {message}"));
            }
            self.inline_slot
        }
        fn mark_invalid(&mut self, form: Form) {
            self.calls.push(format!("invalid {form:?}"));
        }
        fn reset_form(&mut self, form: Form) {
            self.calls.push(format!("reset {form:?}"));
        }
        fn set_cart_count(&mut self, count: usize) {
            self.calls.push(format!("count {count}"));
        }
        fn render_cart(&mut self, view: &CartView) {
            let rows = match view {
                CartView::Empty => 0,
                CartView::Rows(rows) => rows.len(),
            };
            self.calls.push(format!("cart {rows}"));
        }
        fn apply_theme(&mut self, theme: Theme) {
            self.calls.push(format!("theme {theme}"));
        }
        fn set_auth_link(&mut self, logged_in: bool) {
            self.calls.push(format!("auth {logged_in}"));
        }
        fn show_welcome(&mut self, username: &str) {
            self.calls.push(format!("welcome {username}"));
        }
        fn flash_added(&mut self) {
            self.calls.push("added".into());
        }
    }

    #[test]
    fn login_failure_prefers_inline_slot() {
        let effects = [Effect::LoginFailed("nope".into())];

        let mut with_slot = RecordingSurface {
            inline_slot: true,
            ..Default::default()
        };
        apply(&effects, &mut with_slot);
        assert_eq!(with_slot.calls, ["inline nope"]);

        let mut without_slot = RecordingSurface::default();
        apply(&effects, &mut without_slot);
        assert_eq!(without_slot.calls, ["alert nope"]);
    }

    #[test]
    fn navigation_stops_the_sequence() {
        let effects = [
            Effect::Alert("bye".into()),
            Effect::Navigate(Page::Login),
            Effect::CartCount(3),
        ];
        let mut surface = RecordingSurface::default();
        apply(&effects, &mut surface);
        assert_eq!(surface.calls, ["alert bye", "navigate login.html"]);
    }

    #[test]
    fn reload_stops_the_sequence() {
        let mut surface = RecordingSurface::default();
        apply(&[Effect::Reload, Effect::AddedFeedback], &mut surface);
        assert_eq!(surface.calls, ["reload"]);
    }
}
