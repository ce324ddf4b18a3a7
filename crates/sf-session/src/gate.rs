//! Page gate: runs first on every load and may send the visitor elsewhere.

use sf_api_types::Page;
use sf_storage::KeyValueStore;
use tracing::debug;

use crate::session::is_logged_in;

/// Pages refused to a visitor without the session flag. Anything not listed
/// here (and not the login page) is reachable either way.
pub const PROTECTED_PAGES: [Page; 5] = [
    Page::Home,
    Page::About,
    Page::Contact,
    Page::Cart,
    Page::Checkout,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    /// Leave for `Page`; nothing else on the current page should run.
    Redirect(Page),
}

impl GateDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, GateDecision::Redirect(_))
    }
}

pub fn is_protected(page: &Page) -> bool {
    PROTECTED_PAGES.contains(page)
}

pub fn decide(page: &Page, logged_in: bool) -> GateDecision {
    match (logged_in, page) {
        (false, page) if is_protected(page) => GateDecision::Redirect(Page::Login),
        (true, Page::Login) => GateDecision::Redirect(Page::Home),
        _ => GateDecision::Allow,
    }
}

pub fn evaluate<S: KeyValueStore + ?Sized>(store: &S, page: &Page) -> GateDecision {
    let decision = decide(page, is_logged_in(store));
    if let GateDecision::Redirect(target) = &decision {
        debug!(from = %page, to = %target, "gate redirect");
    }
    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_storage::{InMemoryStore, keys};

    fn other(name: &str) -> Page {
        Page::Other(name.to_owned())
    }

    #[test]
    fn decision_table() {
        let cases = [
            (Page::Home, false, GateDecision::Redirect(Page::Login)),
            (Page::About, false, GateDecision::Redirect(Page::Login)),
            (Page::Contact, false, GateDecision::Redirect(Page::Login)),
            (Page::Cart, false, GateDecision::Redirect(Page::Login)),
            (Page::Checkout, false, GateDecision::Redirect(Page::Login)),
            (Page::Login, false, GateDecision::Allow),
            (other("faq.html"), false, GateDecision::Allow),
            (Page::Home, true, GateDecision::Allow),
            (Page::Cart, true, GateDecision::Allow),
            (Page::Checkout, true, GateDecision::Allow),
            (Page::Login, true, GateDecision::Redirect(Page::Home)),
            (other("faq.html"), true, GateDecision::Allow),
        ];
        for (page, logged_in, expected) in cases {
            assert_eq!(decide(&page, logged_in), expected, "{page} / {logged_in}");
        }
    }

    #[test]
    fn evaluate_reads_the_flag() {
        let anonymous = InMemoryStore::new();
        assert_eq!(
            evaluate(&anonymous, &Page::Cart),
            GateDecision::Redirect(Page::Login)
        );

        let signed_in = InMemoryStore::with_entries([(keys::LOGGED_IN, "true")]);
        assert_eq!(evaluate(&signed_in, &Page::Cart), GateDecision::Allow);
        assert!(evaluate(&signed_in, &Page::Login).is_redirect());
    }

    #[test]
    fn unlisted_pages_never_redirect() {
        assert!(!is_protected(&other("privacy.html")));
        assert!(!is_protected(&Page::Login));
    }
}
