//! Event handlers as plain functions over the store.
//!
//! Each handler reads what it needs from the store, writes its change back
//! immediately and returns the effects for the page. Storage failures are
//! logged and the handler degrades to doing nothing.

use sf_api_types::{CartItem, Page, Theme};
use sf_session::{Credentials, GateDecision, LoginAttempt, LoginOutcome, Session};
use sf_storage::{KeyValueStore, keys};
use tracing::{debug, warn};

use crate::cart::{Cart, parse_position};
use crate::effect::{Effect, Form};
use crate::messages;

/// Outcome of the load-time pass: the gate verdict and the initial render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLoad {
    pub gate: GateDecision,
    pub effects: Vec<Effect>,
}

impl PageLoad {
    /// When `false`, the page is being left and no listeners should be bound.
    pub fn proceed(&self) -> bool {
        !self.gate.is_redirect()
    }
}

pub fn page_load<S: KeyValueStore + ?Sized>(store: &S, page: &Page) -> PageLoad {
    let gate = sf_session::evaluate(store, page);
    if let GateDecision::Redirect(target) = &gate {
        return PageLoad {
            effects: vec![Effect::Navigate(target.clone())],
            gate,
        };
    }

    let session = Session::load(store).unwrap_or_else(|err| {
        warn!(error = %err, "could not read session");
        Session::anonymous()
    });
    let cart = Cart::load_or_empty(store);

    let mut effects = vec![
        Effect::Theme(load_theme(store)),
        Effect::AuthLink {
            logged_in: session.logged_in,
        },
        Effect::CartCount(cart.len()),
        Effect::CartContents(cart.view()),
    ];
    if *page == Page::Home && session.logged_in {
        if let Some(username) = session.username {
            effects.push(Effect::Welcome { username });
        }
    }
    PageLoad { gate, effects }
}

/// Saved theme, or light when the entry is missing or unreadable.
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    match store.get(keys::THEME) {
        Ok(value) => Theme::from_stored(value.as_deref()),
        Err(err) => {
            warn!(error = %err, "could not read theme, using light");
            Theme::Light
        }
    }
}

/// Flip the theme shown on the page and remember the choice. The page keeps
/// flipping even when the choice can't be saved.
pub fn toggle_theme<S: KeyValueStore + ?Sized>(store: &S, current: Theme) -> Vec<Effect> {
    let theme = current.toggled();
    if let Err(err) = store.set(keys::THEME, theme.as_str()) {
        warn!(error = %err, "could not save theme");
    }
    vec![Effect::Theme(theme)]
}

pub fn submit_login<S: KeyValueStore + ?Sized>(
    store: &S,
    attempt: &LoginAttempt,
    credentials: &Credentials,
) -> Vec<Effect> {
    match credentials.check(attempt) {
        LoginOutcome::Incomplete => vec![Effect::MarkInvalid(Form::Login)],
        LoginOutcome::Rejected => {
            debug!(username = %attempt.username, "login rejected");
            vec![Effect::LoginFailed(messages::INVALID_LOGIN.to_owned())]
        }
        LoginOutcome::Accepted { username } => match Session::begin(store, &username) {
            Ok(_) => vec![
                Effect::AuthLink { logged_in: true },
                Effect::Navigate(Page::Home),
            ],
            Err(err) => {
                warn!(error = %err, "could not save session");
                Vec::new()
            }
        },
    }
}

/// Whether logout confirms with an alert before leaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutPrompt {
    Silent,
    Confirm,
}

pub fn logout<S: KeyValueStore + ?Sized>(store: &S, prompt: LogoutPrompt) -> Vec<Effect> {
    if let Err(err) = Session::end(store) {
        warn!(error = %err, "could not clear session");
    }
    let mut effects = Vec::with_capacity(2);
    if prompt == LogoutPrompt::Confirm {
        effects.push(Effect::Alert(messages::LOGGED_OUT.to_owned()));
    }
    effects.push(Effect::Navigate(Page::Login));
    effects
}

pub fn add_to_cart<S: KeyValueStore + ?Sized>(store: &S, item: CartItem) -> Vec<Effect> {
    let mut cart = Cart::load_or_empty(store);
    debug!(name = %item.name, "adding to cart");
    cart.add(item);
    match cart.save(store) {
        Ok(()) => vec![Effect::CartCount(cart.len()), Effect::AddedFeedback],
        Err(err) => {
            warn!(error = %err, "could not save cart");
            Vec::new()
        }
    }
}

/// Remove the line at the position carried by a remove button, then reload.
pub fn remove_from_cart<S: KeyValueStore + ?Sized>(store: &S, raw_position: &str) -> Vec<Effect> {
    let removed = parse_position(raw_position).and_then(|position| {
        let mut cart = Cart::load(store)?;
        let item = cart.remove(position)?;
        cart.save(store)?;
        Ok(item)
    });
    match removed {
        Ok(item) => {
            debug!(name = %item.name, "removed from cart");
            vec![Effect::Reload]
        }
        Err(err) => {
            warn!(error = %err, "cart removal ignored");
            Vec::new()
        }
    }
}

pub fn confirm_checkout<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Effect> {
    if let Err(err) = Cart::clear(store) {
        warn!(error = %err, "could not clear cart after checkout");
    }
    vec![
        Effect::Alert(messages::ORDER_PLACED.to_owned()),
        Effect::Navigate(Page::Home),
    ]
}

pub fn confirm_contact() -> Vec<Effect> {
    vec![
        Effect::Alert(messages::MESSAGE_SENT.to_owned()),
        Effect::ResetForm(Form::Contact),
    ]
}
