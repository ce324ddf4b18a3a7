//! Storefront behaviour independent of the browser.
//!
//! Every user interaction is a function of its input and the store that
//! returns a list of [`Effect`]s; the browser crate only applies them.

pub mod cart;
pub mod catalog;
pub mod effect;
pub mod handlers;
pub mod messages;
pub mod render;
pub mod reveal;

pub use cart::{Cart, CartError, CartRow, CartView};
pub use effect::{Effect, Form, Surface, apply};
pub use handlers::{LogoutPrompt, PageLoad};
pub use reveal::RevealTracker;
