//! Demo session handling: the persisted login record, the page gate and
//! the fixed-credential check. None of this is a security boundary; the
//! flag lives in the browser store and anyone can set it.

pub mod credentials;
pub mod gate;
mod session;

pub use credentials::{Credentials, DEMO_CREDENTIALS, LoginAttempt, LoginOutcome};
pub use gate::{GateDecision, PROTECTED_PAGES, decide, evaluate};
pub use session::{Session, is_logged_in};
