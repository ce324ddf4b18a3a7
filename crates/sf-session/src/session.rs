use sf_storage::{KeyValueStore, Result, keys};
use tracing::{debug, warn};

const FLAG_SET: &str = "true";

/// Persisted login record.
///
/// `username` is only ever written together with the flag, and both are
/// removed together on logout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub username: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            logged_in: true,
            username: Some(username.into()),
        }
    }

    /// Read the session from the store. A username stored without the flag
    /// is ignored; a flag without a username still counts as logged in.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        let logged_in = store.get(keys::LOGGED_IN)?.as_deref() == Some(FLAG_SET);
        if !logged_in {
            return Ok(Self::anonymous());
        }
        let username = store.get(keys::USERNAME)?.filter(|name| !name.is_empty());
        Ok(Self {
            logged_in,
            username,
        })
    }

    /// Username first, flag last: the flag never lands without its username.
    pub fn begin<S: KeyValueStore + ?Sized>(store: &S, username: &str) -> Result<Self> {
        store.set(keys::USERNAME, username)?;
        if let Err(err) = store.set(keys::LOGGED_IN, FLAG_SET) {
            if let Err(cleanup) = store.remove(keys::USERNAME) {
                warn!(error = %cleanup, "could not remove username after failed login");
            }
            return Err(err);
        }
        debug!(username, "session started");
        Ok(Self::authenticated(username))
    }

    /// Remove both session entries. The cart is left alone.
    pub fn end<S: KeyValueStore + ?Sized>(store: &S) -> Result<()> {
        store.remove(keys::LOGGED_IN)?;
        store.remove(keys::USERNAME)?;
        debug!("session cleared");
        Ok(())
    }
}

/// Flag check used by the gate. Unreadable storage counts as logged out.
pub fn is_logged_in<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    match store.get(keys::LOGGED_IN) {
        Ok(value) => value.as_deref() == Some(FLAG_SET),
        Err(err) => {
            warn!(error = %err, "could not read session flag");
            false
        }
    }
}
