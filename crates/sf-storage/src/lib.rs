use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::BTreeMap;
use thiserror::Error;

/// Keys under which the storefront keeps its state.
pub mod keys {
    pub const LOGGED_IN: &str = "loggedIn";
    pub const USERNAME: &str = "username";
    pub const THEME: &str = "theme";
    pub const CART: &str = "cart";
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode value under `{key}`: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Synchronous string key-value storage, shaped after browser `localStorage`.
///
/// Methods take `&self`: the browser store is a handle to shared state, and
/// every handler on a page holds the same one.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Read a JSON-encoded value. A missing key is `Ok(None)`.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                key: key.to_owned(),
                source,
            }),
        None => Ok(None),
    }
}

pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(StoreError::Encode)?;
    store.set(key, &raw)
}

/// Process-local store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RefCell::new(entries),
        }
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.borrow().clone()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// A store whose backend is gone: every call fails with `Unavailable`.
/// Stands in for a browser profile with storage disabled.
#[derive(Debug, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(StoreError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(StoreError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(StoreError::Unavailable)
    }
}
