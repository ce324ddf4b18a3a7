//! Host settings.
//!
//! `STOREFRONT_SITE_DIR` (default `./site`) is served as the document root and
//! is expected to hold:
//!
//! ```text
//! site/
//!   index.html login.html about.html contact.html cart.html checkout.html
//!   pkg/                 wasm-bindgen output of `storefront-wasm`
//!   data/products.json   catalog, a JSON array of products
//! ```
//!
//! The directory is not part of the workspace; point the variable at the
//! built site.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub(crate) const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub(crate) const DEFAULT_SITE_DIR: &str = "./site";

/// Runtime settings, read from `STOREFRONT_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StorefrontConfig {
    pub(crate) addr: SocketAddr,
    pub(crate) site_dir: PathBuf,
}

impl StorefrontConfig {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_addr = get("STOREFRONT_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = raw_addr
            .trim()
            .parse()
            .with_context(|| format!("STOREFRONT_ADDR is not a socket address: {raw_addr}"))?;

        let site_dir = get("STOREFRONT_SITE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_DIR));

        Ok(Self { addr, site_dir })
    }
}
