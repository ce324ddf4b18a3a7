//! Catalog fetch.
//!
//! The only network access: a read-only GET of the static product list.
//! Failures go to the console and the container is left as it was.

use gloo_net::http::Request;
use sf_api_types::Product;
use sf_shop_core::catalog::{CATALOG_URL, parse_catalog};
use sf_shop_core::render;

use crate::dom::{self, Elements};

/// Fetch `data/products.json` relative to the page.
pub async fn fetch_catalog() -> Result<Vec<Product>, String> {
    let resp = Request::get(CATALOG_URL)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("{} {}", resp.status(), resp.status_text()));
    }

    let text = resp.text().await.map_err(|e| format!("text error: {e}"))?;
    parse_catalog(&text).map_err(|e| format!("JSON parse error: {e}"))
}

/// Render the catalog into the opt-in container, if the page has one.
pub async fn load_catalog(els: &Elements) {
    let Some(container) = &els.catalog else {
        return;
    };
    match fetch_catalog().await {
        Ok(products) => dom::set_inner_html(container, &render::product_cards_html(&products)),
        Err(e) => gloo_console::error!("Failed to fetch products.json", e),
    }
}
