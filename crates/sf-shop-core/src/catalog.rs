use sf_api_types::Product;

/// Read-only catalog resource, relative to the page.
pub const CATALOG_URL: &str = "data/products.json";

/// Container that opts into catalog rendering.
pub const CATALOG_CONTAINER: &str = ".row.g-4[data-source='json']";

pub fn parse_catalog(body: &str) -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str(body)
}
