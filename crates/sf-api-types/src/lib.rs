use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog entry as served from `data/products.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub image: String,
}

/// A cart line. The price stays a display string; nothing sums it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub name: String,
    pub price: String,
}

impl CartItem {
    pub const DEFAULT_NAME: &'static str = "Product";
    pub const DEFAULT_PRICE: &'static str = "$0.00";

    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }

    /// Build a line from the text scraped off a product card.
    /// Missing title or price text falls back to the placeholders.
    pub fn from_card(title: Option<&str>, price: Option<&str>) -> Self {
        let name = title.map(str::trim).unwrap_or(Self::DEFAULT_NAME);
        let price = price.map(str::trim).unwrap_or(Self::DEFAULT_PRICE);
        Self::new(name, price)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only `"dark"` selects the dark theme; anything else is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle button: it names the theme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark",
            Theme::Dark => "☀️ Light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of the page being loaded, taken from the last path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Home,
    About,
    Contact,
    Cart,
    Checkout,
    Other(String),
}

impl Page {
    /// Resolve a location pathname such as `/shop/cart.html`.
    /// A trailing slash (directory index) resolves to [`Page::Home`].
    pub fn from_path(path: &str) -> Self {
        let segment = path.rsplit('/').next().unwrap_or_default();
        Self::from_file_name(segment)
    }

    pub fn from_file_name(name: &str) -> Self {
        match name {
            "login.html" => Page::Login,
            "" | "index.html" => Page::Home,
            "about.html" => Page::About,
            "contact.html" => Page::Contact,
            "cart.html" => Page::Cart,
            "checkout.html" => Page::Checkout,
            other => Page::Other(other.to_owned()),
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            Page::Login => "login.html",
            Page::Home => "index.html",
            Page::About => "about.html",
            Page::Contact => "contact.html",
            Page::Cart => "cart.html",
            Page::Checkout => "checkout.html",
            Page::Other(name) => name,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_identity_uses_final_segment() {
        assert_eq!(Page::from_path("/shop/cart.html"), Page::Cart);
        assert_eq!(Page::from_path("login.html"), Page::Login);
        assert_eq!(Page::from_path("/deep/nested/checkout.html"), Page::Checkout);
        assert_eq!(
            Page::from_path("/shop/faq.html"),
            Page::Other("faq.html".to_owned())
        );
    }

    #[test]
    fn directory_index_is_home() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/shop/"), Page::Home);
        assert_eq!(Page::Home.file_name(), "index.html");
    }

    #[test]
    fn theme_parsing_defaults_to_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "☀️ Light");
        assert_eq!(Theme::Light.toggle_label(), "🌙 Dark");
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn card_scrape_falls_back_to_placeholders() {
        let item = CartItem::from_card(None, Some("  $4.50 "));
        assert_eq!(item, CartItem::new("Product", "$4.50"));

        let item = CartItem::from_card(Some(" Mug "), None);
        assert_eq!(item, CartItem::new("Mug", "$0.00"));
    }

    #[test]
    fn product_image_is_optional() {
        let product: Product =
            serde_json::from_str(r#"{"name":"Mug","price":"$9.00"}"#).expect("valid product");
        assert_eq!(product.image, "");
    }
}
