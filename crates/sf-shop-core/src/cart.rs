//! Cart engine over the `cart` store entry.
//!
//! The cart is reloaded from the store for every operation and written back
//! right after each change, so separate page loads always agree on it.

use sf_api_types::CartItem;
use sf_storage::{KeyValueStore, StoreError, keys, load_json, save_json};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum CartError {
    #[error("malformed cart position `{0}`")]
    MalformedPosition(String),
    #[error("cart position {position} is out of range for {len} items")]
    OutOfRange { position: usize, len: usize },
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// A missing entry is an empty cart.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self, StoreError> {
        let items = load_json::<Vec<CartItem>, S>(store, keys::CART)?.unwrap_or_default();
        Ok(Self { items })
    }

    /// Like [`Cart::load`], but an unreadable or corrupt entry is logged and
    /// treated as empty.
    pub fn load_or_empty<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self::load(store).unwrap_or_else(|err| {
            warn!(error = %err, "could not read cart, showing it empty");
            Self::default()
        })
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<(), StoreError> {
        save_json(store, keys::CART, &self.items)
    }

    /// Empty the persisted cart.
    pub fn clear<S: KeyValueStore + ?Sized>(store: &S) -> Result<(), StoreError> {
        Self::default().save(store)?;
        debug!("cart cleared");
        Ok(())
    }

    /// Append; duplicates are kept as separate lines.
    pub fn add(&mut self, item: CartItem) {
        self.items.push(item);
    }

    pub fn remove(&mut self, position: usize) -> Result<CartItem, CartError> {
        if position >= self.items.len() {
            return Err(CartError::OutOfRange {
                position,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(position))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn view(&self) -> CartView {
        if self.items.is_empty() {
            return CartView::Empty;
        }
        let rows = self
            .items
            .iter()
            .enumerate()
            .map(|(position, item)| CartRow {
                position,
                name: item.name.clone(),
                price: item.price.clone(),
            })
            .collect();
        CartView::Rows(rows)
    }
}

/// Parse the `data-index` of a remove button: plain decimal digits only.
pub fn parse_position(raw: &str) -> Result<usize, CartError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CartError::MalformedPosition(raw.to_owned()));
    }
    raw.parse()
        .map_err(|_| CartError::MalformedPosition(raw.to_owned()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartView {
    Empty,
    Rows(Vec<CartRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub position: usize,
    pub name: String,
    pub price: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_storage::InMemoryStore;

    fn mug() -> CartItem {
        CartItem::new("Mug", "$9.00")
    }

    fn tee() -> CartItem {
        CartItem::new("Tee", "$20.00")
    }

    fn cap() -> CartItem {
        CartItem::new("Cap", "$12.00")
    }

    #[test]
    fn missing_entry_is_empty() -> Result<(), StoreError> {
        let cart = Cart::load(&InMemoryStore::new())?;
        assert!(cart.is_empty());
        assert_eq!(cart.view(), CartView::Empty);
        Ok(())
    }

    #[test]
    fn corrupt_entry_degrades_to_empty() {
        let store = InMemoryStore::with_entries([(keys::CART, "{oops")]);
        assert!(Cart::load(&store).is_err());
        assert!(Cart::load_or_empty(&store).is_empty());
    }

    #[test]
    fn added_item_renders_last() -> Result<(), StoreError> {
        let store = InMemoryStore::new();
        let mut cart = Cart::new(vec![mug(), tee()]);
        cart.save(&store)?;

        let mut cart = Cart::load(&store)?;
        cart.add(cap());
        cart.save(&store)?;

        let CartView::Rows(rows) = Cart::load(&store)?.view() else {
            panic!("cart should not be empty");
        };
        let last = rows.last().expect("at least one row");
        assert_eq!((last.position, last.name.as_str()), (2, "Cap"));
        Ok(())
    }

    #[test]
    fn duplicates_are_separate_lines() {
        let mut cart = Cart::default();
        cart.add(mug());
        cart.add(mug());
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn remove_keeps_relative_order() -> Result<(), CartError> {
        let mut cart = Cart::new(vec![mug(), tee(), cap(), mug()]);
        let removed = cart.remove(1)?;
        assert_eq!(removed, tee());
        assert_eq!(cart.items(), &[mug(), cap(), mug()]);
        Ok(())
    }

    #[test]
    fn remove_out_of_range_changes_nothing() {
        let mut cart = Cart::new(vec![mug()]);
        let err = cart.remove(3).unwrap_err();
        assert!(matches!(err, CartError::OutOfRange { position: 3, len: 1 }));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn reload_round_trip_is_identical() -> Result<(), StoreError> {
        let store = InMemoryStore::new();
        let cart = Cart::new(vec![tee(), mug(), tee()]);
        cart.save(&store)?;

        let first = Cart::load(&store)?;
        let second = Cart::load(&store)?;
        assert_eq!(first, cart);
        assert_eq!(second, cart);
        Ok(())
    }

    #[test]
    fn clear_persists_an_empty_cart() -> Result<(), StoreError> {
        let store = InMemoryStore::new();
        Cart::new(vec![mug(), tee()]).save(&store)?;
        Cart::clear(&store)?;

        assert_eq!(store.get(keys::CART)?.as_deref(), Some("[]"));
        assert!(Cart::load(&store)?.is_empty());
        Ok(())
    }

    #[test]
    fn positions_must_be_plain_digits() {
        assert_eq!(parse_position("0").ok(), Some(0));
        assert_eq!(parse_position("12").ok(), Some(12));
        for raw in ["", "-1", "1.5", "2abc", " 1", "x"] {
            assert!(
                matches!(parse_position(raw), Err(CartError::MalformedPosition(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
