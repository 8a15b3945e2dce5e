//! Read-side cart view.
//!
//! Builds display data from the persisted cart. Pure function of the
//! store: rendering twice against an unchanged store yields identical
//! output, and an absent cart yields `None` so the caller can leave its
//! prior view untouched instead of flashing a false empty state.

use crate::cart::mutate::CartSummary;
use crate::cart::state::CartState;
use crate::store::{CartStore, keys};
use crate::types::Price;

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    /// Product name.
    pub name: String,
    /// Accumulated quantity.
    pub quantity: u32,
    /// Unit price.
    pub price: Price,
    /// Unit price times quantity.
    pub line_total: Price,
}

/// Cart display data: one row per line item plus the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Rows in first-add order.
    pub rows: Vec<CartRow>,
    /// Item count and running total.
    pub summary: CartSummary,
}

impl CartView {
    /// An empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self::from(&CartState::default())
    }

    /// Read the cart view from a store.
    ///
    /// Returns `None` when no cart has been stored (the line-items key is
    /// absent), so a caller re-rendering on load does not replace an
    /// existing view with a spurious empty one. A present but unparsable
    /// cart degrades to the empty view.
    pub fn read<S: CartStore + ?Sized>(store: &S) -> Option<Self> {
        store.get(keys::LINE_ITEMS)?;
        Some(Self::from(&CartState::load(store)))
    }

    /// Whether the view has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<&CartState> for CartView {
    fn from(state: &CartState) -> Self {
        Self {
            rows: state
                .line_items()
                .iter()
                .map(|line| CartRow {
                    name: line.name.clone(),
                    quantity: line.quantity,
                    price: line.price,
                    line_total: line.line_total(),
                })
                .collect(),
            summary: CartSummary::of(state),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::cart::mutate::add_to_cart;
    use crate::store::MemoryStore;
    use crate::types::CurrencyCode;

    fn product(name: &str, price: &str) -> Product {
        Product {
            name: name.to_string(),
            price: Price::new(price.parse().unwrap(), CurrencyCode::ZAR),
        }
    }

    #[test]
    fn test_read_of_empty_store_is_none() {
        let store = MemoryStore::new();
        assert!(CartView::read(&store).is_none());
    }

    #[test]
    fn test_read_of_corrupt_cart_degrades_to_empty_view() {
        let mut store = MemoryStore::new();
        store
            .set(keys::LINE_ITEMS, "][ not json".to_string())
            .unwrap();

        let view = CartView::read(&store).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.summary.item_count, 0);
    }

    #[test]
    fn test_rows_keep_first_add_order() {
        let mut store = MemoryStore::new();
        add_to_cart(&mut store, &product("Unisex Scarf", "200.00")).unwrap();
        add_to_cart(&mut store, &product("Headwrap & Earrings", "100.00")).unwrap();
        add_to_cart(&mut store, &product("Unisex Scarf", "200.00")).unwrap();

        let view = CartView::read(&store).unwrap();
        let names: Vec<&str> = view.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Unisex Scarf", "Headwrap & Earrings"]);
        assert_eq!(view.rows.first().map(|r| r.quantity), Some(2));
        assert_eq!(
            view.rows.first().map(|r| r.line_total.to_string()),
            Some("R400.00".to_string())
        );
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let mut store = MemoryStore::new();
        add_to_cart(&mut store, &product("Modern Mbhaco Dress", "300.00")).unwrap();

        let first = CartView::read(&store).unwrap();
        let second = CartView::read(&store).unwrap();

        assert_eq!(first, second);
        assert_eq!(format!("{first:?}"), format!("{second:?}"));
    }

    #[test]
    fn test_summary_totals_match_rows() {
        let mut store = MemoryStore::new();
        add_to_cart(&mut store, &product("Headwrap & Earrings", "100.00")).unwrap();
        add_to_cart(&mut store, &product("Unisex Scarf", "200.00")).unwrap();

        let view = CartView::read(&store).unwrap();
        assert_eq!(view.summary.item_count, 2);
        assert_eq!(view.summary.running_total.to_string(), "R300.00");
    }
}
