//! Persisted cart state and its codec.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::store::{CartStore, StoreError, keys};
use crate::types::Price;

/// One product's aggregated cart entry.
///
/// A snapshot of the catalog product at first add, plus the accumulated
/// quantity. Unit prices are immutable in the catalog, so the snapshot
/// never drifts from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name (identity key).
    pub name: String,
    /// Unit price at time of add.
    pub price: Price,
    /// Accumulated quantity, starts at 1.
    pub quantity: u32,
}

impl LineItem {
    /// Snapshot a catalog product as a fresh line item.
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// Price contribution of this line (`unit price x quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// The cart's persisted state: line items in first-add order.
///
/// The item count and running total are not stored here; they are derived
/// from the line items on demand, which keeps the persisted keys free of
/// multi-key consistency hazards. After every mutation the invariant
/// `item_count == sum(quantity)` holds by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    line_items: Vec<LineItem>,
}

impl CartState {
    /// Load cart state from a store.
    ///
    /// Absent or unparsable line items read as an empty cart; stored
    /// corruption is never a fatal error. The stored count and total keys
    /// are ignored here - they are derived values, recomputed from the
    /// line items.
    pub fn load<S: CartStore + ?Sized>(store: &S) -> Self {
        let line_items = store
            .get(keys::LINE_ITEMS)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { line_items }
    }

    /// Persist the cart: line items first, then the derived keys.
    ///
    /// The write order matters. If a later write fails, the stale keys are
    /// the derived ones, and the next [`load`](Self::load) recomputes those
    /// from the line items.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on the first failed write.
    pub fn save<S: CartStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(&self.line_items)
            .map_err(|e| StoreError::WriteFailed(format!("encode line items: {e}")))?;
        store.set(keys::LINE_ITEMS, encoded)?;
        store.set(keys::ITEM_COUNT, self.item_count().to_string())?;
        store.set(keys::RUNNING_TOTAL, self.running_total().amount.to_string())?;
        Ok(())
    }

    /// Record one add-action for `product`.
    ///
    /// First add of a name pushes a fresh snapshot with quantity 1;
    /// subsequent adds increment the existing line's quantity.
    pub fn add(&mut self, product: &Product) {
        match self.line_items.iter_mut().find(|l| l.name == product.name) {
            Some(line) => line.quantity += 1,
            None => self.line_items.push(LineItem::new(product)),
        }
    }

    /// Line items in first-add order.
    #[must_use]
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Total number of add-actions (`sum(quantity)`).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.line_items.iter().map(|l| l.quantity).sum()
    }

    /// Running total over all add-actions.
    ///
    /// Computed as `sum(unit price x quantity)`, which equals the sum of
    /// each add-action's price because catalog prices are static.
    #[must_use]
    pub fn running_total(&self) -> Price {
        let currency = self
            .line_items
            .first()
            .map(|l| l.price.currency)
            .unwrap_or_default();
        self.line_items
            .iter()
            .fold(Price::zero(currency), |acc, l| acc + l.line_total())
    }

    /// Whether no add-action has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::CurrencyCode;

    fn product(name: &str, price: &str) -> Product {
        Product {
            name: name.to_string(),
            price: Price::new(price.parse().unwrap(), CurrencyCode::ZAR),
        }
    }

    #[test]
    fn test_load_from_empty_store_is_empty_cart() {
        let store = MemoryStore::new();
        let state = CartState::load(&store);
        assert!(state.is_empty());
        assert_eq!(state.item_count(), 0);
    }

    #[test]
    fn test_load_tolerates_non_json_line_items() {
        let mut store = MemoryStore::new();
        store
            .set(keys::LINE_ITEMS, "not json at all".to_string())
            .unwrap();
        store.set(keys::ITEM_COUNT, "banana".to_string()).unwrap();

        let state = CartState::load(&store);
        assert!(state.is_empty());
    }

    #[test]
    fn test_save_writes_all_three_keys() {
        let mut store = MemoryStore::new();
        let mut state = CartState::default();
        state.add(&product("Headwrap & Earrings", "100.00"));
        state.add(&product("Unisex Scarf", "200.00"));

        state.save(&mut store).unwrap();

        assert_eq!(store.get(keys::ITEM_COUNT).as_deref(), Some("2"));
        assert_eq!(store.get(keys::RUNNING_TOTAL).as_deref(), Some("300.00"));
        assert!(store.get(keys::LINE_ITEMS).is_some());
    }

    #[test]
    fn test_round_trip_preserves_order_and_quantities() {
        let mut store = MemoryStore::new();
        let mut state = CartState::default();
        state.add(&product("Modern Mbhaco Dress", "300.00"));
        state.add(&product("Headwrap & Earrings", "100.00"));
        state.add(&product("Modern Mbhaco Dress", "300.00"));
        state.save(&mut store).unwrap();

        let loaded = CartState::load(&store);
        assert_eq!(loaded, state);
        let names: Vec<&str> = loaded.line_items().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Modern Mbhaco Dress", "Headwrap & Earrings"]);
    }

    #[test]
    fn test_item_count_matches_sum_of_quantities() {
        let mut state = CartState::default();
        let dress = product("Indlovukazi Dress", "2500.00");
        let scarf = product("Unisex Scarf", "200.00");
        state.add(&dress);
        state.add(&dress);
        state.add(&scarf);

        assert_eq!(
            state.item_count(),
            state.line_items().iter().map(|l| l.quantity).sum::<u32>()
        );
        assert_eq!(state.item_count(), 3);
    }

    #[test]
    fn test_running_total_is_price_times_quantity() {
        let mut state = CartState::default();
        let gown = product("Modern Ball Gown", "2000.00");
        state.add(&gown);
        state.add(&gown);

        assert_eq!(state.running_total().to_string(), "R4000.00");
    }
}
