//! The add-to-cart mutation.

use serde::Serialize;

use crate::catalog::Product;
use crate::cart::state::CartState;
use crate::store::{CartStore, StoreError};
use crate::types::Price;

/// Errors that can occur while mutating the cart.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CartError {
    /// Persisting the updated cart failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Cart totals for the visible counter and summary row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    /// Total add-actions performed.
    pub item_count: u32,
    /// Running cart total.
    pub running_total: Price,
}

impl CartSummary {
    /// Summary of a cart state.
    #[must_use]
    pub fn of(state: &CartState) -> Self {
        Self {
            item_count: state.item_count(),
            running_total: state.running_total(),
        }
    }
}

/// Record one add-action for `product` and persist the result.
///
/// Loads the current state (absent or corrupt state reads as empty),
/// upserts the product's line item, and writes the cart back. Returns the
/// updated totals for the visible counter.
///
/// # Errors
///
/// Returns [`CartError::Store`] if a write fails. The cart on disk may
/// then be behind the attempted state, but never torn: line items are
/// written before the derived keys, and reads recompute the derived
/// values.
pub fn add_to_cart<S: CartStore + ?Sized>(
    store: &mut S,
    product: &Product,
) -> Result<CartSummary, CartError> {
    let mut state = CartState::load(store);
    state.add(product);
    state.save(store)?;
    Ok(CartSummary::of(&state))
}
