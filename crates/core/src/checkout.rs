//! Checkout: payment completion and cart abandonment.
//!
//! Both operations destroy the cart. Completion first captures a receipt
//! so the confirmation can reference what was paid; abandonment just
//! clears. From the caller's point of view the clear is one transaction -
//! [`CartStore::clear`] removes every key in a single call.

use crate::cart::state::{CartState, LineItem};
use crate::store::CartStore;
use crate::types::Price;

/// Errors that can occur during checkout.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckoutError {
    /// There is nothing to pay for.
    #[error("cannot complete payment on an empty cart")]
    EmptyCart,
}

/// Record of a completed payment, captured before the cart is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// The purchased line items, in first-add order.
    pub lines: Vec<LineItem>,
    /// Total number of items purchased.
    pub item_count: u32,
    /// Amount paid.
    pub total: Price,
}

impl Receipt {
    /// Human-readable confirmation line referencing the amount paid.
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!("A payment of {} has been completed.", self.total)
    }
}

/// Complete payment: capture a receipt, then destroy the cart.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] when no add-action has been
/// recorded; an empty cart has nothing to confirm and is left untouched.
pub fn complete_payment<S: CartStore + ?Sized>(store: &mut S) -> Result<Receipt, CheckoutError> {
    let state = CartState::load(store);
    if state.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let receipt = Receipt {
        lines: state.line_items().to_vec(),
        item_count: state.item_count(),
        total: state.running_total(),
    };
    store.clear();
    Ok(receipt)
}

/// Destroy the cart without confirmation.
pub fn abandon_cart<S: CartStore + ?Sized>(store: &mut S) {
    store.clear();
}
