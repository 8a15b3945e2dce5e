//! Cart state, mutation, and view.
//!
//! The cart lifecycle is a small state machine:
//!
//! ```text
//! Empty -> (add) -> Populated -> (add)* -> Populated -> (checkout|clear) -> Empty
//! ```
//!
//! There is no per-line-item removal transition; a cart is only ever grown
//! by adds and destroyed wholesale by checkout or an explicit clear.
//!
//! State persists as three entries in a [`CartStore`](crate::store::CartStore)
//! (see [`crate::store::keys`]). The line-item list is the source of truth;
//! the item count and running total are derived from it on every read and
//! written out alongside it for the persisted format.

pub mod mutate;
pub mod state;
pub mod view;

pub use mutate::{CartError, CartSummary, add_to_cart};
pub use state::{CartState, LineItem};
pub use view::{CartRow, CartView};
