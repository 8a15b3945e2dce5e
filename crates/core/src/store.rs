//! The cart store contract.
//!
//! The cart persists as three string-keyed entries in a key-value store
//! scoped to the visitor's session: an integer item count, a JSON-encoded
//! line-item list, and a decimal running total. The store offers no
//! atomicity across keys; callers write the line items first and recompute
//! the derived keys on read, so a torn write cannot produce a lasting
//! inconsistency.

use std::collections::HashMap;

/// Keys for the persisted cart entries.
pub mod keys {
    /// Total number of add-actions performed (integer string).
    pub const ITEM_COUNT: &str = "cart_item_count";

    /// JSON-encoded list of line items, in first-add order.
    pub const LINE_ITEMS: &str = "cart_line_items";

    /// Running cart total (decimal string).
    pub const RUNNING_TOTAL: &str = "cart_running_total";

    /// Every cart key, for adapters that copy the cart wholesale.
    pub const ALL: [&str; 3] = [ITEM_COUNT, LINE_ITEMS, RUNNING_TOTAL];
}

/// Errors that can occur when writing to a [`CartStore`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The backing store rejected the write (quota, permission, ...).
    #[error("cart store write failed: {0}")]
    WriteFailed(String),
}

/// A durable, synchronous key-value store for cart state.
///
/// Implementations survive page reloads within one visitor session but not
/// an explicit [`clear`](CartStore::clear). Reads never fail; absent keys
/// read as `None` and malformed values are the caller's problem to degrade
/// on (see [`crate::cart::CartState::load`]).
pub trait CartStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::WriteFailed`] if the backing store rejects the
    /// write. Callers must not panic on failure; the add flow degrades per
    /// the storefront's error handling.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Remove every key. Destroys the cart.
    fn clear(&mut self);
}

/// HashMap-backed [`CartStore`].
///
/// Used directly in tests and as the per-request snapshot the storefront
/// copies the visitor's session into.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value directly. Unlike [`CartStore::set`] this cannot fail;
    /// adapters seeding a snapshot use it to avoid threading an impossible
    /// error.
    pub fn insert(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

impl CartStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.get(keys::ITEM_COUNT).is_none());

        store.set(keys::ITEM_COUNT, "2".to_string()).unwrap();
        assert_eq!(store.get(keys::ITEM_COUNT).as_deref(), Some("2"));

        store.set(keys::ITEM_COUNT, "3".to_string()).unwrap();
        assert_eq!(store.get(keys::ITEM_COUNT).as_deref(), Some("3"));
    }

    #[test]
    fn test_clear_removes_every_key() {
        let mut store = MemoryStore::new();
        for key in keys::ALL {
            store.set(key, "x".to_string()).unwrap();
        }

        store.clear();

        for key in keys::ALL {
            assert!(store.get(key).is_none());
        }
    }
}
