//! Session-backed cart store adapter.
//!
//! The cart operations in `mbhaco-core` run against a synchronous
//! [`CartStore`]; the visitor's cart lives in the tower-sessions session.
//! This adapter bridges the two: load the cart keys into a [`MemoryStore`]
//! snapshot, run the operation, write the snapshot back. Keys absent from
//! the snapshot after the operation (a cleared cart) are removed from the
//! session.

use mbhaco_core::{CartStore, MemoryStore, keys};
use tower_sessions::Session;

/// A per-request snapshot of the visitor's cart.
pub struct SessionCart {
    snapshot: MemoryStore,
}

impl SessionCart {
    /// Copy the cart keys out of the session into a snapshot.
    ///
    /// # Errors
    ///
    /// Returns the session store's error if a read fails.
    pub async fn load(session: &Session) -> Result<Self, tower_sessions::session::Error> {
        let mut snapshot = MemoryStore::new();
        for key in keys::ALL {
            if let Some(value) = session.get::<String>(key).await? {
                snapshot.insert(key, value);
            }
        }
        Ok(Self { snapshot })
    }

    /// The snapshot, for cart operations.
    pub fn store(&mut self) -> &mut MemoryStore {
        &mut self.snapshot
    }

    /// The snapshot, read-only.
    #[must_use]
    pub fn store_ref(&self) -> &MemoryStore {
        &self.snapshot
    }

    /// Write the snapshot back to the session.
    ///
    /// # Errors
    ///
    /// Returns the session store's error if a write fails.
    pub async fn save(&self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        for key in keys::ALL {
            match self.snapshot.get(key) {
                Some(value) => session.insert(key, value).await?,
                None => {
                    session.remove::<String>(key).await?;
                }
            }
        }
        Ok(())
    }
}
