//! Persistent cart store
//!
//! The cart lives under a single storage key as a JSON array of
//! `{nome, preco}` objects. Anything missing or unreadable loads as an empty
//! cart.

use crate::kv::KeyValueStorage;
use charmane_core::{Cart, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage key holding the serialized cart
pub const CART_STORAGE_KEY: &str = "carrinho";

/// Reads and writes the cart through a key-value backend
#[derive(Clone)]
pub struct CartStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl CartStore {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    /// Load the persisted cart, or an empty one
    pub fn load(&self) -> Cart {
        let raw = match self.storage.get_item(CART_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No persisted cart, starting empty");
                return Cart::new();
            }
            Err(e) => {
                warn!("Failed to read persisted cart, starting empty: {}", e);
                return Cart::new();
            }
        };

        // `null` is what an unset value serializes to; treat it like absence.
        match serde_json::from_str::<Option<Cart>>(&raw) {
            Ok(cart) => {
                let cart = cart.unwrap_or_default();
                debug!("Loaded persisted cart with {} items", cart.len());
                cart
            }
            Err(e) => {
                warn!("Persisted cart is unreadable, starting empty: {}", e);
                Cart::new()
            }
        }
    }

    /// Overwrite the persisted cart
    pub fn save(&self, cart: &Cart) -> Result<()> {
        let raw = serde_json::to_string(cart)?;
        self.storage.set_item(CART_STORAGE_KEY, &raw)?;
        debug!("Persisted cart with {} items", cart.len());
        Ok(())
    }

    /// Remove the persisted cart
    pub fn clear(&self) -> Result<()> {
        self.storage.remove_item(CART_STORAGE_KEY)
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &CART_STORAGE_KEY)
            .finish_non_exhaustive()
    }
}
