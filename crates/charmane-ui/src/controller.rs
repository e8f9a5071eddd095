//! Cart controller
//!
//! Owns the cart. Every mutation runs the same three steps: pure update,
//! re-render, persist. Persistence failures are logged and swallowed; the
//! in-memory cart stays authoritative for the session.

use crate::chrome;
use crate::page::Page;
use crate::render::CartRenderer;
use charmane_core::fail_open::fail_open_sync;
use charmane_core::{Cart, CartItem};
use charmane_store::CartStore;
use tracing::{debug, info};

pub struct CartController {
    cart: Cart,
    store: CartStore,
    renderer: CartRenderer,
}

impl CartController {
    /// Load the persisted cart from `store`
    pub fn load(store: CartStore, renderer: CartRenderer) -> Self {
        let cart = store.load();
        info!("Cart loaded with {} items", cart.len());
        Self {
            cart,
            store,
            renderer,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    /// Paint the current cart without mutating it
    pub fn render(&self, page: &mut Page) {
        self.renderer.render(&self.cart, page);
    }

    /// Append `item`, then re-render, persist and open the cart panel
    pub fn add(&mut self, item: CartItem, page: &mut Page) {
        debug!("Adding {} ({:.2}) to cart", item.name, item.price);
        self.cart = std::mem::take(&mut self.cart).with_item(item);
        self.commit(page);
        chrome::open_cart(page);
    }

    /// Remove the entry at `index`; out of range is a no-op
    pub fn remove(&mut self, index: usize, page: &mut Page) -> Option<CartItem> {
        let (cart, removed) = std::mem::take(&mut self.cart).without_index(index);
        self.cart = cart;

        match removed {
            Some(item) => {
                debug!("Removed {} from cart position {}", item.name, index);
                self.commit(page);
                Some(item)
            }
            None => {
                debug!(
                    "Ignoring removal of position {} from cart of {}",
                    index,
                    self.cart.len()
                );
                None
            }
        }
    }

    /// Empty the cart, then re-render and persist
    pub fn clear(&mut self, page: &mut Page) {
        self.cart = Cart::new();
        self.commit(page);
    }

    fn commit(&self, page: &mut Page) {
        self.renderer.render(&self.cart, page);
        fail_open_sync("cart_persist", || self.store.save(&self.cart));
    }
}

impl std::fmt::Debug for CartController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartController")
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}
