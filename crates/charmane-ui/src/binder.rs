//! Add-to-cart button binding
//!
//! Handlers live in a registration table keyed by element id. `bind` detaches
//! every previous registration and attaches one per control currently on the
//! page, so rebinding never doubles a handler and controls that were replaced
//! by a new catalog render stop responding.

use crate::controller::CartController;
use crate::page::{ElementId, Page, ATTR_NAME, ATTR_PRICE};
use charmane_core::CartItem;
use std::collections::BTreeMap;
use tracing::debug;

/// Action attached to a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handler {
    AddToCart,
}

#[derive(Debug, Default)]
pub struct ButtonBinder {
    handlers: BTreeMap<ElementId, Handler>,
    generation: u64,
}

impl ButtonBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach exactly one handler to every add-to-cart control on the page
    ///
    /// Returns the number of bound controls.
    pub fn bind(&mut self, page: &Page) -> usize {
        let detached = self.handlers.len();
        self.handlers.clear();
        self.handlers.extend(
            page.add_to_cart_buttons()
                .map(|button| (button.id, Handler::AddToCart)),
        );
        self.generation += 1;

        debug!(
            "Bind generation {}: detached {}, attached {}",
            self.generation,
            detached,
            self.handlers.len()
        );
        self.handlers.len()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_bound(&self, id: ElementId) -> bool {
        self.handlers.contains_key(&id)
    }

    /// Number of completed `bind` calls
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Deliver a click on `id`
    ///
    /// Returns `false` when no handler is attached to `id`. A bound control
    /// with a missing name or an invalid price is handled without effect.
    pub fn click(&self, id: ElementId, page: &mut Page, cart: &mut CartController) -> bool {
        let Some(Handler::AddToCart) = self.handlers.get(&id).copied() else {
            return false;
        };

        let item = page
            .find_button(id)
            .and_then(|button| CartItem::from_attributes(button.data(ATTR_NAME), button.data(ATTR_PRICE)));

        match item {
            Some(item) => cart.add(item, page),
            None => debug!("Ignoring click on {} with invalid product data", id),
        }
        true
    }
}
