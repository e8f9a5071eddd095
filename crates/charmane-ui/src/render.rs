//! Cart renderer
//!
//! Applies a [`CartView`] to the page: clears the old rows, writes one row per
//! item and refreshes the total label.

use crate::page::Page;
use crate::view::CartView;
use charmane_core::Cart;
use tracing::debug;

/// Projects the cart onto the page
#[derive(Debug, Clone)]
pub struct CartRenderer {
    currency: String,
}

impl CartRenderer {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    /// Compute the view for `cart` and apply it
    pub fn render(&self, cart: &Cart, page: &mut Page) -> CartView {
        let view = CartView::from_cart(cart, &self.currency);
        apply(&view, page);
        view
    }
}

/// Write `view` into the page's cart list and total label
///
/// Each missing target is skipped on its own.
pub fn apply(view: &CartView, page: &mut Page) {
    if page.has_cart_list() {
        let labels = view
            .rows
            .iter()
            .map(|row| (row.index, row.label.clone()))
            .collect();
        page.replace_cart_rows(labels);
    } else {
        debug!("No cart list on page, skipping rows");
    }

    page.set_total_label(view.total_label.clone());
}
