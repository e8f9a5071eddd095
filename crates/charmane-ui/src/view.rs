//! View models
//!
//! Pure projections of the cart and the catalog. Nothing here touches the
//! page; [`crate::render`] applies these to it.

use crate::page::{CardSpec, ATTR_NAME, ATTR_PRICE};
use charmane_core::{format_price, format_total, Cart, Product};
use std::collections::BTreeMap;

/// One visible cart row
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    /// Position in the cart; the row's removal control targets it
    pub index: usize,
    pub label: String,
}

/// What the cart list and total label should show
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub total: f64,
    pub total_label: String,
}

impl CartView {
    pub fn from_cart(cart: &Cart, currency: &str) -> Self {
        let rows = cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| CartRow {
                index,
                label: format!("{} - {}", item.name, format_price(currency, item.price)),
            })
            .collect();
        let total = cart.total();

        Self {
            rows,
            total,
            total_label: format_total(currency, total),
        }
    }
}

/// What a product card should show
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCardView {
    pub name: String,
    pub price_label: String,
    pub category: String,
    pub image: String,
    /// Attributes carried by the card's add-to-cart control
    pub button_attributes: BTreeMap<String, String>,
}

impl ProductCardView {
    pub fn from_product(product: &Product, currency: &str, placeholder_image: &str) -> Self {
        let mut button_attributes = BTreeMap::new();
        button_attributes.insert(ATTR_NAME.to_string(), product.name.clone());
        button_attributes.insert(ATTR_PRICE.to_string(), product.price.to_string());

        Self {
            name: product.name.clone(),
            price_label: format_price(currency, product.price),
            category: product.category.clone(),
            image: product
                .image
                .clone()
                .filter(|image| !image.is_empty())
                .unwrap_or_else(|| placeholder_image.to_string()),
            button_attributes,
        }
    }

    pub fn into_spec(self) -> CardSpec {
        CardSpec {
            name: self.name,
            price_label: self.price_label,
            category: self.category,
            image: self.image,
            attributes: self.button_attributes,
        }
    }
}
