//! Core type definitions for the storefront

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Category sentinel that matches every product
pub const ALL_CATEGORIES: &str = "all";

/// A single line in the cart
///
/// Items have no identity beyond their fields: two identical items are two
/// distinct positional entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    pub price: f64,
}

impl CartItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Build an item from raw control attributes
    ///
    /// Returns `None` when the name is missing/blank or the price is not a
    /// finite number greater than zero.
    pub fn from_attributes(name: Option<&str>, price: Option<&str>) -> Option<Self> {
        let name = name.map(str::trim).filter(|n| !n.is_empty())?;
        let price = price?.trim().parse::<f64>().ok()?;
        if !price.is_finite() || price <= 0.0 {
            return None;
        }
        Some(Self::new(name, price))
    }
}

/// Ordered list of cart items
///
/// Serializes as a bare JSON array, which is the persisted form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CartItem> {
        self.items.get(index)
    }

    /// Sum of all item prices
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Return this cart with `item` appended
    pub fn with_item(mut self, item: CartItem) -> Self {
        self.items.push(item);
        self
    }

    /// Return this cart with the entry at `index` removed
    ///
    /// Later entries shift down by one. An out-of-range index leaves the cart
    /// unchanged and reports `None` for the removed item.
    pub fn without_index(mut self, index: usize) -> (Self, Option<CartItem>) {
        if index < self.items.len() {
            let removed = self.items.remove(index);
            (self, Some(removed))
        } else {
            (self, None)
        }
    }
}

/// Product as supplied by the remote catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "imagem", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn matches_category(&self, category: &str) -> bool {
        category == ALL_CATEGORIES || self.category == category
    }
}

/// Page color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Indicator shown on the toggle control
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("Invalid theme: {}", s)),
        }
    }
}

/// Successful checkout: where to send the shopper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Hosted checkout URL returned by the payment service
    pub url: String,
    /// Purchase description sent to the payment service
    pub description: String,
    /// Amount charged
    pub amount: f64,
    /// When the session was created
    pub created_at: DateTime<Utc>,
}

impl CheckoutSession {
    pub fn new(url: impl Into<String>, description: impl Into<String>, amount: f64) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
            amount,
            created_at: Utc::now(),
        }
    }
}

/// Format a price with two decimals behind a currency prefix: `R$ 49.90`
///
/// Works on the exact binary value of `value` and rounds ties away from zero,
/// so `10.125` shows as `10.13` while `1.005` (stored just below) shows `1.00`.
pub fn format_price(currency: &str, value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{} {:.2}", currency, rounded)
        }
        None => format!("{} {:.2}", currency, value),
    }
}

/// Format the cart total label: `Total: R$ 139.80`
pub fn format_total(currency: &str, value: f64) -> String {
    format!("Total: {}", format_price(currency, value))
}
