//! Storefront events
//!
//! Everything a shopper can do on the page, in one enum.

use crate::page::ElementId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Click on an interactive element (add-to-cart or cart-row removal control)
    Click(ElementId),
    /// Remove the cart entry at this position
    Remove(usize),
    /// Cart icon in the header
    CartIcon,
    /// Close control on the cart panel
    CloseCart,
    /// Hamburger menu button
    Hamburger,
    /// Category filter link
    FilterLink(String),
    /// Checkout button
    Checkout,
    /// Theme toggle button
    ThemeToggle,
}
