//! # charmane-ui
//!
//! Storefront behavior over an owned page model.
//!
//! ## Architecture
//!
//! ```text
//! Storefront ── page-load sequence + event dispatch
//!   ├── CartController ── CartRenderer ──▶ cart list, total label
//!   ├── ButtonBinder ──── handler table keyed by ElementId
//!   ├── CatalogLoader ─── CatalogSource ──▶ product cards
//!   ├── CheckoutInitiator ─ PaymentGateway ──▶ location / alert
//!   └── chrome ────────── cart panel, menu, filter, theme
//! ```
//!
//! Every operation is driven by `&mut` access to the storefront, so events are
//! handled one at a time and never interleave.

mod app;
mod binder;
mod catalog;
mod checkout;
pub mod chrome;
mod controller;
mod display;
mod event;
pub mod page;
pub mod render;
pub mod view;

pub use app::{EventOutcome, Storefront};
pub use binder::ButtonBinder;
pub use catalog::{CatalogLoader, CatalogOutcome, CATALOG_UNAVAILABLE};
pub use checkout::{CheckoutInitiator, EMPTY_CART, PAYMENT_FAILED};
pub use controller::CartController;
pub use event::UiEvent;
pub use page::{ElementId, Page, PageLayout};
pub use render::CartRenderer;
pub use view::{CartRow, CartView, ProductCardView};
