//! Storefront application
//!
//! Owns the page and every component, runs the page-load sequence and routes
//! events to the component that owns them.

use crate::binder::ButtonBinder;
use crate::catalog::{CatalogLoader, CatalogOutcome};
use crate::checkout::{CheckoutInitiator, EMPTY_CART};
use crate::chrome;
use crate::controller::CartController;
use crate::event::UiEvent;
use crate::page::Page;
use crate::render::CartRenderer;
use charmane_api::{CatalogSource, PaymentGateway};
use charmane_core::{CheckoutSession, StoreConfig};
use charmane_store::CartStore;
use tracing::{debug, info, warn};

/// What dispatching an event led to
#[derive(Debug, Clone)]
pub enum EventOutcome {
    /// The event was routed to a component
    Handled,
    /// Nothing on the page reacts to the event
    Ignored,
    /// Checkout succeeded and the page navigated away
    Redirected(CheckoutSession),
}

pub struct Storefront<C, P> {
    page: Page,
    config: StoreConfig,
    cart: CartController,
    binder: ButtonBinder,
    catalog: CatalogLoader<C>,
    checkout: CheckoutInitiator<P>,
}

impl<C: CatalogSource, P: PaymentGateway> Storefront<C, P> {
    /// Assemble a storefront; the persisted cart is loaded immediately
    pub fn new(config: StoreConfig, page: Page, store: CartStore, catalog: C, payment: P) -> Self {
        let cart = CartController::load(store, CartRenderer::new(config.currency_symbol.clone()));
        let catalog = CatalogLoader::new(
            catalog,
            config.currency_symbol.clone(),
            config.placeholder_image.clone(),
        );

        Self {
            page,
            config,
            cart,
            binder: ButtonBinder::new(),
            catalog,
            checkout: CheckoutInitiator::new(payment),
        }
    }

    /// Page-load sequence
    ///
    /// 1. Paint the persisted cart
    /// 2. Bind the controls already on the page
    /// 3. Load the catalog, which binds again once it has rendered
    pub async fn start(&mut self) -> CatalogOutcome {
        info!("Starting storefront");
        self.cart.render(&mut self.page);
        self.binder.bind(&self.page);
        self.reload_catalog().await
    }

    /// Fetch and render the catalog again
    pub async fn reload_catalog(&mut self) -> CatalogOutcome {
        self.catalog
            .load_catalog(&mut self.page, &mut self.binder)
            .await
    }

    /// Route one event
    pub async fn dispatch(&mut self, event: UiEvent) -> EventOutcome {
        debug!("Dispatching {:?}", event);

        match event {
            UiEvent::Click(id) => {
                if self.binder.click(id, &mut self.page, &mut self.cart) {
                    return EventOutcome::Handled;
                }
                match self.page.remove_target(id) {
                    Some(index) => {
                        self.cart.remove(index, &mut self.page);
                        EventOutcome::Handled
                    }
                    None => {
                        debug!("No handler for {}", id);
                        EventOutcome::Ignored
                    }
                }
            }
            UiEvent::Remove(index) => {
                self.cart.remove(index, &mut self.page);
                EventOutcome::Handled
            }
            UiEvent::CartIcon => {
                chrome::open_cart(&mut self.page);
                EventOutcome::Handled
            }
            UiEvent::CloseCart => {
                chrome::close_cart(&mut self.page);
                EventOutcome::Handled
            }
            UiEvent::Hamburger => {
                chrome::toggle_menu(&mut self.page);
                EventOutcome::Handled
            }
            UiEvent::FilterLink(category) => {
                chrome::select_filter(&mut self.page, &category);
                EventOutcome::Handled
            }
            UiEvent::ThemeToggle => {
                if !self.page.has_theme_toggle() {
                    return EventOutcome::Ignored;
                }
                chrome::toggle_theme(&mut self.page);
                EventOutcome::Handled
            }
            UiEvent::Checkout => self.start_checkout().await,
        }
    }

    async fn start_checkout(&mut self) -> EventOutcome {
        if self.cart.is_empty() {
            warn!("Checkout attempted with an empty cart");
            self.page.alert(EMPTY_CART);
            return EventOutcome::Handled;
        }

        let amount = self.cart.total();
        match self
            .checkout
            .checkout(&self.config.checkout_description, amount, &mut self.page)
            .await
        {
            Ok(session) => EventOutcome::Redirected(session),
            Err(_) => EventOutcome::Handled,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn cart(&self) -> &CartController {
        &self.cart
    }

    /// Direct cart access for flows that bypass the page, such as the CLI
    pub fn cart_mut(&mut self) -> (&mut CartController, &mut Page) {
        (&mut self.cart, &mut self.page)
    }

    pub fn binder(&self) -> &ButtonBinder {
        &self.binder
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}
