//! Catalog loader
//!
//! Fetches the remote product list and renders it into the product container.
//! Whatever happens to the request, the binder runs afterwards so every
//! control on the page is interactive.

use crate::binder::ButtonBinder;
use crate::page::Page;
use crate::view::ProductCardView;
use charmane_api::CatalogSource;
use charmane_core::fail_open::fail_open;
use charmane_core::Product;
use tracing::{debug, info};

/// Message shown in place of the catalog when it cannot be loaded
pub const CATALOG_UNAVAILABLE: &str = "Não foi possível carregar os produtos.";

/// Outcome of a catalog load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOutcome {
    /// Products rendered
    Loaded(usize),
    /// Fallback message rendered
    Unavailable,
    /// The page has no product container
    Skipped,
}

pub struct CatalogLoader<C> {
    source: C,
    currency: String,
    placeholder_image: String,
}

impl<C: CatalogSource> CatalogLoader<C> {
    pub fn new(source: C, currency: impl Into<String>, placeholder_image: impl Into<String>) -> Self {
        Self {
            source,
            currency: currency.into(),
            placeholder_image: placeholder_image.into(),
        }
    }

    /// Fetch and render the catalog, then rebind add-to-cart controls
    pub async fn load_catalog(&self, page: &mut Page, binder: &mut ButtonBinder) -> CatalogOutcome {
        let outcome = self.fetch_and_render(page).await;
        binder.bind(page);
        outcome
    }

    async fn fetch_and_render(&self, page: &mut Page) -> CatalogOutcome {
        if !page.has_product_container() {
            debug!("No product container on page, skipping catalog");
            return CatalogOutcome::Skipped;
        }

        match fail_open("catalog_load", || self.source.fetch_products()).await {
            Some(products) => {
                let count = products.len();
                self.render(&products, page);
                info!("Rendered {} catalog products", count);
                CatalogOutcome::Loaded(count)
            }
            None => {
                page.show_catalog_message(CATALOG_UNAVAILABLE);
                CatalogOutcome::Unavailable
            }
        }
    }

    /// Replace the container contents with one card per product
    pub fn render(&self, products: &[Product], page: &mut Page) {
        let specs = products
            .iter()
            .map(|product| {
                ProductCardView::from_product(product, &self.currency, &self.placeholder_image)
                    .into_spec()
            })
            .collect();
        page.replace_catalog_cards(specs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{ContainerContent, PageLayout, ATTR_NAME, ATTR_PRICE};
    use async_trait::async_trait;
    use charmane_core::{CharmaneError, Result};

    struct StaticCatalog(Vec<Product>);

    #[async_trait]
    impl CatalogSource for StaticCatalog {
        async fn fetch_products(&self) -> Result<Vec<Product>> {
            Ok(self.0.clone())
        }
    }

    struct DownCatalog;

    #[async_trait]
    impl CatalogSource for DownCatalog {
        async fn fetch_products(&self) -> Result<Vec<Product>> {
            Err(CharmaneError::Catalog("connection refused".to_string()))
        }
    }

    fn products() -> Vec<Product> {
        vec![
            Product::new("Camisa", 49.9, "camisas").with_image("https://img/camisa.png"),
            Product::new("Calça", 89.9, "calcas"),
        ]
    }

    #[tokio::test]
    async fn test_load_renders_cards_and_binds() {
        let loader = CatalogLoader::new(StaticCatalog(products()), "R$", "https://placeholder");
        let mut page = Page::default();
        let mut binder = ButtonBinder::new();

        let outcome = loader.load_catalog(&mut page, &mut binder).await;
        assert_eq!(outcome, CatalogOutcome::Loaded(2));

        let cards: Vec<_> = page.products().collect();
        assert_eq!(cards[0].price_label, "R$ 49.90");
        assert_eq!(cards[0].category, "camisas");
        assert_eq!(cards[1].image, "https://placeholder");
        assert_eq!(cards[1].button.data(ATTR_NAME), Some("Calça"));
        assert_eq!(cards[1].button.data(ATTR_PRICE), Some("89.9"));

        assert_eq!(binder.handler_count(), 2);
        assert!(cards.iter().all(|card| binder.is_bound(card.button.id)));
    }

    #[tokio::test]
    async fn test_failure_shows_message_and_still_binds() {
        let loader = CatalogLoader::new(DownCatalog, "R$", "https://placeholder");
        let mut page = Page::default();
        page.add_static_product(ProductCardView::from_product(
            &Product::new("Blusa", 39.9, "blusas"),
            "R$",
            "https://placeholder",
        )
        .into_spec());
        let mut binder = ButtonBinder::new();

        let outcome = loader.load_catalog(&mut page, &mut binder).await;
        assert_eq!(outcome, CatalogOutcome::Unavailable);
        assert_eq!(
            page.container_content(),
            Some(&ContainerContent::Message(CATALOG_UNAVAILABLE.to_string()))
        );
        assert_eq!(binder.generation(), 1);
        assert_eq!(binder.handler_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_container_skips_request() {
        let loader = CatalogLoader::new(DownCatalog, "R$", "https://placeholder");
        let mut page = Page::new(PageLayout {
            product_container: false,
            ..PageLayout::full()
        });
        let mut binder = ButtonBinder::new();

        let outcome = loader.load_catalog(&mut page, &mut binder).await;
        assert_eq!(outcome, CatalogOutcome::Skipped);
        assert_eq!(binder.generation(), 1);
    }

    #[tokio::test]
    async fn test_empty_catalog_renders_no_cards() {
        let loader = CatalogLoader::new(StaticCatalog(Vec::new()), "R$", "https://placeholder");
        let mut page = Page::default();
        let mut binder = ButtonBinder::new();

        assert_eq!(
            loader.load_catalog(&mut page, &mut binder).await,
            CatalogOutcome::Loaded(0)
        );
        assert_eq!(page.container_content(), Some(&ContainerContent::Cards(Vec::new())));
    }
}
