//! Page chrome: cart panel, menu, category filter and theme

use crate::page::Page;
use charmane_core::ALL_CATEGORIES;
use tracing::debug;

/// Open the cart panel
pub fn open_cart(page: &mut Page) {
    page.set_cart_panel_open(true);
}

/// Close the cart panel
pub fn close_cart(page: &mut Page) {
    page.set_cart_panel_open(false);
}

/// Flip the hamburger menu
pub fn toggle_menu(page: &mut Page) {
    if let Some(open) = page.menu_open() {
        page.set_menu_open(!open);
    }
}

/// Show cards in `category` (or every card for `all`) and hide the rest
///
/// Returns how many cards are visible afterwards.
pub fn filter_products(page: &mut Page, category: &str) -> usize {
    let mut visible = 0;
    for card in page.products_mut() {
        card.hidden = !(category == ALL_CATEGORIES || card.category == category);
        if !card.hidden {
            visible += 1;
        }
    }
    debug!("Filter {:?} leaves {} cards visible", category, visible);
    visible
}

/// Filter link action: filter, then close the menu if it is open
pub fn select_filter(page: &mut Page, category: &str) -> usize {
    let visible = filter_products(page, category);
    if page.menu_open() == Some(true) {
        page.set_menu_open(false);
    }
    visible
}

/// Flip between light and dark
pub fn toggle_theme(page: &mut Page) {
    let theme = page.theme().toggled();
    page.set_theme(theme);
    debug!("Theme switched to {}", theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{CardSpec, PageLayout};
    use charmane_core::Theme;
    use std::collections::BTreeMap;

    fn spec(name: &str, category: &str) -> CardSpec {
        CardSpec {
            name: name.to_string(),
            price_label: String::new(),
            category: category.to_string(),
            image: String::new(),
            attributes: BTreeMap::new(),
        }
    }

    fn page_with_products() -> Page {
        let mut page = Page::default();
        page.add_static_product(spec("Blusa", "blusas"));
        page.replace_catalog_cards(vec![
            spec("Camisa", "camisas"),
            spec("Calça", "calcas"),
            spec("Camiseta", "camisas"),
        ]);
        page
    }

    fn visible_names(page: &Page) -> Vec<String> {
        page.products()
            .filter(|card| !card.hidden)
            .map(|card| card.name.clone())
            .collect()
    }

    #[test]
    fn test_cart_panel_state_machine() {
        let mut page = Page::default();
        assert_eq!(page.cart_panel_open(), Some(false));

        open_cart(&mut page);
        open_cart(&mut page);
        assert_eq!(page.cart_panel_open(), Some(true));

        close_cart(&mut page);
        close_cart(&mut page);
        assert_eq!(page.cart_panel_open(), Some(false));
    }

    #[test]
    fn test_toggle_menu() {
        let mut page = Page::default();
        toggle_menu(&mut page);
        assert_eq!(page.menu_open(), Some(true));
        toggle_menu(&mut page);
        assert_eq!(page.menu_open(), Some(false));

        let mut bare = Page::new(PageLayout::bare());
        toggle_menu(&mut bare);
        assert_eq!(bare.menu_open(), None);
    }

    #[test]
    fn test_filter_by_category() {
        let mut page = page_with_products();

        assert_eq!(filter_products(&mut page, "camisas"), 2);
        assert_eq!(visible_names(&page), vec!["Camisa", "Camiseta"]);

        assert_eq!(filter_products(&mut page, "blusas"), 1);
        assert_eq!(visible_names(&page), vec!["Blusa"]);

        assert_eq!(filter_products(&mut page, "sapatos"), 0);
    }

    #[test]
    fn test_filter_all_shows_everything() {
        let mut page = page_with_products();
        filter_products(&mut page, "calcas");
        assert_eq!(filter_products(&mut page, ALL_CATEGORIES), 4);
        assert!(page.products().all(|card| !card.hidden));
    }

    #[test]
    fn test_filter_before_catalog_has_no_effect() {
        let mut page = Page::default();
        assert_eq!(filter_products(&mut page, "camisas"), 0);
    }

    #[test]
    fn test_select_filter_closes_menu() {
        let mut page = page_with_products();
        toggle_menu(&mut page);

        select_filter(&mut page, "calcas");
        assert_eq!(page.menu_open(), Some(false));
        assert_eq!(visible_names(&page), vec!["Calça"]);

        // Closed menu stays closed
        select_filter(&mut page, ALL_CATEGORIES);
        assert_eq!(page.menu_open(), Some(false));
    }

    #[test]
    fn test_toggle_theme_updates_indicator() {
        let mut page = Page::default();
        assert_eq!(page.theme(), Theme::Light);
        assert_eq!(page.theme_indicator(), Some("🌙"));

        toggle_theme(&mut page);
        assert_eq!(page.theme(), Theme::Dark);
        assert_eq!(page.theme_indicator(), Some("☀️"));

        toggle_theme(&mut page);
        assert_eq!(page.theme(), Theme::Light);
    }
}
