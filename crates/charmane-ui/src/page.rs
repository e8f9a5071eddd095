//! Page model
//!
//! An owned stand-in for the storefront document. Each element the storefront
//! touches is an `Option`: a page built without it behaves like a document
//! missing that node, and every operation on a missing element is a no-op.

use charmane_core::Theme;
use std::collections::BTreeMap;

/// Attribute carrying the product name on an add-to-cart control
pub const ATTR_NAME: &str = "data-nome";
/// Attribute carrying the product price on an add-to-cart control
pub const ATTR_PRICE: &str = "data-preco";

/// Stable identity of an interactive element
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl std::str::FromStr for ElementId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .trim_start_matches('#')
            .parse::<u64>()
            .map(ElementId)
            .map_err(|_| format!("Invalid element id: {}", s))
    }
}

/// Which elements exist on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub cart_panel: bool,
    pub cart_list: bool,
    pub total_label: bool,
    pub product_container: bool,
    pub menu: bool,
    pub theme_toggle: bool,
}

impl PageLayout {
    /// Every element present
    pub fn full() -> Self {
        Self {
            cart_panel: true,
            cart_list: true,
            total_label: true,
            product_container: true,
            menu: true,
            theme_toggle: true,
        }
    }

    /// No elements at all
    pub fn bare() -> Self {
        Self {
            cart_panel: false,
            cart_list: false,
            total_label: false,
            product_container: false,
            menu: false,
            theme_toggle: false,
        }
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::full()
    }
}

/// An "add to cart" control
#[derive(Debug, Clone, PartialEq)]
pub struct AddToCartButton {
    pub id: ElementId,
    pub attributes: BTreeMap<String, String>,
}

impl AddToCartButton {
    pub fn data(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A rendered product card
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ElementId,
    pub name: String,
    pub price_label: String,
    /// Filter attribute
    pub category: String,
    pub image: String,
    pub hidden: bool,
    pub button: AddToCartButton,
}

/// Contents of the remote product container
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ContainerContent {
    #[default]
    Empty,
    Cards(Vec<ProductCard>),
    Message(String),
}

/// One row of the visible cart list
#[derive(Debug, Clone, PartialEq)]
pub struct CartRowNode {
    pub index: usize,
    pub label: String,
    pub remove_button: ElementId,
}

/// Fields a card is built from, before ids are assigned
#[derive(Debug, Clone, PartialEq)]
pub struct CardSpec {
    pub name: String,
    pub price_label: String,
    pub category: String,
    pub image: String,
    pub attributes: BTreeMap<String, String>,
}

/// The storefront document
#[derive(Debug, Clone)]
pub struct Page {
    next_id: u64,
    cart_panel_open: Option<bool>,
    cart_list: Option<Vec<CartRowNode>>,
    total_label: Option<String>,
    static_products: Vec<ProductCard>,
    product_container: Option<ContainerContent>,
    menu_open: Option<bool>,
    theme: Theme,
    theme_indicator: Option<String>,
    alerts: Vec<String>,
    location: Option<String>,
}

impl Page {
    pub fn new(layout: PageLayout) -> Self {
        let theme = Theme::default();
        Self {
            next_id: 1,
            cart_panel_open: layout.cart_panel.then_some(false),
            cart_list: layout.cart_list.then(Vec::new),
            total_label: layout.total_label.then(String::new),
            static_products: Vec::new(),
            product_container: layout.product_container.then(ContainerContent::default),
            menu_open: layout.menu.then_some(false),
            theme,
            theme_indicator: layout.theme_toggle.then(|| theme.indicator().to_string()),
            alerts: Vec::new(),
            location: None,
        }
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    fn build_card(&mut self, spec: CardSpec) -> ProductCard {
        let id = self.allocate_id();
        let button_id = self.allocate_id();
        ProductCard {
            id,
            name: spec.name,
            price_label: spec.price_label,
            category: spec.category,
            image: spec.image,
            hidden: false,
            button: AddToCartButton {
                id: button_id,
                attributes: spec.attributes,
            },
        }
    }

    // --- cart panel ---

    /// `None` when the page has no cart panel
    pub fn cart_panel_open(&self) -> Option<bool> {
        self.cart_panel_open
    }

    pub fn set_cart_panel_open(&mut self, open: bool) {
        if let Some(state) = self.cart_panel_open.as_mut() {
            *state = open;
        }
    }

    // --- cart list and total ---

    pub fn has_cart_list(&self) -> bool {
        self.cart_list.is_some()
    }

    pub fn cart_rows(&self) -> &[CartRowNode] {
        self.cart_list.as_deref().unwrap_or(&[])
    }

    /// Replace every cart row; labels are paired with their index
    pub fn replace_cart_rows(&mut self, labels: Vec<(usize, String)>) {
        if self.cart_list.is_none() {
            return;
        }
        let rows = labels
            .into_iter()
            .map(|(index, label)| CartRowNode {
                index,
                label,
                remove_button: self.allocate_id(),
            })
            .collect();
        self.cart_list = Some(rows);
    }

    /// Index of the cart row whose removal control is `id`
    pub fn remove_target(&self, id: ElementId) -> Option<usize> {
        self.cart_rows()
            .iter()
            .find(|row| row.remove_button == id)
            .map(|row| row.index)
    }

    pub fn total_label(&self) -> Option<&str> {
        self.total_label.as_deref()
    }

    pub fn set_total_label(&mut self, label: impl Into<String>) {
        if let Some(text) = self.total_label.as_mut() {
            *text = label.into();
        }
    }

    // --- products ---

    /// Add a product card that is part of the page itself
    pub fn add_static_product(&mut self, spec: CardSpec) -> ElementId {
        let card = self.build_card(spec);
        let button = card.button.id;
        self.static_products.push(card);
        button
    }

    pub fn has_product_container(&self) -> bool {
        self.product_container.is_some()
    }

    pub fn container_content(&self) -> Option<&ContainerContent> {
        self.product_container.as_ref()
    }

    /// Replace the container contents with freshly built cards
    pub fn replace_catalog_cards(&mut self, specs: Vec<CardSpec>) {
        if self.product_container.is_none() {
            return;
        }
        let cards = specs.into_iter().map(|spec| self.build_card(spec)).collect();
        self.product_container = Some(ContainerContent::Cards(cards));
    }

    /// Replace the container contents with a single message
    pub fn show_catalog_message(&mut self, message: impl Into<String>) {
        if let Some(content) = self.product_container.as_mut() {
            *content = ContainerContent::Message(message.into());
        }
    }

    /// Every product card, static ones first
    pub fn products(&self) -> impl Iterator<Item = &ProductCard> {
        let catalog: &[ProductCard] = match &self.product_container {
            Some(ContainerContent::Cards(cards)) => cards,
            _ => &[],
        };
        self.static_products.iter().chain(catalog.iter())
    }

    pub fn products_mut(&mut self) -> impl Iterator<Item = &mut ProductCard> {
        let catalog: &mut [ProductCard] = match &mut self.product_container {
            Some(ContainerContent::Cards(cards)) => cards,
            _ => &mut [],
        };
        self.static_products.iter_mut().chain(catalog.iter_mut())
    }

    /// Every add-to-cart control currently on the page
    pub fn add_to_cart_buttons(&self) -> impl Iterator<Item = &AddToCartButton> {
        self.products().map(|card| &card.button)
    }

    pub fn find_button(&self, id: ElementId) -> Option<&AddToCartButton> {
        self.add_to_cart_buttons().find(|button| button.id == id)
    }

    // --- menu ---

    /// `None` when the page has no menu
    pub fn menu_open(&self) -> Option<bool> {
        self.menu_open
    }

    pub fn set_menu_open(&mut self, open: bool) {
        if let Some(state) = self.menu_open.as_mut() {
            *state = open;
        }
    }

    // --- theme ---

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn has_theme_toggle(&self) -> bool {
        self.theme_indicator.is_some()
    }

    pub fn theme_indicator(&self) -> Option<&str> {
        self.theme_indicator.as_deref()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Some(indicator) = self.theme_indicator.as_mut() {
            *indicator = theme.indicator().to_string();
        }
    }

    // --- window ---

    /// Show a blocking message to the shopper
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn navigate(&mut self, url: impl Into<String>) {
        self.location = Some(url.into());
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(PageLayout::full())
    }
}
