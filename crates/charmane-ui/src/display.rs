//! Plain-text rendering of the page for terminals

use crate::page::{ContainerContent, Page, ProductCard};
use std::fmt;

fn write_card(f: &mut fmt::Formatter<'_>, card: &ProductCard) -> fmt::Result {
    writeln!(
        f,
        "  [{}] {} | {} | {}",
        card.button.id, card.name, card.price_label, card.category
    )
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let menu = match self.menu_open() {
            Some(true) => "menu: open",
            Some(false) => "menu: closed",
            None => "menu: -",
        };
        match self.theme_indicator() {
            Some(indicator) => writeln!(f, "{} | theme: {} {}", menu, self.theme(), indicator)?,
            None => writeln!(f, "{} | theme: {}", menu, self.theme())?,
        }

        writeln!(f, "Produtos")?;
        let mut shown = 0;
        for card in self.products().filter(|card| !card.hidden) {
            write_card(f, card)?;
            shown += 1;
        }
        match self.container_content() {
            Some(ContainerContent::Message(message)) => writeln!(f, "  {}", message)?,
            _ if shown == 0 => writeln!(f, "  (nenhum produto)")?,
            _ => {}
        }

        if self.cart_panel_open() == Some(true) {
            writeln!(f, "Carrinho")?;
            if self.cart_rows().is_empty() {
                writeln!(f, "  (vazio)")?;
            }
            for row in self.cart_rows() {
                writeln!(f, "  {}. {} [x {}]", row.index, row.label, row.remove_button)?;
            }
        }
        if let Some(total) = self.total_label() {
            writeln!(f, "{}", total)?;
        }

        if let Some(location) = self.location() {
            writeln!(f, "-> {}", location)?;
        }
        Ok(())
    }
}
