//! Interactive shop session
//!
//! Reads one command per line from stdin and turns it into a storefront
//! event, printing the page after every step.

use charmane_ui::{ElementId, UiEvent};

pub const HELP: &str = "\
commands:
  add <id>        click the add-to-cart control <id>
  remove <index>  remove the cart entry at <index>
  click <id>      click any control
  filter <cat>    show only <cat> (or `all`)
  open | close    open or close the cart panel
  menu            toggle the menu
  theme           toggle light/dark
  checkout        start checkout
  reload          load the catalog again
  show            print the page
  help            print this help
  quit            leave";

/// One parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopCommand {
    Event(UiEvent),
    Reload,
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<ShopCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(ShopCommand::Show);
    };
    let arg = parts.next();

    let command = match verb.to_lowercase().as_str() {
        "add" | "click" => ShopCommand::Event(UiEvent::Click(parse_id(arg)?)),
        "remove" | "rm" => {
            let index = arg
                .ok_or_else(|| "remove needs an index".to_string())?
                .parse::<usize>()
                .map_err(|_| format!("Invalid index: {}", arg.unwrap_or_default()))?;
            ShopCommand::Event(UiEvent::Remove(index))
        }
        "filter" => {
            let category = arg.ok_or_else(|| "filter needs a category".to_string())?;
            ShopCommand::Event(UiEvent::FilterLink(category.to_string()))
        }
        "open" | "cart" => ShopCommand::Event(UiEvent::CartIcon),
        "close" => ShopCommand::Event(UiEvent::CloseCart),
        "menu" => ShopCommand::Event(UiEvent::Hamburger),
        "theme" => ShopCommand::Event(UiEvent::ThemeToggle),
        "checkout" | "pay" => ShopCommand::Event(UiEvent::Checkout),
        "reload" => ShopCommand::Reload,
        "show" => ShopCommand::Show,
        "help" | "?" => ShopCommand::Help,
        "quit" | "exit" | "q" => ShopCommand::Quit,
        other => return Err(format!("Unknown command: {} (try `help`)", other)),
    };
    Ok(command)
}

fn parse_id(arg: Option<&str>) -> Result<ElementId, String> {
    arg.ok_or_else(|| "missing control id".to_string())?
        .parse::<ElementId>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_events() {
        assert_eq!(
            parse_command("add #4").unwrap(),
            ShopCommand::Event(UiEvent::Click("4".parse().unwrap()))
        );
        assert_eq!(
            parse_command("remove 0").unwrap(),
            ShopCommand::Event(UiEvent::Remove(0))
        );
        assert_eq!(
            parse_command("filter camisas").unwrap(),
            ShopCommand::Event(UiEvent::FilterLink("camisas".to_string()))
        );
        assert_eq!(
            parse_command("CHECKOUT").unwrap(),
            ShopCommand::Event(UiEvent::Checkout)
        );
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse_command("").unwrap(), ShopCommand::Show);
        assert_eq!(parse_command("quit").unwrap(), ShopCommand::Quit);
        assert_eq!(parse_command("reload").unwrap(), ShopCommand::Reload);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("add").is_err());
        assert!(parse_command("add x").is_err());
        assert!(parse_command("remove -1").is_err());
        assert!(parse_command("filter").is_err());
        assert!(parse_command("dance").is_err());
    }
}
