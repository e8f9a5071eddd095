//! Charmane CLI - storefront from the terminal
//!
//! Usage:
//!   charmane init                     Write a default charmane.toml
//!   charmane catalog [--category C]   Load and print the product catalog
//!   charmane cart show                Show the persisted cart
//!   charmane cart add <NAME> <PRICE>  Add an item to the cart
//!   charmane cart remove <INDEX>      Remove the item at INDEX
//!   charmane cart clear               Empty the cart
//!   charmane checkout                 Start checkout for the cart
//!   charmane shop                     Interactive session

mod shop;

use anyhow::{bail, Context, Result};
use charmane_api::{CatalogClient, PaymentClient};
use charmane_core::config::CONFIG_FILE_NAME;
use charmane_core::{format_price, CartItem, StoreConfig, ALL_CATEGORIES};
use charmane_store::{CartStore, FileStorage};
use charmane_ui::{CatalogOutcome, EventOutcome, Page, Storefront, UiEvent, CATALOG_UNAVAILABLE};
use clap::{Parser, Subcommand};
use shop::{parse_command, ShopCommand, HELP};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

type HttpStorefront = Storefront<CatalogClient, PaymentClient>;

#[derive(Parser)]
#[command(name = "charmane")]
#[command(author, version, about = "Charmane storefront from the terminal")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file
    #[arg(short, long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Directory to write charmane.toml into
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },

    /// Load and print the product catalog
    Catalog {
        /// Only show this category
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
    },

    /// Inspect or change the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartCommands,
    },

    /// Start checkout for the persisted cart
    Checkout,

    /// Interactive shopping session
    Shop,
}

#[derive(Subcommand)]
enum CartCommands {
    /// Show the cart
    Show,

    /// Add an item
    Add {
        /// Product name
        name: String,

        /// Unit price
        price: String,
    },

    /// Remove the item at a position
    Remove {
        /// Zero-based position
        index: usize,
    },

    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => cmd_init(&path).await,
        Commands::Catalog { category } => cmd_catalog(load_config(&cli.config)?, category).await,
        Commands::Cart { action } => cmd_cart(load_config(&cli.config)?, action).await,
        Commands::Checkout => cmd_checkout(load_config(&cli.config)?).await,
        Commands::Shop => cmd_shop(load_config(&cli.config)?).await,
    }
}

fn load_config(path: &Path) -> Result<StoreConfig> {
    StoreConfig::load_or_default(path).with_context(|| format!("Failed to load {:?}", path))
}

fn build_storefront(config: StoreConfig) -> Result<HttpStorefront> {
    let catalog = CatalogClient::from_config(&config).context("Failed to create catalog client")?;
    let payment = PaymentClient::from_config(&config).context("Failed to create payment client")?;
    debug!("Catalog at {}, payments at {}", catalog.url(), payment.url());
    let store = CartStore::new(FileStorage::new(&config.storage_path));

    Ok(Storefront::new(config, Page::default(), store, catalog, payment))
}

fn print_alerts(app: &mut HttpStorefront) {
    for alert in app.page_mut().take_alerts() {
        println!("! {}", alert);
    }
}

async fn cmd_init(path: &Path) -> Result<()> {
    let written = StoreConfig::write_default(path)
        .with_context(|| format!("Failed to write config into {:?}", path))?;
    info!("Wrote default configuration to {:?}", written);
    println!("{}", written.display());
    Ok(())
}

async fn cmd_catalog(config: StoreConfig, category: String) -> Result<()> {
    let mut app = build_storefront(config)?;

    match app.reload_catalog().await {
        CatalogOutcome::Loaded(_) => {}
        CatalogOutcome::Unavailable => bail!("{}", CATALOG_UNAVAILABLE),
        CatalogOutcome::Skipped => bail!("No product container"),
    }

    app.dispatch(UiEvent::FilterLink(category)).await;
    for card in app.page().products().filter(|card| !card.hidden) {
        println!("{:<30} {:>12}  {}", card.name, card.price_label, card.category);
    }
    let shown = app.page().products().filter(|card| !card.hidden).count();
    info!("{} products shown", shown);
    Ok(())
}

async fn cmd_cart(config: StoreConfig, action: CartCommands) -> Result<()> {
    let mut app = build_storefront(config)?;
    let currency = app.config().currency_symbol.clone();
    let (cart, page) = app.cart_mut();
    cart.render(page);

    match action {
        CartCommands::Show => {}
        CartCommands::Add { name, price } => {
            let item = CartItem::from_attributes(Some(&name), Some(&price))
                .with_context(|| format!("Invalid item: {:?} at {:?}", name, price))?;
            println!("+ {} {}", item.name, format_price(&currency, item.price));
            cart.add(item, page);
        }
        CartCommands::Remove { index } => match cart.remove(index, page) {
            Some(item) => println!("- {} {}", item.name, format_price(&currency, item.price)),
            None => bail!("No cart item at position {}", index),
        },
        CartCommands::Clear => cart.clear(page),
    }

    for row in app.page().cart_rows() {
        println!("{:>3}. {}", row.index, row.label);
    }
    if let Some(total) = app.page().total_label() {
        println!("{}", total);
    }
    Ok(())
}

async fn cmd_checkout(config: StoreConfig) -> Result<()> {
    let mut app = build_storefront(config)?;

    match app.dispatch(UiEvent::Checkout).await {
        EventOutcome::Redirected(session) => {
            info!(
                "Checkout session created at {}",
                session.created_at.to_rfc3339()
            );
            println!("{}", session.url);
            Ok(())
        }
        _ => {
            let alerts = app.page_mut().take_alerts();
            bail!("{}", alerts.join("\n"))
        }
    }
}

async fn cmd_shop(config: StoreConfig) -> Result<()> {
    let mut app = build_storefront(config)?;
    app.start().await;

    println!("{}", HELP);
    println!();
    print!("{}", app.page());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            ShopCommand::Quit => break,
            ShopCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            ShopCommand::Show => {}
            ShopCommand::Reload => {
                app.reload_catalog().await;
            }
            ShopCommand::Event(event) => {
                if let EventOutcome::Redirected(session) = app.dispatch(event).await {
                    println!("Checkout: {}", session.url);
                    return Ok(());
                }
            }
        }

        print_alerts(&mut app);
        print!("{}", app.page());
    }

    Ok(())
}
