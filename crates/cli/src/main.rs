//! Amoneph CLI - drives the cart engine from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Add two jars of honey to the cart
//! amoneph cart add honey --size 500g --price 450 --quantity 2
//!
//! # Show the cart with delivery and grand total
//! amoneph cart show
//!
//! # Change a line's quantity (0 removes the line)
//! amoneph cart set-quantity honey --size 500g --quantity 3
//!
//! # Toggle a product on the wishlist
//! amoneph wishlist toggle hibiscus
//!
//! # Print the WhatsApp order message and deep link
//! amoneph checkout
//! ```
//!
//! # Commands
//!
//! - `cart add|remove|set-quantity|show` - Cart mutations and display
//! - `wishlist toggle|list` - Wishlist membership
//! - `checkout` - Render the order message and `wa.me` deep link
//! - `quote` - Informational bulk-discount quote

#![cfg_attr(not(test), forbid(unsafe_code))]
// Command output is the product here, not a debugging leftover.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "amoneph")]
#[command(author, version, about = "Amoneph Botanicals cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Render the order message and WhatsApp deep link
    Checkout,
    /// Quote the bulk-order discount for a quantity
    Quote {
        /// Number of items the quote is for
        quantity: u32,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id (e.g. honey, peanut-butter, hibiscus, castor-oil)
        product_id: String,

        /// Size or variant label (e.g. 500g, 1L)
        #[arg(short, long)]
        size: String,

        /// Unit price in whole KSh
        #[arg(short, long)]
        price: u64,

        /// Number of units
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        /// Also render the single-product order message
        #[arg(long)]
        buy_now: bool,
    },
    /// Remove a (product, size) line from the cart
    Remove {
        /// Product id
        product_id: String,

        /// Size or variant label
        #[arg(short, long)]
        size: String,
    },
    /// Set a line's quantity; 0 removes the line
    SetQuantity {
        /// Product id
        product_id: String,

        /// Size or variant label
        #[arg(short, long)]
        size: String,

        /// New quantity
        #[arg(short, long)]
        quantity: u32,
    },
    /// Show the cart contents and checkout summary
    Show,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Toggle a product's wishlist membership
    Toggle {
        /// Product id
        product_id: String,
    },
    /// List wishlisted products
    List,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add {
                product_id,
                size,
                price,
                quantity,
                buy_now,
            } => commands::cart::add(&config, &product_id, &size, price, quantity, buy_now)?,
            CartAction::Remove { product_id, size } => {
                commands::cart::remove(&config, &product_id, &size)?;
            }
            CartAction::SetQuantity {
                product_id,
                size,
                quantity,
            } => commands::cart::set_quantity(&config, &product_id, &size, quantity)?,
            CartAction::Show => commands::cart::show(&config)?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Toggle { product_id } => {
                commands::wishlist::toggle(&config, &product_id)?;
            }
            WishlistAction::List => commands::wishlist::list(&config)?,
        },
        Commands::Checkout => commands::checkout::run(&config)?,
        Commands::Quote { quantity } => commands::checkout::quote(quantity),
    }
    Ok(())
}
