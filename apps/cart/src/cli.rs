//! Command line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rocket-cart")]
#[command(author, version, about = "Rocket Shoes shopping cart")]
pub struct Cli {
    /// Config file (defaults to rocket-cart.toml in the platform config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the cart as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the cart
    Show,
    /// Add one unit of a product
    Add {
        /// Product id
        id: u64,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: u64,
    },
    /// Set the amount of a product in the cart
    Update {
        /// Product id
        id: u64,
        /// New amount (must be at least 1)
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Empty the cart
    Clear,
}
