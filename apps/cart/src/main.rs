//! # Rocket Cart
//!
//! ```bash
//! rocket-cart add 1            # add one unit of product 1
//! rocket-cart update 1 3       # set its amount to 3
//! rocket-cart remove 1
//! rocket-cart show --json
//! ```
//!
//! Setup lives in `lib.rs` so it can be tested without the binary.

use clap::Parser;
use rocket_cart::cli::Cli;

#[tokio::main]
async fn main() {
    rocket_cart::init_tracing();

    let cli = Cli::parse();

    if let Err(e) = rocket_cart::run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}
