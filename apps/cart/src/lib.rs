//! # Rocket Cart Library
//!
//! Core library for the Rocket Shoes cart application.
//! `main.rs` only parses arguments and calls [`run`].
//!
//! ## Module Organization
//! ```text
//! rocket_cart/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartStore (cart + persistence + notifications)
//! │   ├── config.rs   ◄─── AppConfig (TOML + environment)
//! │   └── notify.rs   ◄─── Notification sinks
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── cart.rs     ◄─── Cart commands and rendering
//! └── error.rs        ◄─── CartError, CartOperation, ConfigError
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::cart as cart_commands;
use rocket_catalog::{HttpCatalog, ProductCatalog, StaticCatalog};
use rocket_store::{SqliteStore, StoreConfig};
use state::{AppConfig, CartStore};

/// Runs one CLI command against the persisted cart.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → rocket-cart.toml → ROCKET_* environment                │
/// │                                                                         │
/// │  2. Pick Catalog ─────────────────────────────────────────────────────► │
/// │     • fixture file if configured, else HTTP API                         │
/// │                                                                         │
/// │  3. Open Store ───────────────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, pending migrations applied                  │
/// │                                                                         │
/// │  4. Restore Cart ─────────────────────────────────────────────────────► │
/// │     • CartStore::load reads the stored blob                             │
/// │                                                                         │
/// │  5. Run Command & Print ──────────────────────────────────────────────► │
/// │     • failures already went to the notifier                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load(cli.config)?;

    let catalog: Arc<dyn ProductCatalog> = match &config.catalog.fixture {
        Some(path) => Arc::new(StaticCatalog::from_file(path)?),
        None => Arc::new(HttpCatalog::with_timeout(
            config.catalog.api_url.clone(),
            config.request_timeout(),
        )?),
    };
    info!(source = catalog.source_name(), "Catalog ready");

    let store_config = match config.database_path()? {
        path if path.as_os_str() == ":memory:" => StoreConfig::in_memory(),
        path => StoreConfig::new(path),
    };
    let store = Arc::new(SqliteStore::connect(store_config).await?);

    let cart = CartStore::load(
        catalog,
        store.clone(),
        config.display.notifier.build(),
        config.storage.cart_key.clone(),
    )
    .await?;

    let view = match cli.command {
        Command::Show => cart_commands::get_cart(&cart).await,
        Command::Add { id } => cart_commands::add_to_cart(&cart, id).await,
        Command::Remove { id } => cart_commands::remove_from_cart(&cart, id).await,
        Command::Update { id, amount } => {
            cart_commands::update_cart_item(&cart, id, amount).await
        }
        Command::Clear => cart_commands::clear_cart(&cart).await,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", cart_commands::render(&view, &config));
    }

    store.close().await;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=rocket=trace` - Show trace for rocket crates only
/// - Default: `info,rocket=debug,sqlx=warn`
///
/// Logs go to stderr so stdout stays clean for `--json`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rocket=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
