//! # Configuration State
//!
//! Application configuration loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     ROCKET_API_URL, ROCKET_CATALOG_FILE, ROCKET_DB_PATH,                │
//! │     ROCKET_CART_KEY, ROCKET_CURRENCY_SYMBOL, ROCKET_NOTIFIER            │
//! │                                                                         │
//! │  2. TOML Config File (--config PATH, or)                                │
//! │     ~/.config/rocket-cart/rocket-cart.toml (Linux)                      │
//! │     ~/Library/Application Support/com.rocketshoes.rocket-cart/ (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     catalog at http://localhost:3333, key "@RocketShoes:cart"           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # rocket-cart.toml
//! [catalog]
//! api_url = "http://localhost:3333"
//! timeout_secs = 10
//! # fixture = "server.json"   # use a local file instead of the API
//!
//! [storage]
//! cart_key = "@RocketShoes:cart"
//! # db_path = "/tmp/cart.db"  # ":memory:" for a throwaway cart
//!
//! [display]
//! currency_symbol = "$"
//! notifier = "console"        # console | log
//! ```
//!
//! ## Thread Safety
//! Read-only after loading, so no lock.

use directories::ProjectDirs;
use rocket_store::DEFAULT_CART_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::state::notify::NotifierKind;

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "rocket-cart.toml";

/// Database file name inside the platform data directory.
pub const DATABASE_FILE_NAME: &str = "cart.db";

// =============================================================================
// Sections
// =============================================================================

/// Where products come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Base URL of the product API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// JSON fixture to read products from instead of the API.
    #[serde(default)]
    pub fixture: Option<PathBuf>,
}

fn default_api_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
            fixture: None,
        }
    }
}

/// Where the cart is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Key the cart blob is stored under.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,

    /// SQLite database file. Defaults to the platform data directory.
    #[serde(default)]
    pub db_path: Option<PathBuf>,
}

fn default_cart_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            cart_key: default_cart_key(),
            db_path: None,
        }
    }
}

/// How the cart is shown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Currency symbol (for display)
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Where failure notifications go.
    #[serde(default)]
    pub notifier: NotifierKind,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
            notifier: NotifierKind::default(),
        }
    }
}

// =============================================================================
// AppConfig
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document. Missing sections and fields take defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.storage.cart_key.trim().is_empty() {
            return Err(ConfigError::Invalid("cart_key must not be empty".into()));
        }

        let url = &self.catalog.api_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(format!(
                "Catalog URL must start with http:// or https://, got: {}",
                url
            )));
        }

        if self.catalog.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("ROCKET_API_URL") {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.catalog.api_url = url;
        }

        if let Some(path) = var("ROCKET_CATALOG_FILE") {
            debug!(path = %path, "Overriding catalog fixture from environment");
            self.catalog.fixture = Some(PathBuf::from(path));
        }

        if let Some(path) = var("ROCKET_DB_PATH") {
            self.storage.db_path = Some(PathBuf::from(path));
        }

        if let Some(key) = var("ROCKET_CART_KEY") {
            self.storage.cart_key = key;
        }

        if let Some(symbol) = var("ROCKET_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }

        if let Some(kind) = var("ROCKET_NOTIFIER") {
            match kind.parse() {
                Ok(parsed) => self.display.notifier = parsed,
                Err(e) => warn!(error = %e, "Ignoring ROCKET_NOTIFIER"),
            }
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "rocketshoes", "rocket-cart")
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Catalog request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog.timeout_secs)
    }

    /// Resolves the SQLite database path.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.rocketshoes.rocket-cart/cart.db`
    /// - **Windows**: `%APPDATA%\rocketshoes\rocket-cart\data\cart.db`
    /// - **Linux**: `~/.local/share/rocket-cart/cart.db`
    ///
    /// The data directory is created if it doesn't exist.
    pub fn database_path(&self) -> ConfigResult<PathBuf> {
        if let Some(path) = &self.storage.db_path {
            return Ok(path.clone());
        }

        let dirs = Self::project_dirs().ok_or_else(|| {
            ConfigError::Invalid("could not determine app data directory".into())
        })?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join(DATABASE_FILE_NAME))
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use rocket_cart::state::AppConfig;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(17990), "$179.90");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let whole = cents / 100;
        let frac = (cents % 100).abs();

        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.display.currency_symbol,
            whole.abs(),
            frac
        )
    }
}
