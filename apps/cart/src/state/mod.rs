//! # State Module
//!
//! Application state for the cart app.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐   │
//! │  │   CartStore      │  │   AppConfig      │  │   Notifier           │   │
//! │  │                  │  │                  │  │                      │   │
//! │  │  Mutex<Cart>     │  │  catalog URL     │  │  ConsoleNotifier     │   │
//! │  │  + catalog       │  │  storage key     │  │  TracingNotifier     │   │
//! │  │  + store         │  │  currency        │  │                      │   │
//! │  │  + notifier      │  │                  │  │                      │   │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                         │
//! │  • CartStore: one async Mutex around the cart, held per operation       │
//! │  • AppConfig: read-only after loading                                   │
//! │  • Notifier: stateless sinks                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod notify;

pub use cart::CartStore;
pub use config::AppConfig;
pub use notify::{ConsoleNotifier, Notifier, NotifierKind, TracingNotifier};
