//! # Commands Module
//!
//! Entry points the CLI (or any other front end) calls.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── cart.rs     ◄─── Cart manipulation and rendering
//! ```
//!
//! Commands never fail: a failed cart operation has already been reported
//! through the notifier, so each command simply returns the cart view.

pub mod cart;
