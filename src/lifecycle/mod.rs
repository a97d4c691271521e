//! # Lifecycle
//!
//! Everything around the storefront actor: configuration loading, tracing setup,
//! wiring the actor to its sources and shutting it down.

pub mod config;
pub mod error;
pub mod store_system;
pub mod tracing;

pub use self::config::*;
pub use self::error::*;
pub use self::store_system::*;
pub use self::tracing::setup_tracing;
