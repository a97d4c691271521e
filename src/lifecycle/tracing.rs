//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG` (default `info`). The module prefix is hidden (`with_target(false)`); the
//! structured fields carry the context instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: start, catalog load, shutdown
//! - **Cart changes**: product id and resulting quantity, at `info`
//! - **Orders**: placement, delivery and cancellation at `info`; every tick at `debug`
//! - **Commands**: each command with its payload, at `debug`
//!
//! ```bash
//! # Order lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Every command and tick
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a checkout reads:
//!
//! ```text
//! INFO Added to cart product_id=2 quantity=1
//! INFO Added to cart product_id=2 quantity=2
//! INFO Order placed order_id=#AZ-4821 items=1 total=11.0
//! INFO Progress ticker started order_id=#AZ-4821 interval_ms=900
//! INFO Order delivered order_id=#AZ-4821
//! ```
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Later calls are no-ops, so tests may call it freely.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
