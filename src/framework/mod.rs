//! Generic actor framework for single-owner state.
//!
//! This module provides the core building blocks for running one piece of mutable
//! state inside its own task, driven by typed commands and observed through snapshots.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait that the owned state implements
//! - [`StateActor`] - Generic actor that runs the command loop
//! - [`StateClient`] - Type-safe client for commands, snapshot reads and subscriptions
//! - [`WeakStateClient`] - Non-owning client for background tasks
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
