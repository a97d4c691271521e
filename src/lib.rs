//! # Storefront
//!
//! > **The cart & order lifecycle manager behind a pharmacy storefront.**
//!
//! One actor owns the session: the catalog, the visible product list, the cart, the
//! selected product, the user profile and the single order being delivered. Screens
//! observe it through snapshots and change it through commands.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why a single state actor?
//!
//! All of that state lives in one Tokio task:
//! - **Single writer**: every mutation is a command applied in order, no locks.
//! - **Observable**: each change is published on a `watch` channel as a [`StorefrontSnapshot`](storefront_actor::StorefrontSnapshot).
//! - **Owned lifetime**: dropping the last client shuts the actor and its ticker down.
//!
//! ## 🚀 Core Concepts
//!
//! ### Generics: `StateActor<T>`
//! The command loop is written once in [`framework`] and works for anything that
//! implements [`ActorState`](framework::ActorState).
//!
//! ### The progress ticker
//! After checkout a background task advances the order every tick until it is
//! delivered. Each step is submitted to the actor as a command, so observers never see
//! half an update. See [`storefront_actor::ticker`].
//!
//! ### Mocking
//! The client can be tested without a running actor. See [`framework::mock`].
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Storefront operations cannot fail on their own; the only errors are transport errors,
//! which the client maps into [`StorefrontError`](storefront_actor::StorefrontError).
//!
//! ### 2. Async Context Injection
//! The catalog source, the order id generator and the order settings are injected when
//! the actor is `run()`, not when it is constructed.
//!
//! ### 3. Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Key items**: [`ActorState`](framework::ActorState), [`StateActor`](framework::StateActor), [`StateClient`](framework::StateClient).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! - **Role**: loads [`StoreConfig`](lifecycle::StoreConfig), starts and stops the system.
//! - **Key items**: [`StoreSystem`](lifecycle::StoreSystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 3. The Interface ([`clients`])
//! - **Key items**: [`StorefrontClient`](clients::StorefrontClient).
//!
//! ### 4. The Implementation ([`storefront_actor`], [`model`], [`catalog`])
//! - **Role**: the storefront state, its data types and the product source.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo checkout with info logs
//! RUST_LOG=info cargo run
//!
//! # Faster ticks
//! STOREFRONT__TICK_INTERVAL_MS=100 cargo run
//! ```

pub mod catalog;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod storefront_actor;
