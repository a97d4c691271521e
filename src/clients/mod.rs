//! Type-safe wrappers around [`StateClient`](crate::framework::StateClient).

pub mod actor_client;
pub mod storefront_client;

pub use actor_client::*;
pub use storefront_client::*;
