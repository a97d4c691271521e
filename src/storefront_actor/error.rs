//! Error types for the Storefront actor.

use thiserror::Error;

/// Errors that can occur during storefront operations.
///
/// Cart, search and order commands are total over in-memory state, so the only
/// failures are in the plumbing between client and actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for StorefrontError {
    fn from(msg: String) -> Self {
        StorefrontError::ActorCommunicationError(msg)
    }
}
