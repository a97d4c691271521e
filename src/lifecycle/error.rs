use thiserror::Error;

/// Errors raised while starting or stopping the storefront system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}
