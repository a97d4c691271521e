use crate::framework::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for state-specific clients to inherit the standard read operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// snapshot reads and subscriptions on top of the generic [`StateClient`].
#[async_trait]
pub trait ActorClient<T: ActorState>: Send + Sync {
    /// The state-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<T>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the current snapshot from the actor, ordered after every earlier command.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// The last published snapshot, without asking the actor.
    fn current(&self) -> T::Snapshot {
        self.inner().current()
    }

    /// Subscribe to snapshots published from now on.
    fn subscribe(&self) -> watch::Receiver<T::Snapshot> {
        self.inner().subscribe()
    }
}
