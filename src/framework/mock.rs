//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client, the request receiver and the snapshot
//! publisher. Then use helpers like [`expect_command`] to assert behavior, or drive the
//! client through the fluent [`MockClient`] API.

use crate::framework::{ActorState, FrameworkError, StateClient, StateRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: ActorState> {
    Command {
        response: Result<T::Reply, FrameworkError>,
    },
    Snapshot {
        response: Result<T::Snapshot, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Storefront>::new(initial_snapshot);
/// mock.expect_command().return_ok(StorefrontReply::ClearCart);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorState> {
    client: StateClient<T>,
    publisher: watch::Sender<T::Snapshot>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorState> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new(initial: T::Snapshot) -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<T>>(100);
        let (publisher, snapshots) = watch::channel(initial);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to answer requests in order
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .pop_front();

                match (request, expectation) {
                    (
                        StateRequest::Command { respond_to, .. },
                        Some(Expectation::Command { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (StateRequest::Snapshot { respond_to }, Some(Expectation::Snapshot { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender, snapshots),
            publisher,
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<T> {
        self.client.clone()
    }

    /// Publishes a snapshot to every subscriber of the mock client.
    pub fn publish(&self, snapshot: T::Snapshot) {
        self.publisher.send_replace(snapshot);
    }

    /// Expects a command.
    pub fn expect_command(&mut self) -> CommandExpectationBuilder<T> {
        CommandExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a snapshot read.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for command expectations.
pub struct CommandExpectationBuilder<T: ActorState> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorState> CommandExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, reply: T::Reply) {
        self.push(Ok(reply));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Reply, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Expectation::Command { response });
    }
}

/// Builder for snapshot expectations.
pub struct SnapshotExpectationBuilder<T: ActorState> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorState> SnapshotExpectationBuilder<T> {
    /// Sets the expectation to return a snapshot.
    pub fn return_ok(self, snapshot: T::Snapshot) {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Expectation::Snapshot {
                response: Ok(snapshot),
            });
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a mock client, a receiver for asserting requests, and the snapshot publisher.
///
/// # Testing Strategy
/// When testing *client* logic we don't want to spin up a full `StateActor`.
/// The client sends messages to a channel we control (`receiver`); the test inspects
/// them, answers through the embedded responder and publishes snapshots at will.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: ActorState>(
    buffer_size: usize,
    initial: T::Snapshot,
) -> (
    StateClient<T>,
    mpsc::Receiver<StateRequest<T>>,
    watch::Sender<T::Snapshot>,
) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (publisher, snapshots) = watch::channel(initial);
    (StateClient::new(sender, snapshots), receiver, publisher)
}

/// Helper to verify that the next message is a Command request
pub async fn expect_command<T: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<(
    T::Command,
    oneshot::Sender<Result<T::Reply, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(StateRequest::Command {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<T: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<oneshot::Sender<Result<T::Snapshot, FrameworkError>>> {
    match receiver.recv().await {
        Some(StateRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::WeakStateClient;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Flag(bool);

    #[derive(Debug)]
    enum FlagCommand {
        Toggle,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Flag error")]
    struct FlagError;

    #[async_trait]
    impl ActorState for Flag {
        type Command = FlagCommand;
        type Reply = bool;
        type Snapshot = bool;
        type Context = ();
        type Error = FlagError;

        fn snapshot(&self) -> bool {
            self.0
        }

        async fn handle_command(
            &mut self,
            _command: FlagCommand,
            _ctx: &(),
            _this: &WeakStateClient<Self>,
        ) -> Result<bool, FlagError> {
            self.0 = !self.0;
            Ok(self.0)
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver, publisher) = create_mock_client::<Flag>(10, false);

        let toggle_task = tokio::spawn(async move { client.send(FlagCommand::Toggle).await });

        let (command, responder) = expect_command(&mut receiver)
            .await
            .expect("Expected Command request");
        assert!(matches!(command, FlagCommand::Toggle));
        responder.send(Ok(true)).unwrap();

        let result = toggle_task.await.unwrap();
        assert!(matches!(result, Ok(true)));

        publisher.send_replace(true);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Flag>::new(false);

        mock.expect_command().return_ok(true);
        mock.expect_snapshot().return_ok(true);
        mock.expect_command().return_err(FrameworkError::ActorDropped);

        let client = mock.client();
        let mut updates = client.subscribe();

        assert!(client.send(FlagCommand::Toggle).await.unwrap());
        assert!(client.snapshot().await.unwrap());
        assert!(matches!(
            client.send(FlagCommand::Toggle).await,
            Err(FrameworkError::ActorDropped)
        ));

        mock.publish(true);
        assert!(updates.has_changed().unwrap());
        assert!(client.current());

        mock.verify();
    }
}
