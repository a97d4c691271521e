//! # Core Actor Framework
//!
//! This module defines the generic building blocks for a single-owner state actor.
//!
//! ## Key Types
//!
//! - [`ActorState`]: The trait that the owned state must implement.
//! - [`StateActor`]: The generic actor that owns the state and runs the command loop.
//! - [`StateClient`]: The generic client for sending commands and reading snapshots.
//! - [`WeakStateClient`]: A non-owning client handed to background tasks.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, ActorDropped).

use async_trait::async_trait;
use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Trait with Hooks, Commands, and Snapshots)
// =============================================================================

/// Trait that any state object must implement to be owned by a [`StateActor`].
///
/// # Architecture Note
/// The actor owns exactly one value of this type. Every mutation goes through
/// [`ActorState::handle_command`], which the actor calls sequentially from its own task,
/// so the state needs no `Mutex` or `RwLock`.
///
/// After every command the actor takes a [`ActorState::snapshot`] and broadcasts it to
/// subscribers when it differs from the last one. Readers therefore only ever see
/// complete values, never a half-applied command.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await. It also defines a `Context` type,
/// injected into every hook at `run()` time ("Late Binding" of dependencies).
///
/// Hooks also receive a [`WeakStateClient`] pointing back at the actor. Background tasks
/// spawned by the state use it to submit follow-up commands without keeping the actor alive.
#[async_trait]
pub trait ActorState: Sized + Send + Sync + 'static {
    /// Enum of the operations the state accepts.
    type Command: Send + Sync + Debug;

    /// The result type returned by commands.
    type Reply: Send + Sync + Debug;

    /// Read-only copy of the observable state.
    type Snapshot: Clone + PartialEq + Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this state.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the snapshot that is published to observers.
    fn snapshot(&self) -> Self::Snapshot;

    // --- Lifecycle Hooks (Async) ---

    /// Called once before the first command is processed.
    /// An error here stops the actor before it accepts any command.
    async fn on_start(
        &mut self,
        _ctx: &Self::Context,
        _this: &WeakStateClient<Self>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle one command.
    async fn handle_command(
        &mut self,
        command: Self::Command,
        ctx: &Self::Context,
        this: &WeakStateClient<Self>,
    ) -> Result<Self::Reply, Self::Error>;

    /// Called after the last client is gone and the command loop has ended.
    async fn on_stop(&mut self, _ctx: &Self::Context) {}
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("State error: {0}")]
    StateError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// - **Command**: mutation (or query) handled by [`ActorState::handle_command`].
/// - **Snapshot**: round-trip read of the current state, ordered after every command
///   sent before it.
#[derive(Debug)]
pub enum StateRequest<T: ActorState> {
    Command {
        command: T::Command,
        respond_to: Response<T::Reply>,
    },
    Snapshot {
        respond_to: Response<T::Snapshot>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a single [`ActorState`].
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state, the receiver end
/// of the command channel and the sender end of the snapshot channel.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StateActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
pub struct StateActor<T: ActorState> {
    receiver: mpsc::Receiver<StateRequest<T>>,
    publisher: watch::Sender<T::Snapshot>,
    this: WeakStateClient<T>,
    state: T,
}

impl<T: ActorState> StateActor<T> {
    /// Creates a new `StateActor` and its associated `StateClient`.
    ///
    /// # Arguments
    ///
    /// * `state` - The initial state. Its snapshot is the first value subscribers see.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(state: T, buffer_size: usize) -> (Self, StateClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, snapshots) = watch::channel(state.snapshot());
        let this = WeakStateClient {
            sender: sender.downgrade(),
            snapshots: snapshots.clone(),
        };
        let actor = Self {
            receiver,
            publisher,
            this,
            state,
        };
        (actor, StateClient::new(sender, snapshots))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every state hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Storefront" instead of "storefront::storefront_actor::Storefront")
        let state_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        if let Err(e) = self.state.on_start(&context, &self.this).await {
            warn!(state_type, error = %e, "on_start failed");
            return;
        }
        self.publish();

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Command {
                    command,
                    respond_to,
                } => {
                    debug!(state_type, ?command, "Command");
                    let result = self
                        .state
                        .handle_command(command, &context, &self.this)
                        .await
                        .map_err(|e| FrameworkError::StateError(Box::new(e)));
                    if let Err(e) = &result {
                        warn!(state_type, error = %e, "Command failed");
                    }
                    if self.publish() {
                        debug!(state_type, "Snapshot published");
                    }
                    let _ = respond_to.send(result);
                }
                StateRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.state.snapshot()));
                }
            }
        }

        self.state.on_stop(&context).await;
        info!(state_type, "Shutdown");
    }

    /// Broadcasts the current snapshot if it changed. Returns whether it did.
    fn publish(&self) -> bool {
        let snapshot = self.state.snapshot();
        self.publisher.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        })
    }
}

// =============================================================================
// 4. THE GENERIC CLIENTS
// =============================================================================

/// A type-safe client for interacting with a `StateActor`.
///
/// Cheap to clone: it holds a command sender and a snapshot receiver.
pub struct StateClient<T: ActorState> {
    sender: mpsc::Sender<StateRequest<T>>,
    snapshots: watch::Receiver<T::Snapshot>,
}

impl<T: ActorState> Clone for StateClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            snapshots: self.snapshots.clone(),
        }
    }
}

impl<T: ActorState> StateClient<T> {
    pub fn new(
        sender: mpsc::Sender<StateRequest<T>>,
        snapshots: watch::Receiver<T::Snapshot>,
    ) -> Self {
        Self { sender, snapshots }
    }

    pub async fn send(&self, command: T::Command) -> Result<T::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Command {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<T::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// The most recently published snapshot, without a round trip to the actor.
    pub fn current(&self) -> T::Snapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver that is notified on every snapshot published after this call.
    pub fn subscribe(&self) -> watch::Receiver<T::Snapshot> {
        let mut snapshots = self.snapshots.clone();
        snapshots.borrow_and_update();
        snapshots
    }

    pub fn downgrade(&self) -> WeakStateClient<T> {
        WeakStateClient {
            sender: self.sender.downgrade(),
            snapshots: self.snapshots.clone(),
        }
    }
}

/// A client that does not keep the actor alive.
///
/// Background tasks hold this instead of a [`StateClient`]; once every strong client
/// is dropped, [`WeakStateClient::upgrade`] returns `None` and the task can exit.
pub struct WeakStateClient<T: ActorState> {
    sender: mpsc::WeakSender<StateRequest<T>>,
    snapshots: watch::Receiver<T::Snapshot>,
}

impl<T: ActorState> Clone for WeakStateClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            snapshots: self.snapshots.clone(),
        }
    }
}

impl<T: ActorState> WeakStateClient<T> {
    pub fn upgrade(&self) -> Option<StateClient<T>> {
        self.sender
            .upgrade()
            .map(|sender| StateClient::new(sender, self.snapshots.clone()))
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
