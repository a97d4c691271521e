//! # Progress Ticker
//!
//! Background task that walks the active order towards delivery.
//!
//! Every `interval` the ticker submits a [`StorefrontCommand::AdvanceOrder`] to the
//! storefront, so each step is applied inside the actor like any other command and
//! observers never see a partial update. The phase cycle lives here; the progress math
//! lives in [`ProgressPhase`].
//!
//! The ticker ends when:
//! - the storefront reports [`TickOutcome::Delivered`],
//! - its [`TickerHandle`] is stopped or dropped (checked at every wait),
//! - or the storefront itself is gone.
//!
//! A [`TickOutcome::Ignored`] reply (the order was replaced or cancelled) does not end it.

use super::{Storefront, StorefrontCommand, StorefrontReply, TickOutcome};
use crate::framework::WeakStateClient;
use crate::model::{OrderId, ProgressPhase};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Owner side of a running ticker. Dropping it cancels the ticker too.
#[derive(Debug)]
pub struct TickerHandle {
    order_id: OrderId,
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Signal the ticker to stop at its next wait.
    pub fn stop(&self) {
        let _ = self.cancel.send(true);
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawn the ticker for the order placed as `order_id` at checkout `placement`.
pub fn spawn_progress_ticker(
    order_id: OrderId,
    placement: u64,
    interval: Duration,
    storefront: WeakStateClient<Storefront>,
) -> TickerHandle {
    let (cancel, mut cancelled) = watch::channel(false);
    let task_order_id = order_id.clone();

    let task = tokio::spawn(async move {
        let order_id = task_order_id;
        info!(%order_id, interval_ms = interval.as_millis() as u64, "Progress ticker started");
        let mut phase = ProgressPhase::default();

        loop {
            let stop = tokio::select! {
                _ = tokio::time::sleep(interval) => *cancelled.borrow(),
                changed = cancelled.changed() => changed.is_err() || *cancelled.borrow(),
            };
            if stop {
                info!(%order_id, "Progress ticker cancelled");
                break;
            }

            let Some(client) = storefront.upgrade() else {
                debug!(%order_id, "Storefront gone, progress ticker exiting");
                break;
            };

            let command = StorefrontCommand::AdvanceOrder {
                order_id: order_id.clone(),
                placement,
                phase,
            };
            match client.send(command).await {
                Ok(StorefrontReply::AdvanceOrder(TickOutcome::Advanced { progress, status })) => {
                    debug!(%order_id, ?phase, progress, %status, "Tick");
                    phase = phase.next();
                }
                Ok(StorefrontReply::AdvanceOrder(TickOutcome::Delivered)) => {
                    info!(%order_id, "Order delivered, progress ticker finished");
                    break;
                }
                Ok(StorefrontReply::AdvanceOrder(TickOutcome::Ignored)) => {
                    debug!(%order_id, "Order no longer tracked, tick ignored");
                }
                Ok(other) => unreachable!("AdvanceOrder must return AdvanceOrder result, got {:?}", other),
                Err(e) => {
                    warn!(%order_id, error = %e, "Tick failed, progress ticker exiting");
                    break;
                }
            }
        }
    });

    TickerHandle {
        order_id,
        cancel,
        task,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::StateActor;
    use crate::model::UserProfile;

    fn storefront() -> (StateActor<Storefront>, crate::framework::StateClient<Storefront>) {
        StateActor::new(
            Storefront::new(UserProfile::new("Test", "test@example.com")),
            4,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_ticker_before_first_tick() {
        let (_actor, client) = storefront();
        let ticker = spawn_progress_ticker(
            OrderId::from("#AZ-1"),
            1,
            Duration::from_secs(60),
            client.downgrade(),
        );
        assert_eq!(ticker.order_id(), &OrderId::from("#AZ-1"));

        ticker.stop();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(ticker.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_exits_when_storefront_is_gone() {
        let (actor, client) = storefront();
        let ticker = spawn_progress_ticker(
            OrderId::from("#AZ-1"),
            1,
            Duration::from_millis(100),
            client.downgrade(),
        );
        drop(actor);
        drop(client);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!ticker.is_finished());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(ticker.is_finished());
    }
}
