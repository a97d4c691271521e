//! Order id generation.
//!
//! The storefront never invents ids itself; it asks the [`OrderIdGenerator`] from its
//! context. Production uses [`RandomOrderIds`], tests use [`SequentialOrderIds`] or a
//! closure.

use crate::model::OrderId;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of ids for newly placed orders.
pub trait OrderIdGenerator: Send + Sync {
    fn next_id(&self) -> OrderId;
}

impl<F> OrderIdGenerator for F
where
    F: Fn() -> OrderId + Send + Sync,
{
    fn next_id(&self) -> OrderId {
        self()
    }
}

/// `{prefix}NNNN` with a random four-digit number, e.g. `#AZ-4821`.
///
/// Ids are not guaranteed unique; only the latest order is ever tracked.
#[derive(Debug, Clone)]
pub struct RandomOrderIds {
    prefix: String,
}

impl RandomOrderIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl OrderIdGenerator for RandomOrderIds {
    fn next_id(&self) -> OrderId {
        let number = rand::rng().random_range(1000..=9999);
        OrderId(format!("{}{}", self.prefix, number))
    }
}

/// `{prefix}{n}` with a counter, for deterministic ids.
#[derive(Debug)]
pub struct SequentialOrderIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialOrderIds {
    pub fn new(prefix: impl Into<String>, first: u64) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(first),
        }
    }
}

impl OrderIdGenerator for SequentialOrderIds {
    fn next_id(&self) -> OrderId {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        OrderId(format!("{}{}", self.prefix, id))
    }
}
