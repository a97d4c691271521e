//! Represents the order currently being delivered.
//!
//! Only one order is tracked at a time. It is created at checkout with
//! [`ActiveOrder::placed`] and then moved forward by the progress ticker through
//! [`ActiveOrder::advance`] until it is [`OrderStatus::Delivered`].
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Progress of a freshly placed order.
pub const INITIAL_PROGRESS: f64 = 0.1;

/// Type-safe identifier for Orders, e.g. `#AZ-4821`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Delivery status, derived from progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Packing,
    #[serde(rename = "On the way")]
    OnTheWay,
    Delivered,
}

impl OrderStatus {
    /// Maps progress onto a status using descending thresholds.
    ///
    /// | progress | status |
    /// |----------|--------|
    /// | ≥ 1.0    | Delivered |
    /// | ≥ 0.75   | On the way |
    /// | ≥ 0.4    | Packing |
    /// | else     | Preparing |
    ///
    /// `Pending` is never derived; it only exists for orders not yet accepted.
    pub fn from_progress(progress: f64) -> Self {
        if progress >= 1.0 {
            OrderStatus::Delivered
        } else if progress >= 0.75 {
            OrderStatus::OnTheWay
        } else if progress >= 0.4 {
            OrderStatus::Packing
        } else {
            OrderStatus::Preparing
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Packing => "Packing",
            OrderStatus::OnTheWay => "On the way",
            OrderStatus::Delivered => "Delivered",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One step of the ticker's three-phase cycle.
///
/// Each phase adds a fixed increment, capped at the phase's ceiling. The cap only
/// limits the step: progress already above it is left where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressPhase {
    /// +0.08, up to 0.4
    #[default]
    Preparation,
    /// +0.12, up to 0.75
    Packing,
    /// +0.05, up to 1.0
    Delivery,
}

impl ProgressPhase {
    pub fn increment(&self) -> f64 {
        match self {
            ProgressPhase::Preparation => 0.08,
            ProgressPhase::Packing => 0.12,
            ProgressPhase::Delivery => 0.05,
        }
    }

    pub fn cap(&self) -> f64 {
        match self {
            ProgressPhase::Preparation => 0.4,
            ProgressPhase::Packing => 0.75,
            ProgressPhase::Delivery => 1.0,
        }
    }

    /// The phase of the following tick.
    pub fn next(&self) -> Self {
        match self {
            ProgressPhase::Preparation => ProgressPhase::Packing,
            ProgressPhase::Packing => ProgressPhase::Delivery,
            ProgressPhase::Delivery => ProgressPhase::Preparation,
        }
    }

    /// Progress after one tick in this phase. Never lower than `progress`, never above 1.
    pub fn apply(&self, progress: f64) -> f64 {
        let stepped = (progress + self.increment()).min(self.cap());
        stepped.max(progress).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveOrder {
    pub order_id: OrderId,
    pub courier_name: String,
    pub courier_vehicle: String,
    pub estimated_minutes: u32,
    pub status: OrderStatus,
    /// Delivery progress in `[0, 1]`.
    pub progress: f64,
    /// Which checkout created this order. Order ids may repeat; placements do not.
    #[serde(default)]
    pub placement: u64,
}

impl ActiveOrder {
    /// Creates an order as it looks right after checkout: `Preparing`, progress 0.1.
    ///
    /// # Arguments
    /// * `order_id` - Identifier from the order id generator
    /// * `courier_name` - Placeholder until a courier is assigned
    /// * `courier_vehicle` - Vehicle shown next to the courier
    /// * `estimated_minutes` - Delivery estimate shown to the customer
    pub fn placed(
        order_id: OrderId,
        courier_name: impl Into<String>,
        courier_vehicle: impl Into<String>,
        estimated_minutes: u32,
    ) -> Self {
        Self {
            order_id,
            courier_name: courier_name.into(),
            courier_vehicle: courier_vehicle.into(),
            estimated_minutes,
            status: OrderStatus::Preparing,
            progress: INITIAL_PROGRESS,
            placement: 0,
        }
    }

    pub fn with_placement(mut self, placement: u64) -> Self {
        self.placement = placement;
        self
    }

    /// Whether a tick tagged with `order_id` and `placement` belongs to this order.
    pub fn is_tracked_by(&self, order_id: &OrderId, placement: u64) -> bool {
        &self.order_id == order_id && self.placement == placement
    }

    /// Moves the order one tick forward. Returns whether anything changed.
    pub fn advance(&mut self, phase: ProgressPhase) -> bool {
        let progress = phase.apply(self.progress);
        let status = OrderStatus::from_progress(progress);
        let changed = progress != self.progress || status != self.status;
        self.progress = progress;
        self.status = status;
        changed
    }

    pub fn is_delivered(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> ActiveOrder {
        ActiveOrder::placed("#AZ-1000".into(), "Finding Courier...", "Motorcycle", 25)
    }

    #[test]
    fn test_placed_order() {
        let order = order();
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.progress, 0.1);
        assert_eq!(order.estimated_minutes, 25);
        assert!(!order.is_delivered());
    }

    #[test]
    fn test_tracked_by_id_and_placement() {
        let first = order().with_placement(1);
        let second = order().with_placement(2);
        let id = OrderId::from("#AZ-1000");

        assert!(first.is_tracked_by(&id, 1));
        assert!(!second.is_tracked_by(&id, 1));
        assert!(!first.is_tracked_by(&OrderId::from("#AZ-1001"), 1));
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(OrderStatus::from_progress(0.0), OrderStatus::Preparing);
        assert_eq!(OrderStatus::from_progress(0.39), OrderStatus::Preparing);
        assert_eq!(OrderStatus::from_progress(0.4), OrderStatus::Packing);
        assert_eq!(OrderStatus::from_progress(0.74), OrderStatus::Packing);
        assert_eq!(OrderStatus::from_progress(0.75), OrderStatus::OnTheWay);
        assert_eq!(OrderStatus::from_progress(0.99), OrderStatus::OnTheWay);
        assert_eq!(OrderStatus::from_progress(1.0), OrderStatus::Delivered);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::Pending.to_string(), "Pending");
        assert_eq!(OrderStatus::OnTheWay.to_string(), "On the way");
        assert_eq!(OrderStatus::Delivered.label(), "Delivered");
    }

    #[test]
    fn test_phases_cycle() {
        let phase = ProgressPhase::default();
        assert_eq!(phase, ProgressPhase::Preparation);
        assert_eq!(phase.next(), ProgressPhase::Packing);
        assert_eq!(phase.next().next(), ProgressPhase::Delivery);
        assert_eq!(phase.next().next().next(), ProgressPhase::Preparation);
    }

    #[test]
    fn test_first_ticks() {
        let mut order = order();
        let mut phase = ProgressPhase::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            order.advance(phase);
            phase = phase.next();
            seen.push(order.progress);
        }

        let expected = [0.18, 0.30, 0.35, 0.4];
        for (got, want) in seen.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
        }
        // Capped exactly at the phase ceiling
        assert_eq!(order.progress, 0.4);
        assert_eq!(order.status, OrderStatus::Packing);
    }

    #[test]
    fn test_cap_never_lowers_progress() {
        assert_eq!(ProgressPhase::Preparation.apply(0.57), 0.57);
        assert_eq!(ProgressPhase::Packing.apply(0.8), 0.8);
        assert_eq!(ProgressPhase::Delivery.apply(1.0), 1.0);
    }

    #[test]
    fn test_converges_to_exactly_one() {
        let mut order = order();
        let mut phase = ProgressPhase::default();
        let mut ticks = 0;

        while !order.is_delivered() {
            let before = order.progress;
            order.advance(phase);
            phase = phase.next();
            assert!(order.progress >= before);
            assert!((0.0..=1.0).contains(&order.progress));
            assert_eq!(order.status, OrderStatus::from_progress(order.progress));
            ticks += 1;
            assert!(ticks < 100, "ticker did not converge");
        }

        assert_eq!(order.progress, 1.0);
        assert_eq!(order.status, OrderStatus::Delivered);

        // Terminal: further ticks change nothing
        for _ in 0..3 {
            assert!(!order.advance(phase));
            phase = phase.next();
        }
    }
}
