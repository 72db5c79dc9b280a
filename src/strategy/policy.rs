// src/strategy/policy.rs

use crate::strategy::optimization::PolicyParameters;
use serde::Serialize;
use std::fmt;

/// Continuous-review (Q, ROP) policy: whenever inventory position is at or
/// below the reorder point and nothing is on order, order Q units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContinuousReviewPolicy {
    pub order_quantity: u32,
    pub reorder_point: i64,
}

impl ContinuousReviewPolicy {
    pub fn new(order_quantity: u32, reorder_point: i64) -> Self {
        Self {
            order_quantity,
            reorder_point,
        }
    }

    /// Single-outstanding-order discipline: never more than one open order.
    pub fn should_order(&self, position: i64, has_open_order: bool) -> bool {
        !has_open_order && position <= self.reorder_point
    }
}

/// The two policies the model sets against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scenario {
    /// A: reorder at mean lead-time demand, no buffer.
    Deterministic,
    /// B: reorder at mean lead-time demand plus safety stock.
    SafetyStock,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::Deterministic, Scenario::SafetyStock];

    /// Both scenarios order the EOQ; they differ only in the reorder point.
    pub fn policy(self, params: &PolicyParameters) -> ContinuousReviewPolicy {
        let reorder_point = match self {
            Scenario::Deterministic => params.reorder_point_deterministic,
            Scenario::SafetyStock => params.reorder_point_stochastic,
        };
        ContinuousReviewPolicy::new(params.eoq, reorder_point)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::Deterministic => write!(f, "A (deterministic ROP)"),
            Scenario::SafetyStock => write!(f, "B (ROP + safety stock)"),
        }
    }
}
