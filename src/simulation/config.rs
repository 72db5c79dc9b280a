// src/simulation/config.rs

use crate::strategy::policy::ContinuousReviewPolicy;
use serde::{Deserialize, Serialize};

/// Stock on hand at the start of day 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitialInventory {
    /// One full order quantity.
    OrderQuantity,
    /// Order quantity plus reorder point, a comfortable start.
    OrderQuantityPlusReorderPoint,
    /// A fixed number of units.
    Units(i64),
}

impl InitialInventory {
    pub fn resolve(&self, policy: &ContinuousReviewPolicy) -> i64 {
        match *self {
            InitialInventory::OrderQuantity => i64::from(policy.order_quantity),
            InitialInventory::OrderQuantityPlusReorderPoint => {
                i64::from(policy.order_quantity) + policy.reorder_point
            }
            InitialInventory::Units(units) => units,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub horizon_days: usize,
    pub seed: u64,
    pub initial_inventory: InitialInventory,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon_days: 365,
            seed: 111,
            initial_inventory: InitialInventory::OrderQuantity,
        }
    }
}

impl SimulationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_horizon(mut self, horizon_days: usize) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    pub fn with_initial_inventory(mut self, initial_inventory: InitialInventory) -> Self {
        self.initial_inventory = initial_inventory;
        self
    }
}
