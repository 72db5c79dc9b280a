// src/simulation/result.rs

use serde::Serialize;

/// One simulated day, as seen at the end of the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub day: usize,
    pub demand: u32,
    /// Units received at the start of the day.
    pub received: u32,
    pub on_hand: i64,
    /// On-hand plus in transit, after any order placed today.
    pub position: i64,
    /// Quantity ordered today, zero if none.
    pub order_placed: u32,
    pub in_flight_orders: usize,
    pub stockout: bool,
}

/// Everything one run produces. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub horizon_days: usize,
    pub order_quantity: u32,
    pub reorder_point: i64,

    /// End-of-day on-hand inventory, one entry per day.
    pub inventory_levels: Vec<i64>,
    /// Demand drawn each day, one entry per day.
    pub demands: Vec<u32>,
    /// Lead time drawn for each order, in order of placement.
    pub lead_times: Vec<u32>,
    pub history: Vec<DayRecord>,

    pub order_count: u32,
    pub order_cost: f64,
    pub holding_cost: f64,
    pub shortage_cost: f64,
    pub total_cost: f64,
    pub average_inventory: f64,

    /// Fraction of days ending with non-negative stock. This is the
    /// reported service level.
    pub service_level: f64,
    /// Cycles closed without a stockout over cycles closed. `None` when no
    /// order was ever received.
    pub cycle_service_level: Option<f64>,
    pub cycles_closed: u32,
    pub cycles_without_stockout: u32,
    pub stockout_days: usize,
}

impl SimulationResult {
    /// No order was placed over the whole horizon. Still a valid result.
    pub fn is_degenerate(&self) -> bool {
        self.order_count == 0
    }

    pub fn order_and_holding_cost(&self) -> f64 {
        self.order_cost + self.holding_cost
    }

    /// Largest number of simultaneously open orders seen on any day.
    pub fn max_in_flight_orders(&self) -> usize {
        self.history
            .iter()
            .map(|record| record.in_flight_orders)
            .max()
            .unwrap_or(0)
    }

    pub fn mean_demand(&self) -> f64 {
        mean(self.demands.iter().map(|&d| f64::from(d)))
    }

    pub fn mean_lead_time(&self) -> f64 {
        mean(self.lead_times.iter().map(|&l| f64::from(l)))
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.sum::<f64>() / n as f64
}
