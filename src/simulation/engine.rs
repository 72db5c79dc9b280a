// src/simulation/engine.rs

use crate::error::{InventoryError, Result};
use crate::model::inputs::PolicyInputs;
use crate::model::orders::InFlightOrder;
use crate::model::state::SimulationState;
use crate::model::variates::RandomVariateSource;
use crate::simulation::config::SimulationConfig;
use crate::simulation::result::{DayRecord, SimulationResult};
use crate::strategy::policy::ContinuousReviewPolicy;
use tracing::{debug, info, warn};

/// Replays `horizon_days` of operation under a (Q, ROP) policy.
///
/// Every call to [`run`](Self::run) builds its own state and its own random
/// source from the configured seed, so runs are reproducible and can be
/// executed on separate threads.
#[derive(Debug, Clone)]
pub struct InventorySimulationEngine {
    inputs: PolicyInputs,
    config: SimulationConfig,
}

impl InventorySimulationEngine {
    /// Fails fast on invalid inputs or an empty horizon.
    pub fn new(inputs: PolicyInputs, config: SimulationConfig) -> Result<Self> {
        inputs.validate()?;
        if config.horizon_days == 0 {
            return Err(InventoryError::invalid_parameter(
                "horizon_days",
                "must be at least one day",
            ));
        }
        Ok(Self { inputs, config })
    }

    pub fn run(&self, policy: ContinuousReviewPolicy) -> Result<SimulationResult> {
        if policy.order_quantity == 0 {
            return Err(InventoryError::invalid_parameter(
                "order_quantity",
                "must be at least one unit",
            ));
        }

        let variates = RandomVariateSource::new(&self.inputs, self.config.seed)?;
        let initial = self.config.initial_inventory.resolve(&policy);
        let mut run = SimulationRun::new(&self.inputs, self.config.horizon_days, policy, variates, initial);

        for day in 0..self.config.horizon_days {
            run.step(day);
        }

        let result = run.finish();
        if result.is_degenerate() {
            warn!(
                reorder_point = policy.reorder_point,
                "no order placed over {} days", result.horizon_days
            );
        }
        info!(
            q = policy.order_quantity,
            rop = policy.reorder_point,
            seed = self.config.seed,
            orders = result.order_count,
            total_cost = result.total_cost,
            service_level = result.service_level,
            "simulation finished"
        );
        Ok(result)
    }
}

/// Runs one policy for `horizon` days with the given seed.
///
/// # Arguments
/// * `order_quantity` - Units per order (Q).
/// * `reorder_point` - Inventory position at or below which an order is placed.
/// * `horizon` - Days to simulate.
/// * `inputs` - Demand, lead-time and cost description.
/// * `seed` - Seed of the run's random streams.
pub fn run(
    order_quantity: u32,
    reorder_point: i64,
    horizon: usize,
    inputs: &PolicyInputs,
    seed: u64,
) -> Result<SimulationResult> {
    let config = SimulationConfig::default().with_horizon(horizon).with_seed(seed);
    InventorySimulationEngine::new(*inputs, config)?
        .run(ContinuousReviewPolicy::new(order_quantity, reorder_point))
}

/// State of one run in progress.
struct SimulationRun<'a> {
    inputs: &'a PolicyInputs,
    horizon: usize,
    policy: ContinuousReviewPolicy,
    variates: RandomVariateSource,
    state: SimulationState,
    lead_times: Vec<u32>,
    history: Vec<DayRecord>,
}

impl<'a> SimulationRun<'a> {
    fn new(
        inputs: &'a PolicyInputs,
        horizon: usize,
        policy: ContinuousReviewPolicy,
        variates: RandomVariateSource,
        initial_on_hand: i64,
    ) -> Self {
        Self {
            inputs,
            horizon,
            policy,
            variates,
            state: SimulationState::new(initial_on_hand),
            lead_times: Vec::new(),
            history: Vec::with_capacity(horizon),
        }
    }

    fn step(&mut self, day: usize) {
        // 1. Arrivals close the replenishment cycle they belong to.
        let received: u32 = self
            .state
            .receive_arrivals(day)
            .iter()
            .map(|order| {
                debug!(day, quantity = order.quantity, placed = order.placed_day, "order received");
                order.quantity
            })
            .sum();

        // 2. Demand. Stock may go negative.
        let demand = self.variates.next_demand();
        self.state.consume(demand);

        // 3-4. Shortage and holding.
        let stockout = self.state.charge_shortage(self.inputs.shortage_cost);
        self.state.accrue_holding();

        // 5. Reorder check on inventory position.
        let order_placed = self.review(day);

        debug_assert!(self.state.pipeline.len() <= 1, "more than one open order on day {day}");
        self.record_history(day, demand, received, order_placed, stockout);
    }

    fn review(&mut self, day: usize) -> u32 {
        if !self
            .policy
            .should_order(self.state.position(), self.state.has_open_order())
        {
            return 0;
        }

        let lead_time = self.variates.next_lead_time();
        self.lead_times.push(lead_time);
        let order = InFlightOrder::schedule(self.policy.order_quantity, day, lead_time, self.horizon - 1);
        debug!(
            day,
            lead_time,
            due = order.due_day,
            position = self.state.position(),
            "order placed"
        );
        self.state.place_order(order, self.inputs.order_cost);
        order.quantity
    }

    fn record_history(&mut self, day: usize, demand: u32, received: u32, order_placed: u32, stockout: bool) {
        self.history.push(DayRecord {
            day,
            demand,
            received,
            on_hand: self.state.on_hand,
            position: self.state.position(),
            order_placed,
            in_flight_orders: self.state.pipeline.len(),
            stockout,
        });
    }

    fn finish(self) -> SimulationResult {
        let horizon = self.horizon as f64;
        let state = self.state;

        let average_inventory = state.positive_inventory_days as f64 / horizon;
        // H is annual; a one-year horizon makes this the annual holding cost.
        let holding_cost = average_inventory * self.inputs.holding_cost;
        let total_cost = state.order_cost + holding_cost + state.shortage_cost;

        let covered_days = self.history.iter().filter(|r| r.on_hand >= 0).count();
        let service_level = covered_days as f64 / horizon;
        let cycle_service_level = if state.cycles_closed == 0 {
            None
        } else {
            Some(f64::from(state.cycles_without_stockout) / f64::from(state.cycles_closed))
        };

        SimulationResult {
            horizon_days: self.horizon,
            order_quantity: self.policy.order_quantity,
            reorder_point: self.policy.reorder_point,
            inventory_levels: self.history.iter().map(|r| r.on_hand).collect(),
            demands: self.history.iter().map(|r| r.demand).collect(),
            lead_times: self.lead_times,
            history: self.history,
            order_count: state.order_count,
            order_cost: state.order_cost,
            holding_cost,
            shortage_cost: state.shortage_cost,
            total_cost,
            average_inventory,
            service_level,
            cycle_service_level,
            cycles_closed: state.cycles_closed,
            cycles_without_stockout: state.cycles_without_stockout,
            stockout_days: state.stockout_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::config::InitialInventory;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn flat_inputs() -> PolicyInputs {
        PolicyInputs {
            demand_std_dev: 0.0,
            lead_time_std_dev: 0.0,
            ..PolicyInputs::default()
        }
    }

    #[test]
    fn deterministic_run_matches_hand_trace() {
        // demand 100/day, lead time 5, Q = 300, ROP = 100, start at Q, last day 9.
        let result = run(300, 100, 10, &flat_inputs(), 1).unwrap();

        // day 1: order due day 6. day 6: received, reorder due day 11, clamped to 9.
        // day 9: received, reorder due day 14, clamped to 9 itself, never lands.
        assert_eq!(
            result.inventory_levels,
            vec![200, 100, 0, -100, -200, -300, -100, -200, -300, -100]
        );
        assert_eq!(result.demands, vec![100; 10]);
        assert_eq!(result.order_count, 3);
        assert_eq!(result.lead_times, vec![5, 5, 5]);
        assert_eq!(result.history[1].order_placed, 300);
        assert_eq!(result.history[6].received, 300);
        assert_eq!(result.history[6].order_placed, 300);
        assert_eq!(result.history[9].received, 300);
        assert_eq!(result.history[9].in_flight_orders, 1);

        // shortage: (100 + 200 + 300 + 100 + 200 + 300 + 100) * 20
        assert_approx(result.shortage_cost, 1300.0 * 20.0);
        assert_approx(result.order_cost, 450.0);
        assert_approx(result.average_inventory, 30.0);
        assert_approx(result.holding_cost, 150.0);
        assert_approx(result.total_cost, 450.0 + 150.0 + 26_000.0);

        assert_approx(result.service_level, 0.3);
        assert_eq!(result.stockout_days, 7);
        assert_eq!(result.cycles_closed, 2);
        assert_eq!(result.cycles_without_stockout, 0);
        assert_eq!(result.cycle_service_level, Some(0.0));
    }

    #[test]
    fn arrival_due_past_horizon_lands_on_last_day() {
        // placed on day 1 with lead time 5 it would land on day 6; the horizon ends on day 3.
        let result = run(300, 100, 4, &flat_inputs(), 1).unwrap();
        assert_eq!(result.history[3].received, 300);
        assert_eq!(result.inventory_levels[3], 200);
        assert_eq!(result.cycles_closed, 1);
    }

    #[test]
    fn zero_order_run_is_valid() {
        let config = SimulationConfig::default()
            .with_horizon(30)
            .with_initial_inventory(InitialInventory::Units(1_000_000));
        let result = InventorySimulationEngine::new(PolicyInputs::default(), config)
            .unwrap()
            .run(ContinuousReviewPolicy::new(1480, 500))
            .unwrap();

        assert!(result.is_degenerate());
        assert_eq!(result.order_cost, 0.0);
        assert_eq!(result.shortage_cost, 0.0);
        assert_eq!(result.cycle_service_level, None);
        assert_eq!(result.service_level, 1.0);
        assert!(result.lead_times.is_empty());
        assert!(result.holding_cost > 0.0);
    }

    #[test]
    fn high_reorder_point_orders_on_day_zero() {
        let result = run(1480, 10_000, 365, &PolicyInputs::default(), 111).unwrap();
        assert_eq!(result.history[0].order_placed, 1480);
        assert_eq!(result.lead_times.len() as u32, result.order_count);
    }

    #[test]
    fn rejects_bad_run_arguments() {
        let inputs = PolicyInputs::default();
        assert!(run(0, 500, 365, &inputs, 1).unwrap_err().is_invalid_parameter());
        assert!(run(100, 500, 0, &inputs, 1).unwrap_err().is_invalid_parameter());
        let bad = PolicyInputs {
            holding_cost: 0.0,
            ..inputs
        };
        assert!(run(100, 500, 365, &bad, 1).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn comfortable_start_uses_q_plus_rop() {
        let config = SimulationConfig::default()
            .with_horizon(1)
            .with_initial_inventory(InitialInventory::OrderQuantityPlusReorderPoint);
        let result = InventorySimulationEngine::new(flat_inputs(), config)
            .unwrap()
            .run(ContinuousReviewPolicy::new(300, 100))
            .unwrap();
        assert_eq!(result.inventory_levels, vec![300]);
    }
}
