// src/model/state.rs

use crate::model::orders::{InFlightOrder, InTransitPipeline};

/// Mutable state of a single simulation run. Owned by that run alone.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Physical stock. Negative means unmet demand this period.
    pub on_hand: i64,
    pub pipeline: InTransitPipeline,

    // Running totals
    pub order_count: u32,
    pub order_cost: f64,
    pub shortage_cost: f64,
    /// Sum over days of max(on_hand, 0), in unit-days.
    pub positive_inventory_days: u64,
    pub stockout_days: usize,

    // Replenishment cycles. A cycle closes when an order is received.
    pub cycles_closed: u32,
    pub cycles_without_stockout: u32,
    stockout_in_cycle: bool,
}

impl SimulationState {
    pub fn new(initial_on_hand: i64) -> Self {
        Self {
            on_hand: initial_on_hand,
            pipeline: InTransitPipeline::new(),
            order_count: 0,
            order_cost: 0.0,
            shortage_cost: 0.0,
            positive_inventory_days: 0,
            stockout_days: 0,
            cycles_closed: 0,
            cycles_without_stockout: 0,
            stockout_in_cycle: false,
        }
    }

    /// On-hand plus everything still in transit.
    pub fn position(&self) -> i64 {
        self.on_hand + self.pipeline.quantity()
    }

    pub fn has_open_order(&self) -> bool {
        !self.pipeline.is_empty()
    }

    /// Books every order due on `day` into stock and closes one cycle per
    /// order. Returns the received orders.
    pub fn receive_arrivals(&mut self, day: usize) -> Vec<InFlightOrder> {
        let arrived = self.pipeline.take_arrivals(day);
        for order in &arrived {
            self.on_hand += i64::from(order.quantity);
            self.close_cycle();
        }
        arrived
    }

    fn close_cycle(&mut self) {
        self.cycles_closed += 1;
        if !self.stockout_in_cycle {
            self.cycles_without_stockout += 1;
        }
        self.stockout_in_cycle = false;
    }

    /// Removes a day's demand from stock. Stock may go negative.
    pub fn consume(&mut self, demand: u32) {
        self.on_hand -= i64::from(demand);
    }

    /// Charges the shortage penalty for any negative balance and flags the
    /// open cycle. Returns true on a stockout day.
    pub fn charge_shortage(&mut self, unit_penalty: f64) -> bool {
        if self.on_hand < 0 {
            self.shortage_cost += self.on_hand.unsigned_abs() as f64 * unit_penalty;
            self.stockout_in_cycle = true;
            self.stockout_days += 1;
            true
        } else {
            false
        }
    }

    /// Adds the day's positive balance to the holding tally. Negative
    /// balances carry no holding charge.
    pub fn accrue_holding(&mut self) {
        if self.on_hand > 0 {
            self.positive_inventory_days += self.on_hand as u64;
        }
    }

    pub fn place_order(&mut self, order: InFlightOrder, fixed_cost: f64) {
        self.pipeline.push(order);
        self.order_count += 1;
        self.order_cost += fixed_cost;
    }
}
