// src/model/orders.rs

use serde::Serialize;

/// A replenishment order that has been placed but not yet received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InFlightOrder {
    pub quantity: u32,
    pub placed_day: usize,
    pub due_day: usize,
}

impl InFlightOrder {
    /// Schedules an order placed on `placed_day` to land `lead_time` days
    /// later, pulled back to `last_day` if that would run past the horizon.
    pub fn schedule(quantity: u32, placed_day: usize, lead_time: u32, last_day: usize) -> Self {
        let due_day = (placed_day + lead_time as usize).min(last_day);
        Self {
            quantity,
            placed_day,
            due_day,
        }
    }
}

/// Orders in transit between supplier and stock.
#[derive(Debug, Clone, Default)]
pub struct InTransitPipeline {
    orders: Vec<InFlightOrder>,
}

impl InTransitPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, order: InFlightOrder) {
        self.orders.push(order);
    }

    /// Removes and returns every order due on `day`.
    ///
    /// The collection is split into arrived and pending before either half
    /// is touched, so nothing is mutated while it is being scanned.
    pub fn take_arrivals(&mut self, day: usize) -> Vec<InFlightOrder> {
        let (arrived, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.orders)
            .into_iter()
            .partition(|order| order.due_day == day);
        self.orders = pending;
        arrived
    }

    /// Units ordered but not yet received.
    pub fn quantity(&self) -> i64 {
        self.orders.iter().map(|o| i64::from(o.quantity)).sum()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
