// src/model/inputs.rs

use crate::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};

/// Draws are stored as `u32`. A normal draw more than this many standard
/// deviations above its mean does not occur in practice, so `mean + 40·σ`
/// must still fit.
const DRAW_SIGMA_BOUND: f64 = 40.0;

/// Caller-supplied description of one inventory scenario.
///
/// Passed explicitly into every calculation and every run; nothing in the
/// crate reads these values from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyInputs {
    /// Mean daily demand (units/day), μd.
    pub demand_mean: f64,
    /// Standard deviation of daily demand, σd.
    pub demand_std_dev: f64,
    /// Mean supplier lead time in days, μL.
    pub lead_time_mean: f64,
    /// Standard deviation of lead time in days, σL.
    pub lead_time_std_dev: f64,
    /// Fixed cost per order placed, S.
    pub order_cost: f64,
    /// Holding cost per unit per year, H.
    pub holding_cost: f64,
    /// Penalty per unit short, charged every day the shortage persists.
    pub shortage_cost: f64,
    /// Target service level α, strictly between 0 and 1.
    pub service_level: f64,
}

impl Default for PolicyInputs {
    fn default() -> Self {
        Self {
            demand_mean: 100.0,
            demand_std_dev: 20.0,
            lead_time_mean: 5.0,
            lead_time_std_dev: 1.5,
            order_cost: 150.0,
            holding_cost: 5.0,
            shortage_cost: 20.0,
            service_level: 0.95,
        }
    }
}

impl PolicyInputs {
    /// Copy with a different target service level.
    pub fn with_service_level(mut self, service_level: f64) -> Self {
        self.service_level = service_level;
        self
    }

    /// Copy with a different lead-time standard deviation.
    pub fn with_lead_time_std_dev(mut self, lead_time_std_dev: f64) -> Self {
        self.lead_time_std_dev = lead_time_std_dev;
        self
    }

    /// Rejects anything the calculator or the engine cannot work with.
    /// Values are never clamped.
    pub fn validate(&self) -> Result<()> {
        positive("demand_mean", self.demand_mean)?;
        non_negative("demand_std_dev", self.demand_std_dev)?;
        positive("lead_time_mean", self.lead_time_mean)?;
        non_negative("lead_time_std_dev", self.lead_time_std_dev)?;
        non_negative("order_cost", self.order_cost)?;
        positive("holding_cost", self.holding_cost)?;
        non_negative("shortage_cost", self.shortage_cost)?;
        open_unit_interval("service_level", self.service_level)?;
        fits_u32_draws("demand_mean", self.demand_mean, self.demand_std_dev)?;
        fits_u32_draws("lead_time_mean", self.lead_time_mean, self.lead_time_std_dev)?;
        Ok(())
    }
}

fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InventoryError::invalid_parameter(
            name,
            format!("must be finite, got {value}"),
        ))
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(InventoryError::invalid_parameter(
            name,
            format!("must be > 0, got {value}"),
        ))
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(InventoryError::invalid_parameter(
            name,
            format!("must be >= 0, got {value}"),
        ))
    }
}

fn fits_u32_draws(name: &'static str, mean: f64, std_dev: f64) -> Result<()> {
    let ceiling = mean + DRAW_SIGMA_BOUND * std_dev;
    if ceiling <= f64::from(u32::MAX) {
        Ok(())
    } else {
        Err(InventoryError::invalid_parameter(
            name,
            format!("draws up to {ceiling:e} would not fit in a u32 unit count"),
        ))
    }
}

pub(crate) fn open_unit_interval(name: &'static str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(InventoryError::invalid_parameter(
            name,
            format!("must lie strictly between 0 and 1, got {value}"),
        ))
    }
}
