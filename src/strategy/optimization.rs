// src/strategy/optimization.rs

//! Closed-form policy parameters for a continuous-review (Q, ROP) policy.
//!
//! EOQ sizes the order, the deterministic reorder point covers mean demand
//! over the mean lead time, and safety stock buffers against both demand
//! and lead-time variability at a target service level.

use crate::error::{InventoryError, Result};
use crate::model::inputs::{open_unit_interval, PolicyInputs};
use serde::{Deserialize, Serialize};

/// Days per year used to annualise daily demand.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Parameters derived from one set of [`PolicyInputs`]. Read-only once
/// computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyParameters {
    /// Economic order quantity, at least one unit.
    pub eoq: u32,
    /// Mean demand over the mean lead time, rounded.
    pub reorder_point_deterministic: i64,
    /// Standard-normal quantile at the target service level.
    pub z: f64,
    /// Standard deviation of demand during lead time.
    pub lead_time_demand_std_dev: f64,
    /// Z times the lead-time demand deviation, rounded. Negative when the
    /// target service level is below 50%.
    pub safety_stock: i64,
    pub reorder_point_stochastic: i64,
}

/// Pure calculator: no randomness, no side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyParameterCalculator;

impl PolicyParameterCalculator {
    /// Computes every policy parameter for `inputs`.
    ///
    /// Fails with `InvalidParameter` before computing anything if the inputs
    /// do not validate (holding cost <= 0, service level outside (0, 1), ...).
    pub fn compute(inputs: &PolicyInputs) -> Result<PolicyParameters> {
        inputs.validate()?;

        let eoq = economic_order_quantity(inputs.demand_mean, inputs.order_cost, inputs.holding_cost)?;
        let z = inverse_normal_cdf(inputs.service_level)?;
        let sigma = lead_time_demand_std_dev(
            inputs.demand_mean,
            inputs.demand_std_dev,
            inputs.lead_time_mean,
            inputs.lead_time_std_dev,
        );
        let safety_stock = rounded_units("safety_stock", z * sigma)?;
        let reorder_point_deterministic =
            rounded_units("reorder_point", inputs.demand_mean * inputs.lead_time_mean)?;
        let reorder_point_stochastic = reorder_point_deterministic
            .checked_add(safety_stock)
            .ok_or_else(|| InventoryError::invalid_parameter("reorder_point", "overflows an i64 unit count"))?;

        Ok(PolicyParameters {
            eoq,
            reorder_point_deterministic,
            z,
            lead_time_demand_std_dev: sigma,
            safety_stock,
            reorder_point_stochastic,
        })
    }
}

/// EOQ = round(sqrt(2 * D * S / H)) with D the annual demand.
///
/// # Arguments
/// * `demand_mean` - Mean daily demand.
/// * `order_cost` - Fixed cost per order (S).
/// * `holding_cost` - Annual holding cost per unit (H), must be > 0.
pub fn economic_order_quantity(demand_mean: f64, order_cost: f64, holding_cost: f64) -> Result<u32> {
    if holding_cost.is_nan() || holding_cost <= 0.0 {
        return Err(InventoryError::invalid_parameter(
            "holding_cost",
            format!("must be > 0, got {holding_cost}"),
        ));
    }
    let annual_demand = demand_mean * DAYS_PER_YEAR;
    let eoq = (2.0 * annual_demand * order_cost / holding_cost).sqrt().round();
    if eoq > f64::from(u32::MAX) {
        return Err(InventoryError::invalid_parameter(
            "order_cost",
            format!("economic order quantity {eoq:e} does not fit in a u32 unit count"),
        ));
    }
    // A free order (S = 0) rounds to zero; a policy still needs a unit.
    Ok(if eoq < 1.0 { 1 } else { eoq as u32 })
}

/// Rounds to whole units, refusing values an i64 cannot hold.
fn rounded_units(name: &'static str, value: f64) -> Result<i64> {
    let units = value.round();
    // i64::MAX as f64 is 2^63, one past the largest i64.
    if units >= i64::MIN as f64 && units < i64::MAX as f64 {
        Ok(units as i64)
    } else {
        Err(InventoryError::invalid_parameter(
            name,
            format!("{units:e} units does not fit in an i64"),
        ))
    }
}

/// Standard deviation of demand during a random lead time:
/// sqrt(μL·σd² + μd²·σL²).
///
/// The first term is daily demand noise accumulated over the mean lead
/// time, the second is lead-time noise scaled by mean demand.
pub fn lead_time_demand_std_dev(
    demand_mean: f64,
    demand_std_dev: f64,
    lead_time_mean: f64,
    lead_time_std_dev: f64,
) -> f64 {
    (lead_time_mean * demand_std_dev.powi(2) + demand_mean.powi(2) * lead_time_std_dev.powi(2)).sqrt()
}

/// Inverse CDF (quantile function) of the standard normal distribution.
///
/// Acklam's rational approximation, relative error below 1.15e-9 over the
/// whole open interval. `p` outside (0, 1) has no finite quantile and is
/// rejected.
pub fn inverse_normal_cdf(p: f64) -> Result<f64> {
    open_unit_interval("service_level", p)?;

    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838,
        -2.549_732_539_343_734,
        4.374_664_141_464_968,
        2.938_163_982_698_783,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996,
        3.754_408_661_907_416,
    ];
    const P_LOW: f64 = 0.024_25;
    const P_HIGH: f64 = 1.0 - P_LOW;

    let tail = |q: f64| {
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    let x = if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    };
    Ok(x)
}
