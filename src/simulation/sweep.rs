// src/simulation/sweep.rs

//! Trade-off curves: the calculator and the engine re-run once per point of
//! a swept input. Points share nothing but the base inputs and the seed.

use crate::error::Result;
use crate::model::inputs::PolicyInputs;
use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::InventorySimulationEngine;
use crate::simulation::result::SimulationResult;
use crate::strategy::optimization::PolicyParameterCalculator;
use crate::strategy::policy::ContinuousReviewPolicy;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// One point of the service-level vs cost curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceLevelPoint {
    pub target_service_level: f64,
    pub safety_stock: i64,
    pub reorder_point: i64,
    /// Time-based service level the run actually reached.
    pub achieved_service_level: f64,
    pub cycle_service_level: Option<f64>,
    pub total_cost: f64,
}

/// One point of the lead-time variability vs safety stock curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadTimeVariabilityPoint {
    pub lead_time_std_dev: f64,
    pub safety_stock: i64,
    pub reorder_point: i64,
    pub total_cost: f64,
}

/// 80% to 99% in steps of one point.
pub fn default_service_level_targets() -> Vec<f64> {
    (80..=99).map(|pct| f64::from(pct) / 100.0).collect()
}

/// 0 to 4 days in quarter-day steps.
pub fn default_lead_time_deviations() -> Vec<f64> {
    (0..=16).map(|i| f64::from(i) * 0.25).collect()
}

#[derive(Debug, Clone)]
pub struct SensitivitySweepRunner {
    inputs: PolicyInputs,
    config: SimulationConfig,
}

impl SensitivitySweepRunner {
    pub fn new(inputs: PolicyInputs, config: SimulationConfig) -> Self {
        Self { inputs, config }
    }

    /// Re-sizes safety stock for each target service level and replays the
    /// year. Safety stock is floored at zero, so targets below 50% reorder
    /// at the deterministic point.
    ///
    /// Neighbouring points are not guaranteed to be monotone: at a fixed
    /// seed the single open order interacts with the draws.
    pub fn sweep_service_level(&self, targets: &[f64]) -> Result<Vec<ServiceLevelPoint>> {
        let points = targets
            .par_iter()
            .map(|&target| -> Result<ServiceLevelPoint> {
                let inputs = self.inputs.with_service_level(target);
                let params = PolicyParameterCalculator::compute(&inputs)?;
                let safety_stock = params.safety_stock.max(0);
                let reorder_point = params.reorder_point_deterministic + safety_stock;
                let result = self.simulate(inputs, params.eoq, reorder_point)?;
                Ok(ServiceLevelPoint {
                    target_service_level: target,
                    safety_stock,
                    reorder_point,
                    achieved_service_level: result.service_level,
                    cycle_service_level: result.cycle_service_level,
                    total_cost: result.total_cost,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!(points = points.len(), "service level sweep done");
        Ok(points)
    }

    /// Varies σL at the base service level. Both the safety stock and the
    /// simulated lead times follow the swept value.
    pub fn sweep_lead_time_variability(
        &self,
        deviations: &[f64],
    ) -> Result<Vec<LeadTimeVariabilityPoint>> {
        let points = deviations
            .par_iter()
            .map(|&sigma| -> Result<LeadTimeVariabilityPoint> {
                let inputs = self.inputs.with_lead_time_std_dev(sigma);
                let params = PolicyParameterCalculator::compute(&inputs)?;
                let result = self.simulate(inputs, params.eoq, params.reorder_point_stochastic)?;
                Ok(LeadTimeVariabilityPoint {
                    lead_time_std_dev: sigma,
                    safety_stock: params.safety_stock,
                    reorder_point: params.reorder_point_stochastic,
                    total_cost: result.total_cost,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!(points = points.len(), "lead time variability sweep done");
        Ok(points)
    }

    fn simulate(&self, inputs: PolicyInputs, q: u32, rop: i64) -> Result<SimulationResult> {
        InventorySimulationEngine::new(inputs, self.config)?.run(ContinuousReviewPolicy::new(q, rop))
    }
}
