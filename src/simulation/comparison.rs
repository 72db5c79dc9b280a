// src/simulation/comparison.rs

//! Scenario A (deterministic reorder point) against scenario B (reorder
//! point plus safety stock), on one seed or averaged over many.

use crate::error::{InventoryError, Result};
use crate::model::inputs::PolicyInputs;
use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::InventorySimulationEngine;
use crate::simulation::result::SimulationResult;
use crate::strategy::optimization::{PolicyParameterCalculator, PolicyParameters};
use crate::strategy::policy::Scenario;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// Both scenarios replayed against the same demand path.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioComparison {
    pub parameters: PolicyParameters,
    pub deterministic: SimulationResult,
    pub safety_stock: SimulationResult,
}

impl ScenarioComparison {
    pub fn result(&self, scenario: Scenario) -> &SimulationResult {
        match scenario {
            Scenario::Deterministic => &self.deterministic,
            Scenario::SafetyStock => &self.safety_stock,
        }
    }

    /// Positive when safety stock is cheaper overall.
    pub fn total_cost_savings(&self) -> f64 {
        self.deterministic.total_cost - self.safety_stock.total_cost
    }

    pub fn shortage_cost_reduction(&self) -> f64 {
        self.deterministic.shortage_cost - self.safety_stock.shortage_cost
    }

    /// Extra order and holding cost paid for the buffer.
    pub fn order_and_holding_premium(&self) -> f64 {
        self.safety_stock.order_and_holding_cost() - self.deterministic.order_and_holding_cost()
    }

    pub fn service_level_gain(&self) -> f64 {
        self.safety_stock.service_level - self.deterministic.service_level
    }
}

/// Computes the policy parameters and runs A and B with the configured seed.
pub fn compare_scenarios(inputs: &PolicyInputs, config: &SimulationConfig) -> Result<ScenarioComparison> {
    let parameters = PolicyParameterCalculator::compute(inputs)?;
    let engine = InventorySimulationEngine::new(*inputs, *config)?;

    let (deterministic, safety_stock) = rayon::join(
        || engine.run(Scenario::Deterministic.policy(&parameters)),
        || engine.run(Scenario::SafetyStock.policy(&parameters)),
    );

    Ok(ScenarioComparison {
        parameters,
        deterministic: deterministic?,
        safety_stock: safety_stock?,
    })
}

/// Mean and standard deviation of one cost series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl CostStats {
    fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

/// Cost distribution of one scenario across seeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioStats {
    pub total_cost: CostStats,
    pub shortage_cost: CostStats,
    pub order_and_holding_cost: CostStats,
    pub service_level: CostStats,
}

impl ScenarioStats {
    fn from_results<'a>(results: impl Iterator<Item = &'a SimulationResult> + Clone) -> Self {
        let collect = |f: fn(&SimulationResult) -> f64| {
            CostStats::from_samples(&results.clone().map(f).collect::<Vec<_>>())
        };
        Self {
            total_cost: collect(|r| r.total_cost),
            shortage_cost: collect(|r| r.shortage_cost),
            order_and_holding_cost: collect(SimulationResult::order_and_holding_cost),
            service_level: collect(|r| r.service_level),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplicationSummary {
    pub seeds: usize,
    pub deterministic: ScenarioStats,
    pub safety_stock: ScenarioStats,
    /// Mean over seeds of (A shortage - B shortage).
    pub mean_shortage_reduction: f64,
    /// Mean over seeds of (B order+holding - A order+holding).
    pub mean_order_and_holding_premium: f64,
}

/// Runs the A/B comparison once per seed, in parallel, and summarises.
pub fn replicate(inputs: &PolicyInputs, config: &SimulationConfig, seeds: &[u64]) -> Result<ReplicationSummary> {
    if seeds.is_empty() {
        return Err(InventoryError::invalid_parameter("seeds", "need at least one seed"));
    }

    let comparisons = seeds
        .par_iter()
        .map(|&seed| compare_scenarios(inputs, &config.with_seed(seed)))
        .collect::<Result<Vec<_>>>()?;

    let n = comparisons.len() as f64;
    let summary = ReplicationSummary {
        seeds: comparisons.len(),
        deterministic: ScenarioStats::from_results(comparisons.iter().map(|c| &c.deterministic)),
        safety_stock: ScenarioStats::from_results(comparisons.iter().map(|c| &c.safety_stock)),
        mean_shortage_reduction: comparisons.iter().map(|c| c.shortage_cost_reduction()).sum::<f64>() / n,
        mean_order_and_holding_premium: comparisons
            .iter()
            .map(|c| c.order_and_holding_premium())
            .sum::<f64>()
            / n,
    };

    info!(
        seeds = summary.seeds,
        shortage_reduction = summary.mean_shortage_reduction,
        premium = summary.mean_order_and_holding_premium,
        "replication done"
    );
    Ok(summary)
}
