// src/io/reporting.rs

use crate::error::Result;
use crate::simulation::comparison::ScenarioComparison;
use crate::simulation::result::{DayRecord, SimulationResult};
use crate::strategy::policy::Scenario;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// One row of the A/B cost table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSummaryRow {
    pub scenario: String,
    pub order_quantity: u32,
    pub reorder_point: i64,
    pub orders: u32,
    pub order_cost: f64,
    pub holding_cost: f64,
    pub shortage_cost: f64,
    pub total_cost: f64,
    pub service_level: f64,
    pub cycle_service_level: Option<f64>,
}

impl CostSummaryRow {
    pub fn new(scenario: Scenario, result: &SimulationResult) -> Self {
        Self {
            scenario: scenario.to_string(),
            order_quantity: result.order_quantity,
            reorder_point: result.reorder_point,
            orders: result.order_count,
            order_cost: result.order_cost,
            holding_cost: result.holding_cost,
            shortage_cost: result.shortage_cost,
            total_cost: result.total_cost,
            service_level: result.service_level,
            cycle_service_level: result.cycle_service_level,
        }
    }
}

/// Writes any serialisable rows as CSV, header taken from the field names.
///
/// # Arguments
/// * `file_path` - Destination, e.g. "results/history_a.csv".
/// * `rows` - Records to write, in order.
pub fn write_csv<T: Serialize>(file_path: impl AsRef<Path>, rows: &[T]) -> Result<()> {
    let path = file_path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    info!(rows = rows.len(), path = %path.display(), "csv written");
    Ok(())
}

/// Daily trajectory of one run.
pub fn write_simulation_log(file_path: impl AsRef<Path>, history: &[DayRecord]) -> Result<()> {
    write_csv(file_path, history)
}

/// Cost table with one row per scenario.
pub fn write_cost_summary(file_path: impl AsRef<Path>, comparison: &ScenarioComparison) -> Result<()> {
    let rows: Vec<CostSummaryRow> = Scenario::ALL
        .iter()
        .map(|&scenario| CostSummaryRow::new(scenario, comparison.result(scenario)))
        .collect();
    write_csv(file_path, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::inputs::PolicyInputs;
    use crate::simulation::comparison::compare_scenarios;
    use crate::simulation::config::SimulationConfig;

    #[test]
    fn history_log_has_header_and_one_row_per_day() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let config = SimulationConfig::default().with_horizon(30);
        let cmp = compare_scenarios(&PolicyInputs::default(), &config).unwrap();

        write_simulation_log(&path, &cmp.deterministic.history).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "day,demand,received,on_hand,position,order_placed,in_flight_orders,stockout"
        );
        assert_eq!(lines.count(), 30);
    }

    #[test]
    fn cost_summary_has_both_scenarios() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("costs.csv");
        let config = SimulationConfig::default().with_horizon(60);
        let cmp = compare_scenarios(&PolicyInputs::default(), &config).unwrap();

        write_cost_summary(&path, &cmp).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let scenarios: Vec<String> = rdr
            .records()
            .map(|r| r.unwrap()[0].to_string())
            .collect();
        assert_eq!(scenarios, vec![Scenario::Deterministic.to_string(), Scenario::SafetyStock.to_string()]);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let empty: [DayRecord; 0] = [];
        assert!(write_csv(&path, &empty).is_err());
    }
}
