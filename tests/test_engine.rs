//! Integration tests for the simulation engine and the scenario comparison.

use proptest::prelude::*;
use safety_stock_sim::simulation::engine;
use safety_stock_sim::{
    compare_scenarios, replicate, ContinuousReviewPolicy, InventorySimulationEngine,
    PolicyInputs, PolicyParameterCalculator, SimulationConfig,
};

fn reference_engine(seed: u64) -> InventorySimulationEngine {
    InventorySimulationEngine::new(
        PolicyInputs::default(),
        SimulationConfig::default().with_seed(seed),
    )
    .unwrap()
}

#[test]
fn same_seed_gives_identical_results() {
    safety_stock_sim::logging::init_test();
    let policy = ContinuousReviewPolicy::new(1480, 757);
    let a = reference_engine(111).run(policy).unwrap();
    let b = reference_engine(111).run(policy).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.total_cost.to_bits(), b.total_cost.to_bits());
}

#[test]
fn different_seeds_give_different_demand() {
    let policy = ContinuousReviewPolicy::new(1480, 500);
    let a = reference_engine(1).run(policy).unwrap();
    let b = reference_engine(2).run(policy).unwrap();
    assert_ne!(a.demands, b.demands);
}

#[test]
fn reference_year_is_well_formed() {
    let result = engine::run(1480, 500, 365, &PolicyInputs::default(), 111).unwrap();
    assert_eq!(result.inventory_levels.len(), 365);
    assert_eq!(result.demands.len(), 365);
    assert_eq!(result.history.len(), 365);
    assert_eq!(result.lead_times.len(), result.order_count as usize);
    assert!(result.lead_times.iter().all(|&l| l >= 1));
    assert!(result.order_count > 10);

    let expected_total = result.order_cost + result.holding_cost + result.shortage_cost;
    assert!((result.total_cost - expected_total).abs() < 1e-6);
    assert!((result.order_cost - 150.0 * f64::from(result.order_count)).abs() < 1e-6);

    let covered = result.inventory_levels.iter().filter(|&&l| l >= 0).count();
    assert!((result.service_level - covered as f64 / 365.0).abs() < 1e-12);
    assert_eq!(result.stockout_days, 365 - covered);
}

#[test]
fn reorder_point_above_start_orders_on_day_zero() {
    let result = engine::run(1480, 1481, 365, &PolicyInputs::default(), 42).unwrap();
    assert_eq!(result.history[0].order_placed, 1480);
    assert_eq!(result.history[0].in_flight_orders, 1);
}

#[test]
fn invalid_parameters_fail_before_running() {
    let base = PolicyInputs::default();

    let no_holding = PolicyInputs { holding_cost: 0.0, ..base };
    assert!(PolicyParameterCalculator::compute(&no_holding).unwrap_err().is_invalid_parameter());
    assert!(engine::run(1480, 500, 365, &no_holding, 1).unwrap_err().is_invalid_parameter());

    let oversized_demand = PolicyInputs {
        demand_mean: 1e10,
        demand_std_dev: 1e8,
        ..base
    };
    assert!(engine::run(1000, 0, 5, &oversized_demand, 1).unwrap_err().is_invalid_parameter());

    for alpha in [0.0, 1.0] {
        let inputs = base.with_service_level(alpha);
        assert!(PolicyParameterCalculator::compute(&inputs).unwrap_err().is_invalid_parameter());
        assert!(compare_scenarios(&inputs, &SimulationConfig::default())
            .unwrap_err()
            .is_invalid_parameter());
    }
}

#[test]
fn safety_stock_cuts_shortage_across_seeds() {
    let seeds: Vec<u64> = (1..=30).collect();
    let summary = replicate(&PolicyInputs::default(), &SimulationConfig::default(), &seeds).unwrap();

    assert_eq!(summary.seeds, 30);
    assert!(summary.safety_stock.shortage_cost.mean < summary.deterministic.shortage_cost.mean);
    assert!(summary.mean_shortage_reduction > 0.0);
    assert!(summary.mean_order_and_holding_premium >= 0.0);
    assert!(summary.safety_stock.service_level.mean > summary.deterministic.service_level.mean);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_engine_invariants_hold(
        seed in any::<u64>(),
        q in 1u32..3000,
        rop in -200i64..2500,
        horizon in 1usize..400,
        lead_time_std_dev in 0.0f64..4.0,
    ) {
        let inputs = PolicyInputs::default().with_lead_time_std_dev(lead_time_std_dev);
        let result = engine::run(q, rop, horizon, &inputs, seed).unwrap();

        prop_assert_eq!(result.inventory_levels.len(), horizon);
        prop_assert_eq!(result.demands.len(), horizon);
        prop_assert!(result.max_in_flight_orders() <= 1);
        prop_assert!(result.total_cost >= 0.0);
        prop_assert!((0.0..=1.0).contains(&result.service_level));
        prop_assert!(result.cycles_without_stockout <= result.cycles_closed);
        prop_assert!(result.cycles_closed <= result.order_count);
        if let Some(csl) = result.cycle_service_level {
            prop_assert!((0.0..=1.0).contains(&csl));
        } else {
            prop_assert_eq!(result.cycles_closed, 0);
        }

        for pair in result.history.windows(2) {
            let (prev, day) = (&pair[0], &pair[1]);
            let expected = prev.on_hand + i64::from(day.received) - i64::from(day.demand);
            prop_assert_eq!(day.on_hand, expected);
        }
    }

    #[test]
    fn prop_policy_never_changes_demand_path(seed in any::<u64>(), rop_a in 0i64..1500, rop_b in 0i64..1500) {
        let inputs = PolicyInputs::default();
        let a = engine::run(1480, rop_a, 120, &inputs, seed).unwrap();
        let b = engine::run(1480, rop_b, 120, &inputs, seed).unwrap();
        prop_assert_eq!(a.demands, b.demands);
    }
}
