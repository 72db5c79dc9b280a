use safety_stock_sim::io::reporting;
use safety_stock_sim::logging;
use safety_stock_sim::simulation::sweep::{default_lead_time_deviations, default_service_level_targets};
use safety_stock_sim::{
    compare_scenarios, InventoryError, PolicyInputs, Result, Scenario, SensitivitySweepRunner,
    SimulationConfig,
};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    logging::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // 1. SETUP: usage `safety-stock-sim [seed] [output_dir]`
    let mut args = env::args().skip(1);
    let mut config = SimulationConfig::default();
    if let Some(seed) = args.next() {
        let seed = seed
            .parse()
            .map_err(|_| InventoryError::invalid_parameter("seed", format!("not an integer: {seed}")))?;
        config = config.with_seed(seed);
    }
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| "results".to_string()));
    let inputs = PolicyInputs::default();

    // 2. ANALYTIC PARAMETERS + 3. SCENARIOS A AND B
    let cmp = compare_scenarios(&inputs, &config)?;
    let params = &cmp.parameters;

    println!("{}", "=".repeat(65));
    println!("  Inventory simulation under uncertainty (seed {})", config.seed);
    println!("{}", "=".repeat(65));
    println!("  EOQ (Q*)           = {} units", params.eoq);
    println!("  ROP scenario A     = {} units (no safety stock)", params.reorder_point_deterministic);
    println!("  ROP scenario B     = {} units (with safety stock)", params.reorder_point_stochastic);
    println!("  Safety stock (SS)  = {} units", params.safety_stock);
    println!("  Z ({:.0}%)           = {:.4}", inputs.service_level * 100.0, params.z);

    for scenario in Scenario::ALL {
        let res = cmp.result(scenario);
        println!("\n{}", "-".repeat(65));
        println!("  Scenario {scenario}");
        println!("{}", "-".repeat(65));
        println!("  Orders placed      = {}", res.order_count);
        println!("  Order cost         = {:>12.2}", res.order_cost);
        println!("  Holding cost       = {:>12.2}", res.holding_cost);
        println!("  Shortage cost      = {:>12.2}", res.shortage_cost);
        println!("  Total cost         = {:>12.2}", res.total_cost);
        println!("  Service level      = {:.1}% of days", res.service_level * 100.0);
        match res.cycle_service_level {
            Some(csl) => println!("  Cycle service      = {:.1}% of {} cycles", csl * 100.0, res.cycles_closed),
            None => println!("  Cycle service      = n/a (no order received)"),
        }
        println!("  Mean demand        = {:.1}, mean lead time = {:.2}", res.mean_demand(), res.mean_lead_time());
    }
    println!("\n  Savings with safety stock = {:.2}", cmp.total_cost_savings());
    println!("  Service level gain        = {:+.1} points", cmp.service_level_gain() * 100.0);

    // 4. SENSITIVITY SWEEPS
    let sweeps = SensitivitySweepRunner::new(inputs, config);
    let service_curve = sweeps.sweep_service_level(&default_service_level_targets())?;
    let lead_time_curve = sweeps.sweep_lead_time_variability(&default_lead_time_deviations())?;

    // 5. EXPORT RESULTS
    std::fs::create_dir_all(&output_dir)?;
    reporting::write_simulation_log(output_dir.join("history_a.csv"), &cmp.deterministic.history)?;
    reporting::write_simulation_log(output_dir.join("history_b.csv"), &cmp.safety_stock.history)?;
    reporting::write_cost_summary(output_dir.join("cost_summary.csv"), &cmp)?;
    reporting::write_csv(output_dir.join("service_level_tradeoff.csv"), &service_curve)?;
    reporting::write_csv(output_dir.join("lead_time_sensitivity.csv"), &lead_time_curve)?;

    println!("\nResults written to {}", output_dir.display());
    Ok(())
}
