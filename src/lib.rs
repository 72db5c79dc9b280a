//! Single-item continuous-review inventory model.
//!
//! Computes EOQ, reorder points and safety stock in closed form, then
//! replays a year day by day under demand and lead-time uncertainty to
//! compare a deterministic reorder point with one protected by safety
//! stock.
//!
//! ```no_run
//! use safety_stock_sim::{compare_scenarios, PolicyInputs, SimulationConfig};
//!
//! let cmp = compare_scenarios(&PolicyInputs::default(), &SimulationConfig::default())?;
//! println!("savings with safety stock: {:.2}", cmp.total_cost_savings());
//! # Ok::<(), safety_stock_sim::InventoryError>(())
//! ```

pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use error::{InventoryError, Result};
pub use model::inputs::PolicyInputs;
pub use model::variates::RandomVariateSource;
pub use simulation::comparison::{compare_scenarios, replicate, ReplicationSummary, ScenarioComparison};
pub use simulation::config::{InitialInventory, SimulationConfig};
pub use simulation::engine::InventorySimulationEngine;
pub use simulation::result::{DayRecord, SimulationResult};
pub use simulation::sweep::{LeadTimeVariabilityPoint, SensitivitySweepRunner, ServiceLevelPoint};
pub use strategy::optimization::{PolicyParameterCalculator, PolicyParameters};
pub use strategy::policy::{ContinuousReviewPolicy, Scenario};
