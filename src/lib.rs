//! Leveled master production scheduling for a single line.
//!
//! The forecast is edited as fixed-width grid segments, flattened back into
//! per-period demand, leveled to one constant production rate, and projected
//! into a stock trajectory and result table.

pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use error::{PlanningError, Result};
pub use model::demand_table::{partition, DemandTable};
pub use simulation::config::PlanningConfig;
pub use simulation::engine::{PlanOutcome, PlanSnapshot, PlanningEngine};
