// src/simulation/config.rs

use crate::error::{PlanningError, Result};
use crate::io::demand::uniform_demand;
use crate::io::labels::Locale;
use crate::model::demand_table::{partition, DemandTable};
use crate::model::plan::PlanningHorizon;
use crate::model::validation::{ensure_width, MAX_COLUMNS};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    pub num_periods: usize,
    /// Only used to seed the editable forecast.
    pub total_demand: u32,
    pub initial_stock: u32,
    pub max_columns: usize,
    pub locale: Locale,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            num_periods: 12,
            total_demand: 120,
            initial_stock: 20,
            max_columns: MAX_COLUMNS,
            locale: Locale::En,
        }
    }
}

impl PlanningConfig {
    /// Reads a JSON config. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Checks the inputs and returns the horizon they describe.
    pub fn validate(&self) -> Result<PlanningHorizon> {
        let horizon = PlanningHorizon::new(self.num_periods)?;
        if self.total_demand == 0 {
            return Err(PlanningError::InvalidTotalDemand(self.total_demand));
        }
        ensure_width(self.max_columns)?;
        Ok(horizon)
    }

    /// The editable grid pre-filled with an even split of `total_demand`.
    pub fn seed_table(&self) -> Result<DemandTable> {
        let horizon = self.validate()?;
        let seed = uniform_demand(horizon.periods(), self.total_demand);
        partition(&seed, self.max_columns)
    }
}
