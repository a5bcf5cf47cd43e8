// src/model/plan.rs

use crate::error::{PlanningError, Result};
use crate::model::validation::ensure_length;

/// Number of periods every per-period sequence must cover. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanningHorizon(usize);

impl PlanningHorizon {
    pub fn new(num_periods: usize) -> Result<Self> {
        if num_periods == 0 {
            return Err(PlanningError::InvalidHorizon(num_periods));
        }
        Ok(Self(num_periods))
    }

    pub fn periods(&self) -> usize {
        self.0
    }
}

/// The fully resolved demand, one value per period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemandForecast {
    values: Vec<u32>,
}

impl DemandForecast {
    /// Checks a reassembled sequence against the horizon.
    ///
    /// A short sequence means the user cleared cells during editing and the
    /// trailing periods have no demand. That is reported as
    /// `IncompleteForecast` rather than shrinking the horizon.
    pub fn resolve(values: Vec<u32>, horizon: PlanningHorizon) -> Result<Self> {
        let expected = horizon.periods();
        if values.len() < expected {
            return Err(PlanningError::IncompleteForecast {
                expected,
                actual: values.len(),
            });
        }
        ensure_length("demand forecast", expected, values.len())?;
        Ok(Self { values })
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn total(&self) -> u64 {
        self.values.iter().map(|&v| v as u64).sum()
    }
}

/// Constant production quantity repeated across the horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionPlan {
    rate: u32,
    quantities: Vec<u32>,
}

impl ProductionPlan {
    pub fn constant(rate: u32, horizon: PlanningHorizon) -> Self {
        Self {
            rate,
            quantities: vec![rate; horizon.periods()],
        }
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    pub fn quantities(&self) -> &[u32] {
        &self.quantities
    }
}

/// Projected end-of-period stock. Negative entries are shortages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockTrajectory(pub Vec<i64>);

impl StockTrajectory {
    pub fn levels(&self) -> &[i64] {
        &self.0
    }
}
