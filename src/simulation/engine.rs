// src/simulation/engine.rs

use crate::error::Result;
use crate::model::demand_table::DemandTable;
use crate::model::plan::{DemandForecast, PlanningHorizon, ProductionPlan, StockTrajectory};
use crate::model::result::ResultTable;
use crate::simulation::assembler::assemble;
use crate::simulation::config::PlanningConfig;
use crate::simulation::projector::project;
use crate::strategy::leveling::LevelingPolicy;
use crate::strategy::traits::ProductionPolicy;

/// Everything the host knows at the moment it asks for a recompute.
#[derive(Debug, Clone)]
pub struct PlanSnapshot {
    pub config: PlanningConfig,
    /// The grid as the user left it.
    pub demand: DemandTable,
}

#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub forecast: DemandForecast,
    pub production: ProductionPlan,
    pub trajectory: StockTrajectory,
    pub table: ResultTable,
}

/// Runs reassembly, leveling, projection and assembly as one pass.
///
/// Holds no state between calls; every recompute starts from its snapshot.
#[derive(Debug)]
pub struct PlanningEngine {
    policy: Box<dyn ProductionPolicy>,
}

impl Default for PlanningEngine {
    fn default() -> Self {
        Self::new(Box::new(LevelingPolicy::new()))
    }
}

impl PlanningEngine {
    pub fn new(policy: Box<dyn ProductionPolicy>) -> Self {
        Self { policy }
    }

    pub fn recompute(&self, snapshot: &PlanSnapshot) -> Result<PlanOutcome> {
        let horizon = snapshot.config.validate()?;

        let values = snapshot.demand.reassemble();
        tracing::debug!(
            segments = snapshot.demand.segments().len(),
            values = values.len(),
            "reassembled demand grid"
        );

        self.plan_from_forecast(horizon, values, snapshot.config.initial_stock)
    }

    /// Same pipeline starting from a flat demand sequence.
    pub fn plan_from_forecast(
        &self,
        horizon: PlanningHorizon,
        demand: Vec<u32>,
        initial_stock: u32,
    ) -> Result<PlanOutcome> {
        let forecast = DemandForecast::resolve(demand, horizon)?;

        let production = self.policy.plan(&forecast, horizon);
        tracing::debug!(
            total_demand = forecast.total(),
            periods = horizon.periods(),
            rate = production.rate(),
            "leveled production"
        );

        let trajectory = project(production.quantities(), forecast.values(), initial_stock)?;

        let table = assemble(
            horizon,
            forecast.values(),
            trajectory.levels(),
            production.quantities(),
        )?;

        tracing::info!(
            periods = horizon.periods(),
            rate = production.rate(),
            closing_stock = trajectory.levels().last().copied().unwrap_or(initial_stock as i64),
            "plan recomputed"
        );

        Ok(PlanOutcome {
            forecast,
            production,
            trajectory,
            table,
        })
    }
}
