// src/strategy/traits.rs

use crate::model::plan::{DemandForecast, PlanningHorizon, ProductionPlan};
use std::fmt::Debug;

/// Decides how much to produce in each period of the horizon.
///
/// Policies only see the resolved forecast; they never read grid state.
pub trait ProductionPolicy: Debug + Send + Sync {
    /// Builds a production plan covering every period of `horizon`.
    ///
    /// # Arguments
    /// * `forecast` - Demand per period, already checked against the horizon.
    /// * `horizon` - Number of periods to plan.
    fn plan(&self, forecast: &DemandForecast, horizon: PlanningHorizon) -> ProductionPlan;
}
