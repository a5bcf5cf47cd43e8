// src/strategy/leveling.rs

use crate::model::plan::{DemandForecast, PlanningHorizon, ProductionPlan};
use crate::strategy::traits::ProductionPolicy;

/// Level scheduling: one constant rate for the whole horizon.
///
/// The rate is the average demand rounded up, so cumulative production never
/// trails cumulative demand when demand is spread evenly. The cost is some
/// overproduction by the last period.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelingPolicy;

impl LevelingPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl ProductionPolicy for LevelingPolicy {
    fn plan(&self, forecast: &DemandForecast, horizon: PlanningHorizon) -> ProductionPlan {
        let rate = compute_rate(forecast.values(), horizon);
        ProductionPlan::constant(rate, horizon)
    }
}

/// `ceil(sum(demand) / num_periods)`.
///
/// Empty demand gives 0, a flat zero plan. A rate too large for `u32` can
/// only come from passing more values than periods, and saturates.
pub fn compute_rate(demand: &[u32], horizon: PlanningHorizon) -> u32 {
    if demand.is_empty() {
        return 0;
    }

    let total: u64 = demand.iter().map(|&d| d as u64).sum();
    let rate = total.div_ceil(horizon.periods() as u64);
    u32::try_from(rate).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizon(n: usize) -> PlanningHorizon {
        PlanningHorizon::new(n).unwrap()
    }

    #[test]
    fn even_demand_levels_exactly() {
        assert_eq!(compute_rate(&[10; 12], horizon(12)), 10);
        assert_eq!(compute_rate(&[1, 1, 1], horizon(3)), 1);
    }

    #[test]
    fn rate_rounds_up() {
        assert_eq!(compute_rate(&[1, 1, 2], horizon(3)), 2);
        assert_eq!(compute_rate(&[5, 15], horizon(2)), 10);
        assert_eq!(compute_rate(&[0, 0, 1], horizon(3)), 1);
    }

    #[test]
    fn empty_demand_is_zero_rate() {
        assert_eq!(compute_rate(&[], horizon(4)), 0);
    }

    #[test]
    fn single_period_rate_is_the_demand() {
        assert_eq!(compute_rate(&[37], horizon(1)), 37);
    }

    #[test]
    fn large_values_do_not_overflow() {
        assert_eq!(compute_rate(&[u32::MAX, u32::MAX], horizon(2)), u32::MAX);
        assert_eq!(compute_rate(&[u32::MAX, u32::MAX], horizon(1)), u32::MAX);
    }

    #[test]
    fn policy_plan_is_constant_over_horizon() {
        let forecast = DemandForecast::resolve(vec![3, 9, 4, 0], horizon(4)).unwrap();
        let plan = LevelingPolicy::new().plan(&forecast, horizon(4));
        assert_eq!(plan.rate(), 4);
        assert_eq!(plan.quantities(), &[4, 4, 4, 4]);
    }
}
