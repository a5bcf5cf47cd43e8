// src/simulation/assembler.rs

use crate::error::Result;
use crate::model::plan::PlanningHorizon;
use crate::model::result::{ResultRow, ResultTable};
use crate::model::validation::ensure_length;

/// Zips the per-period sequences into 1-indexed result rows.
///
/// Every sequence must have exactly `horizon.periods()` entries.
pub fn assemble(
    horizon: PlanningHorizon,
    demand: &[u32],
    stock: &[i64],
    production: &[u32],
) -> Result<ResultTable> {
    let n = horizon.periods();
    ensure_length("demand forecast", n, demand.len())?;
    ensure_length("stock trajectory", n, stock.len())?;
    ensure_length("production plan", n, production.len())?;

    let rows = (0..n)
        .map(|i| ResultRow {
            period: i + 1,
            demand: demand[i],
            stock: stock[i],
            production: production[i],
        })
        .collect();

    Ok(ResultTable { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanningError;

    #[test]
    fn rows_are_one_indexed() {
        let horizon = PlanningHorizon::new(2).unwrap();
        let table = assemble(horizon, &[5, 15], &[5, 0], &[10, 10]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.rows[0],
            ResultRow {
                period: 1,
                demand: 5,
                stock: 5,
                production: 10
            }
        );
        assert_eq!(table.rows[1].period, 2);
        assert_eq!(table.rows[1].stock, 0);
    }

    #[test]
    fn names_the_short_sequence() {
        let horizon = PlanningHorizon::new(3).unwrap();
        match assemble(horizon, &[1, 1, 1], &[0, 0], &[1, 1, 1]) {
            Err(PlanningError::LengthMismatch {
                what,
                expected,
                actual,
            }) => {
                assert_eq!(what, "stock trajectory");
                assert_eq!((expected, actual), (3, 2));
            }
            other => panic!("expected LengthMismatch, got {other:?}"),
        }

        assert!(matches!(
            assemble(horizon, &[1, 1, 1], &[0, 0, 0], &[1, 1, 1, 1]),
            Err(PlanningError::LengthMismatch {
                what: "production plan",
                ..
            })
        ));
    }
}
