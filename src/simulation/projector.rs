// src/simulation/projector.rs

use crate::error::Result;
use crate::model::plan::StockTrajectory;
use crate::model::validation::ensure_length;

/// Walks the horizon one period at a time, carrying stock forward.
#[derive(Debug, Clone)]
pub struct StockProjector {
    stock: i64,
    levels: Vec<i64>,
}

impl StockProjector {
    pub fn new(initial_stock: u32, periods: usize) -> Self {
        Self {
            stock: initial_stock as i64,
            levels: Vec::with_capacity(periods),
        }
    }

    /// Advances one period and returns the closing stock.
    ///
    /// Stock is never clamped; a negative level is a shortage.
    pub fn step(&mut self, production: u32, demand: u32) -> i64 {
        self.stock += production as i64 - demand as i64;
        self.levels.push(self.stock);
        self.stock
    }

    pub fn finish(self) -> StockTrajectory {
        StockTrajectory(self.levels)
    }
}

/// `stock[i] = stock[i-1] + production[i] - demand[i]` with
/// `stock[-1] = initial_stock`.
pub fn project(production: &[u32], demand: &[u32], initial_stock: u32) -> Result<StockTrajectory> {
    ensure_length("demand forecast", production.len(), demand.len())?;

    let mut projector = StockProjector::new(initial_stock, production.len());
    for (&made, &used) in production.iter().zip(demand) {
        projector.step(made, used);
    }
    Ok(projector.finish())
}
