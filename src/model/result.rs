// src/model/result.rs

use serde::Serialize;

/// One period of the finished schedule. Serialized with the column names the
/// planning sheets use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    #[serde(rename = "periods")]
    pub period: usize,
    #[serde(rename = "projected_demands")]
    pub demand: u32,
    #[serde(rename = "scheduled_stocks")]
    pub stock: i64,
    #[serde(rename = "MPS")]
    pub production: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub rows: Vec<ResultRow>,
}

/// Parallel series for a line chart, one entry per period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub periods: Vec<usize>,
    pub demand: Vec<u32>,
    pub production: Vec<u32>,
    pub stock: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub total_demand: u64,
    pub total_production: u64,
    pub closing_stock: i64,
    /// Total production minus total demand.
    pub surplus: i64,
    pub min_stock: i64,
    pub first_shortage_period: Option<usize>,
}

impl ResultTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            periods: self.rows.iter().map(|r| r.period).collect(),
            demand: self.rows.iter().map(|r| r.demand).collect(),
            production: self.rows.iter().map(|r| r.production).collect(),
            stock: self.rows.iter().map(|r| r.stock).collect(),
        }
    }

    pub fn summary(&self) -> PlanSummary {
        let total_demand: u64 = self.rows.iter().map(|r| r.demand as u64).sum();
        let total_production: u64 = self.rows.iter().map(|r| r.production as u64).sum();

        PlanSummary {
            total_demand,
            total_production,
            closing_stock: self.rows.last().map(|r| r.stock).unwrap_or(0),
            surplus: total_production as i64 - total_demand as i64,
            min_stock: self.rows.iter().map(|r| r.stock).min().unwrap_or(0),
            first_shortage_period: self.rows.iter().find(|r| r.stock < 0).map(|r| r.period),
        }
    }
}
