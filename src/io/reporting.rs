// src/io/reporting.rs

use crate::error::Result;
use crate::io::labels::{ChartLabels, Locale};
use crate::model::result::{ChartSeries, PlanSummary, ResultTable};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Writes the result table to a CSV file.
///
/// # Arguments
/// * `file_path` - Where to save the file (e.g. "results/mps.csv").
/// * `table` - The assembled schedule.
pub fn write_result_table(file_path: &Path, table: &ResultTable) -> Result<()> {
    let mut wtr = csv::Writer::from_path(file_path)?;

    for row in &table.rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;

    tracing::info!(
        rows = table.len(),
        path = %file_path.display(),
        "exported result table"
    );
    Ok(())
}

#[derive(Debug, Serialize)]
struct ChartDocument<'a> {
    labels: ChartLabels,
    series: &'a ChartSeries,
}

/// Chart series plus localized labels as pretty JSON, ready for a renderer.
pub fn chart_json(table: &ResultTable, locale: Locale) -> Result<String> {
    let series = table.chart_series();
    let document = ChartDocument {
        labels: ChartLabels::for_locale(locale),
        series: &series,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn write_chart_json(file_path: &Path, table: &ResultTable, locale: Locale) -> Result<()> {
    std::fs::write(file_path, chart_json(table, locale)?)?;
    tracing::info!(path = %file_path.display(), "exported chart series");
    Ok(())
}

/// Fixed-width text rendering for the terminal.
pub fn render_table(table: &ResultTable) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>8} {:>18} {:>17} {:>8}",
        "periods", "projected_demands", "scheduled_stocks", "MPS"
    );
    for row in &table.rows {
        let _ = writeln!(
            out,
            "{:>8} {:>18} {:>17} {:>8}",
            row.period, row.demand, row.stock, row.production
        );
    }
    out
}

pub fn render_summary(summary: &PlanSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total demand:     {}", summary.total_demand);
    let _ = writeln!(out, "Total production: {}", summary.total_production);
    let _ = writeln!(out, "Surplus:          {}", summary.surplus);
    let _ = writeln!(out, "Closing stock:    {}", summary.closing_stock);
    let _ = writeln!(out, "Minimum stock:    {}", summary.min_stock);
    match summary.first_shortage_period {
        Some(period) => {
            let _ = writeln!(out, "First shortage:   period {period}");
        }
        None => {
            let _ = writeln!(out, "First shortage:   none");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::result::ResultRow;

    fn sample() -> ResultTable {
        ResultTable {
            rows: vec![
                ResultRow {
                    period: 1,
                    demand: 5,
                    stock: 5,
                    production: 10,
                },
                ResultRow {
                    period: 2,
                    demand: 15,
                    stock: 0,
                    production: 10,
                },
            ],
        }
    }

    #[test]
    fn csv_uses_planning_sheet_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mps.csv");
        write_result_table(&path, &sample()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("periods,projected_demands,scheduled_stocks,MPS")
        );
        assert_eq!(lines.next(), Some("1,5,5,10"));
        assert_eq!(lines.next(), Some("2,15,0,10"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn chart_json_carries_labels_and_series() {
        let json = chart_json(&sample(), Locale::ZhTw).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["labels"]["y_axis"], "數量");
        assert_eq!(value["series"]["production"], serde_json::json!([10, 10]));
        assert_eq!(value["series"]["stock"], serde_json::json!([5, 0]));
    }

    #[test]
    fn rendered_table_has_a_line_per_period() {
        let text = render_table(&sample());
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().nth(2).unwrap().trim_end().ends_with("10"));
    }

    #[test]
    fn summary_mentions_shortage_state() {
        let text = render_summary(&sample().summary());
        assert!(text.contains("First shortage:   none"));
    }
}
