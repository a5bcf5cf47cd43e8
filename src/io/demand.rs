// src/io/demand.rs

use crate::error::{PlanningError, Result};
use crate::io::labels::Locale;
use crate::model::demand_table::{ColumnLabel, DemandSegment, DemandTable};
use crate::model::validation::parse_cell;
use std::path::Path;

/// Initial editable guess: `total_demand / num_periods` in every period.
///
/// The division truncates, so the seed may sum to slightly less than
/// `total_demand`. Users are expected to edit it.
pub fn uniform_demand(num_periods: usize, total_demand: u32) -> Vec<u32> {
    if num_periods == 0 {
        return Vec::new();
    }
    let per_period = (total_demand as u64 / num_periods as u64) as u32;
    vec![per_period; num_periods]
}

/// Writes a demand grid as CSV: a header row and a value row per segment.
/// Placeholder cells are left blank.
pub fn write_demand_grid(file_path: &Path, table: &DemandTable, locale: Locale) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(file_path)?;

    for segment in table.segments() {
        let headers: Vec<String> = segment.columns().iter().map(|c| c.header(locale)).collect();
        wtr.write_record(&headers)?;

        let values: Vec<String> = segment
            .cells()
            .iter()
            .map(|cell| cell.map(|v| v.to_string()).unwrap_or_default())
            .collect();
        wtr.write_record(&values)?;
    }

    wtr.flush()?;
    tracing::info!(
        path = %file_path.display(),
        segments = table.segments().len(),
        "wrote demand grid"
    );
    Ok(())
}

/// Reads a grid written by [`write_demand_grid`] after a user edited it.
pub fn read_demand_grid(file_path: &Path) -> Result<DemandTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(file_path)?;

    let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;
    if records.len() % 2 != 0 {
        return Err(PlanningError::MalformedGrid(format!(
            "expected header/value row pairs, found {} rows",
            records.len()
        )));
    }

    let mut segments = Vec::with_capacity(records.len() / 2);
    for (pair_index, pair) in records.chunks(2).enumerate() {
        let header_row = pair_index * 2;
        let (headers, values) = (&pair[0], &pair[1]);

        let columns = headers
            .iter()
            .map(|h| {
                ColumnLabel::parse(h).ok_or_else(|| {
                    PlanningError::MalformedGrid(format!(
                        "unrecognised column header {h:?} on row {}",
                        header_row + 1
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let cells = values
            .iter()
            .enumerate()
            .map(|(column, raw)| parse_cell(raw, header_row + 2, column + 1))
            .collect::<Result<Vec<_>>>()?;

        segments.push(DemandSegment::new(columns, cells)?);
    }

    tracing::debug!(
        path = %file_path.display(),
        segments = segments.len(),
        "read demand grid"
    );
    Ok(DemandTable::from_segments(segments))
}

/// Parses an inline list such as `5,15,10`.
pub fn parse_demand_list(list: &str) -> Result<Vec<u32>> {
    list.split(',')
        .enumerate()
        .map(|(index, raw)| {
            parse_cell(raw, 1, index + 1)?.ok_or_else(|| PlanningError::InvalidCell {
                row: 1,
                column: index + 1,
                value: raw.to_string(),
            })
        })
        .collect()
}
