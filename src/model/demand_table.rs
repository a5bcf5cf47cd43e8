// src/model/demand_table.rs

use crate::error::{PlanningError, Result};
use crate::io::labels::{self, Locale};
use crate::model::validation::ensure_width;

/// Header of one grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLabel {
    /// A real period, 1-based.
    Period(usize),
    /// Padding, numbered from 1 within its segment.
    Placeholder(usize),
}

impl ColumnLabel {
    pub fn header(&self, locale: Locale) -> String {
        match *self {
            ColumnLabel::Period(period) => labels::period_column(locale, period),
            ColumnLabel::Placeholder(index) => labels::placeholder_column(index),
        }
    }

    /// Reads back a header written by [`ColumnLabel::header`] in any locale.
    pub fn parse(header: &str) -> Option<Self> {
        let header = header.trim();
        if let Some(rest) = header.strip_prefix('N') {
            return rest.parse().ok().map(ColumnLabel::Placeholder);
        }
        if let Some(rest) = header.strip_prefix("Week ") {
            return rest.trim().parse().ok().map(ColumnLabel::Period);
        }
        header
            .strip_prefix('第')
            .and_then(|rest| rest.strip_suffix('週'))
            .and_then(|n| n.parse().ok())
            .map(ColumnLabel::Period)
    }
}

/// One editable row of the demand grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemandSegment {
    columns: Vec<ColumnLabel>,
    cells: Vec<Option<u32>>,
}

impl DemandSegment {
    pub fn new(columns: Vec<ColumnLabel>, cells: Vec<Option<u32>>) -> Result<Self> {
        if columns.len() != cells.len() {
            return Err(PlanningError::MalformedGrid(format!(
                "segment has {} headers but {} cells",
                columns.len(),
                cells.len()
            )));
        }
        Ok(Self { columns, cells })
    }

    pub fn columns(&self) -> &[ColumnLabel] {
        &self.columns
    }

    pub fn cells(&self) -> &[Option<u32>] {
        &self.cells
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }
}

/// The demand forecast laid out as fixed-width editable segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DemandTable {
    segments: Vec<DemandSegment>,
}

impl DemandTable {
    pub fn from_segments(segments: Vec<DemandSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[DemandSegment] {
        &self.segments
    }

    /// Replaces one cell. `None` clears it.
    pub fn set_cell(&mut self, segment: usize, column: usize, value: Option<u32>) -> Result<()> {
        let cell = self
            .segments
            .get_mut(segment)
            .and_then(|s| s.cells.get_mut(column))
            .ok_or(PlanningError::CellOutOfRange { segment, column })?;
        *cell = value;
        Ok(())
    }

    /// Flattens the grid back into a demand sequence.
    ///
    /// Segments are read in order, cells left to right, and every
    /// placeholder or cleared cell is skipped.
    pub fn reassemble(&self) -> Vec<u32> {
        self.segments
            .iter()
            .flat_map(|segment| segment.cells.iter())
            .filter_map(|cell| *cell)
            .collect()
    }
}

/// Splits `values` into `ceil(n / width)` segments in their original order.
///
/// When more than one segment results, each is padded with placeholder cells
/// to exactly `width` so every grid has the same shape. A lone segment keeps
/// its natural width.
pub fn partition(values: &[u32], width: usize) -> Result<DemandTable> {
    ensure_width(width)?;

    let chunk_count = values.len().div_ceil(width);
    let pad = chunk_count > 1;

    let segments = values
        .chunks(width)
        .enumerate()
        .map(|(index, chunk)| {
            let first_period = index * width + 1;
            let mut columns: Vec<ColumnLabel> = (first_period..first_period + chunk.len())
                .map(ColumnLabel::Period)
                .collect();
            let mut cells: Vec<Option<u32>> = chunk.iter().copied().map(Some).collect();

            if pad {
                let empty = width - chunk.len();
                columns.extend((1..=empty).map(ColumnLabel::Placeholder));
                cells.extend(std::iter::repeat(None).take(empty));
            }

            DemandSegment { columns, cells }
        })
        .collect();

    Ok(DemandTable { segments })
}
