// src/model/validation.rs

use crate::error::{PlanningError, Result};

/// Widest segment an editable demand grid may have.
pub const MAX_COLUMNS: usize = 8;

/// Rejects any sequence whose length is not exactly the horizon.
pub fn ensure_length(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(PlanningError::LengthMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Segment widths live in `1..=MAX_COLUMNS`.
pub fn ensure_width(width: usize) -> Result<()> {
    if width == 0 || width > MAX_COLUMNS {
        return Err(PlanningError::InvalidWidth {
            width,
            max: MAX_COLUMNS,
        });
    }
    Ok(())
}

/// Parses one edited grid cell.
///
/// Blank cells and `NaN` are placeholders. Anything else must be a
/// non-negative whole number; a value like `12.0` is accepted since
/// spreadsheet editors tend to write integers that way.
pub fn parse_cell(raw: &str, row: usize, column: usize) -> Result<Option<u32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }

    if let Ok(value) = trimmed.parse::<u32>() {
        return Ok(Some(value));
    }

    let invalid = || PlanningError::InvalidCell {
        row,
        column,
        value: raw.to_string(),
    };

    let float: f64 = trimmed.parse().map_err(|_| invalid())?;
    if float.is_nan() {
        return Ok(None);
    }
    if float < 0.0 || float.fract() != 0.0 || float > u32::MAX as f64 {
        return Err(invalid());
    }
    Ok(Some(float as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_reports_both_sizes() {
        let err = ensure_length("stock trajectory", 4, 3).unwrap_err();
        match err {
            PlanningError::LengthMismatch {
                what,
                expected,
                actual,
            } => {
                assert_eq!(what, "stock trajectory");
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(ensure_length("demand", 5, 5).is_ok());
    }

    #[test]
    fn width_bounds() {
        assert!(ensure_width(0).is_err());
        assert!(ensure_width(1).is_ok());
        assert!(ensure_width(MAX_COLUMNS).is_ok());
        assert!(ensure_width(MAX_COLUMNS + 1).is_err());
    }

    #[test]
    fn cells_parse_blanks_as_placeholders() {
        assert_eq!(parse_cell("", 0, 0).unwrap(), None);
        assert_eq!(parse_cell("  ", 0, 0).unwrap(), None);
        assert_eq!(parse_cell("NaN", 0, 0).unwrap(), None);
        assert_eq!(parse_cell("15", 0, 0).unwrap(), Some(15));
        assert_eq!(parse_cell(" 7 ", 0, 0).unwrap(), Some(7));
        assert_eq!(parse_cell("12.0", 0, 0).unwrap(), Some(12));
    }

    #[test]
    fn cells_reject_negative_and_fractional_values() {
        for raw in ["-3", "2.5", "ten"] {
            match parse_cell(raw, 1, 4) {
                Err(PlanningError::InvalidCell { row, column, value }) => {
                    assert_eq!((row, column), (1, 4));
                    assert_eq!(value, raw);
                }
                other => panic!("expected InvalidCell for {raw:?}, got {other:?}"),
            }
        }
    }
}
