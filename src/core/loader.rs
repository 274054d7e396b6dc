use crate::core::Storage;
use crate::domain::model::{Dataset, Listing};
use crate::utils::error::{EtlError, Result};
use std::path::Path;

pub const INPUT_EXTENSION: &str = "csv";
pub const PRICE_COLUMN: &str = "Price";
pub const SQUARE_METERS_COLUMN: &str = "SquareMeters";
pub const LOCATION_COLUMN: &str = "Location";

/// Loads every CSV file in `dir` into one dataset, coercing the two required
/// columns to numbers and dropping rows where either coercion fails.
///
/// A single file lacking a required column just contributes rows that get
/// dropped in cleaning; the column missing from every file is a structural
/// error. Duplicate rows are kept, extra columns are ignored.
pub fn load_dir<S: Storage>(storage: &S, dir: &Path) -> Result<Dataset> {
    let files = storage.list_files(dir, INPUT_EXTENSION)?;
    if files.is_empty() {
        return Err(EtlError::NoInputFiles {
            dir: dir.display().to_string(),
        });
    }

    let mut dataset = Dataset::default();
    let mut saw_price_column = false;
    let mut saw_sqm_column = false;
    let mut dropped = 0usize;

    for file in &files {
        let bytes = storage.read_file(file)?;
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(bytes.as_slice());

        // column names are case-sensitive
        let headers = reader.headers()?.clone();
        let price_idx = headers.iter().position(|h| h == PRICE_COLUMN);
        let sqm_idx = headers.iter().position(|h| h == SQUARE_METERS_COLUMN);
        let location_idx = headers.iter().position(|h| h == LOCATION_COLUMN);
        saw_price_column |= price_idx.is_some();
        saw_sqm_column |= sqm_idx.is_some();

        let mut seen = 0usize;
        let mut kept = 0usize;
        for record in reader.records() {
            let record = record?;
            seen += 1;

            let price = price_idx.and_then(|i| record.get(i)).and_then(coerce_numeric);
            let square_meters = sqm_idx.and_then(|i| record.get(i)).and_then(coerce_numeric);
            let location = location_idx
                .and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);

            match (price, square_meters) {
                // zero-area rows are treated like failed coercion so the
                // derived price/m² stays finite
                (Some(price), Some(square_meters)) if square_meters > 0.0 => {
                    dataset.push(Listing::new(price, square_meters, location));
                    kept += 1;
                }
                _ => dropped += 1,
            }
        }

        tracing::debug!("{}: kept {}/{} rows", file.display(), kept, seen);
    }

    if !saw_price_column {
        return Err(EtlError::MissingColumn { column: PRICE_COLUMN });
    }
    if !saw_sqm_column {
        return Err(EtlError::MissingColumn {
            column: SQUARE_METERS_COLUMN,
        });
    }

    if dropped > 0 {
        tracing::warn!("Dropped {} row(s) during numeric cleaning", dropped);
    }

    Ok(dataset)
}

fn coerce_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion_parses_plain_numbers() {
        assert_eq!(coerce_numeric("250000"), Some(250000.0));
        assert_eq!(coerce_numeric(" 89.5 "), Some(89.5));
        assert_eq!(coerce_numeric("1e5"), Some(100000.0));
    }

    #[test]
    fn coercion_fails_to_missing_instead_of_raising() {
        assert_eq!(coerce_numeric("ask agent"), None);
        assert_eq!(coerce_numeric(""), None);
        assert_eq!(coerce_numeric("   "), None);
        assert_eq!(coerce_numeric("12,500"), None);
    }

    #[test]
    fn coercion_rejects_non_finite_values() {
        assert_eq!(coerce_numeric("NaN"), None);
        assert_eq!(coerce_numeric("inf"), None);
    }
}
