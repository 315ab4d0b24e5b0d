//! External data-file input: CSV rows with the same shape as table-mode
//! rows (category label, numeric value). The legacy chart variant fetched
//! such a file by URL; here the host hands over any `Read` source.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;

use crate::core::Series;
use crate::error::{ChartError, ChartResult};
use crate::markup::TABLE_SERIES_NAME;
use crate::markup::number::parse_number;

/// Reads `label,value` rows into the implicit table-mode series, with the
/// same fail-fast validation as table extraction.
pub fn read_series<R: Read>(reader: R, has_headers: bool) -> ChartResult<Series> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(reader);

    let mut points = IndexMap::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.len() < 2 {
            return Err(ChartError::Structure(
                "each csv row must have at least two fields".to_owned(),
            ));
        }
        let label = record[0].trim().to_owned();
        let value_text = record[1].trim();
        if label.is_empty() || value_text.is_empty() {
            return Err(ChartError::Value(
                "each csv field must have a value".to_owned(),
            ));
        }
        let value = parse_number(value_text).ok_or_else(|| {
            ChartError::Value(format!("csv value \"{value_text}\" is not a valid number"))
        })?;
        if points.insert(label.clone(), value).is_some() {
            return Err(ChartError::Value(format!(
                "duplicate category label \"{label}\" in csv input"
            )));
        }
    }
    if points.is_empty() {
        return Err(ChartError::Structure(
            "csv input has no data rows".to_owned(),
        ));
    }

    Ok(Series::new(TABLE_SERIES_NAME, points))
}

/// Convenience wrapper over [`read_series`] for on-disk data files.
pub fn read_series_from_path(path: impl AsRef<Path>, has_headers: bool) -> ChartResult<Series> {
    let file = File::open(path.as_ref())
        .map_err(|e| ChartError::Structure(format!("cannot open csv data file: {e}")))?;
    read_series(file, has_headers)
}
