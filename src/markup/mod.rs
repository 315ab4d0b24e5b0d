//! Markup extraction: walks a chart element's markup subtree into raw,
//! validated series data plus raw axis-title text.

mod dataseries;
mod document;
pub mod number;
mod table;

pub use document::{ChartMarkup, element_style_target, text_content};

use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::style::StyleTarget;

/// Name of the single implicit series produced by table mode.
pub const TABLE_SERIES_NAME: &str = "dataseries1";

/// Which extraction path the markup drives. Mutually exclusive; a table
/// element wins when both kinds of markup are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    Table,
    DataSeries,
}

/// One named series as found in the markup, before presentation metadata is
/// attached. `target` is the series element's own `id`/`class` (the chart
/// element's for the table-mode implicit series) and drives per-series
/// color resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSeries {
    pub name: String,
    pub points: IndexMap<String, f64>,
    pub target: StyleTarget,
}

/// Raw extraction output: series in document order plus axis-title text
/// found in the markup (`None` where the markup stays silent).
#[derive(Debug, Clone, PartialEq)]
pub struct RawExtraction {
    pub mode: ExtractionMode,
    pub series: Vec<RawSeries>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
}

/// Picks the extraction mode from the markup alone.
pub fn detect_mode(markup: &ChartMarkup<'_>) -> ChartResult<ExtractionMode> {
    if markup.find("table").is_some() {
        Ok(ExtractionMode::Table)
    } else if markup.find("dataseries").is_some() {
        Ok(ExtractionMode::DataSeries)
    } else {
        Err(ChartError::Structure(
            "no table or data series found".to_owned(),
        ))
    }
}

/// Runs the mode-appropriate extraction. Fails fast on the first structural
/// or value violation; no partial dataset is ever produced.
///
/// Explicit `<x-axis-title>`/`<y-axis-title>` elements win over table
/// header cells in both modes.
pub fn extract(markup: &ChartMarkup<'_>) -> ChartResult<RawExtraction> {
    let mode = detect_mode(markup)?;
    let explicit_x = markup.element_text("x-axis-title");
    let explicit_y = markup.element_text("y-axis-title");

    match mode {
        ExtractionMode::Table => {
            let extraction = table::extract_table(markup)?;
            Ok(RawExtraction {
                mode,
                series: vec![RawSeries {
                    name: TABLE_SERIES_NAME.to_owned(),
                    points: extraction.points,
                    target: markup.style_target(),
                }],
                x_title: explicit_x.or(extraction.x_title),
                y_title: explicit_y.or(extraction.y_title),
            })
        }
        ExtractionMode::DataSeries => {
            let series = dataseries::extract_dataseries(markup)?;
            Ok(RawExtraction {
                mode,
                series,
                x_title: explicit_x,
                y_title: explicit_y,
            })
        }
    }
}
