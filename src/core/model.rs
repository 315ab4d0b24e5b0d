use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::style::{DEFAULT_SERIES_COLOR, MIN_DIMENSION};

pub const DEFAULT_X_AXIS_TITLE: &str = "x-Axis";
pub const DEFAULT_Y_AXIS_TITLE: &str = "y-Axis";

/// One named series: an ordered mapping from category label to value.
/// Insertion order is the plotting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub points: IndexMap<String, f64>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, points: IndexMap<String, f64>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Axis titles with the documented defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTitles {
    pub x: String,
    pub y: String,
}

impl AxisTitles {
    #[must_use]
    pub fn resolve(x: Option<String>, y: Option<String>) -> Self {
        Self {
            x: x.unwrap_or_else(|| DEFAULT_X_AXIS_TITLE.to_owned()),
            y: y.unwrap_or_else(|| DEFAULT_Y_AXIS_TITLE.to_owned()),
        }
    }
}

impl Default for AxisTitles {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

/// The normalized chart model: extracted series plus resolved presentation
/// metadata. Built fresh on every activation, immutable once handed to a
/// frame builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub series: Vec<Series>,
    pub axis_titles: AxisTitles,
    /// Series name → CSS color string; missing entries mean the default.
    pub colors: IndexMap<String, String>,
    pub width: f64,
    pub height: f64,
}

impl ChartData {
    /// Fail-fast invariant checks over the assembled model.
    pub fn validate(&self) -> ChartResult<()> {
        if self.series.is_empty() {
            return Err(ChartError::Structure(
                "chart has no data series".to_owned(),
            ));
        }
        for (index, series) in self.series.iter().enumerate() {
            if series.name.is_empty() {
                return Err(ChartError::Structure(
                    "series name must not be empty".to_owned(),
                ));
            }
            if self.series[..index].iter().any(|s| s.name == series.name) {
                return Err(ChartError::Structure(format!(
                    "duplicate series name \"{}\"",
                    series.name
                )));
            }
            if series.is_empty() {
                return Err(ChartError::Structure(format!(
                    "series \"{}\" has no data points",
                    series.name
                )));
            }
            for (label, value) in &series.points {
                if label.is_empty() {
                    return Err(ChartError::Value(format!(
                        "series \"{}\" has an empty category label",
                        series.name
                    )));
                }
                if !value.is_finite() {
                    return Err(ChartError::Value(format!(
                        "series \"{}\" value for \"{label}\" is not finite",
                        series.name
                    )));
                }
            }
        }
        for (axis, extent) in [("width", self.width), ("height", self.height)] {
            if !extent.is_finite() || extent <= MIN_DIMENSION {
                return Err(ChartError::Value(format!(
                    "chart {axis} must exceed {MIN_DIMENSION}, got {extent}"
                )));
            }
        }
        Ok(())
    }

    /// Resolved color for a series, falling back to the default.
    #[must_use]
    pub fn color_for(&self, series_name: &str) -> &str {
        self.colors
            .get(series_name)
            .map_or(DEFAULT_SERIES_COLOR, String::as_str)
    }

    /// Union of category labels across all series, in first-appearance
    /// order. This is the x-axis domain.
    #[must_use]
    pub fn category_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for series in &self.series {
            for label in series.points.keys() {
                if !labels.contains(&label.as_str()) {
                    labels.push(label);
                }
            }
        }
        labels
    }

    /// Value-axis domain: zero-anchored so bars keep a meaningful baseline
    /// and negative values stay visible.
    #[must_use]
    pub fn value_extent(&self) -> (f64, f64) {
        let values = self
            .series
            .iter()
            .flat_map(|s| s.points.values())
            .copied()
            .map(OrderedFloat);
        let max = values.clone().max().map_or(0.0, OrderedFloat::into_inner);
        let min = values.min().map_or(0.0, OrderedFloat::into_inner);
        (min.min(0.0), max.max(0.0))
    }

    /// Serializes the model to pretty JSON for debug dumps and fixtures.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart data: {e}")))
    }

    /// Deserializes a model from JSON and re-runs the invariant checks.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let data: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart data: {e}")))?;
        data.validate()?;
        Ok(data)
    }
}
