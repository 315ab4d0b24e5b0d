use crate::markup::number::parse_number;
use crate::style::{StyleSheet, StyleTarget};

pub const CHART_WIDTH_PROPERTY: &str = "--chart-width";
pub const CHART_HEIGHT_PROPERTY: &str = "--chart-height";
pub const CHART_COLOR_PROPERTY: &str = "--chart-color";
pub const CHART_TICKS_PROPERTY: &str = "--chart-ticks";

pub const DEFAULT_SERIES_COLOR: &str = "blue";

/// Dimensions at or below this are unusable and fall through to the next
/// precedence level.
pub const MIN_DIMENSION: f64 = 10.0;

/// Fallback chart size, per markup flavor. Table-sourced charts default to
/// a wider, shorter surface than data-series charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeDefaults {
    pub width: f64,
    pub height: f64,
}

impl SizeDefaults {
    pub const DATA_SERIES: Self = Self {
        width: 500.0,
        height: 300.0,
    };
    pub const TABLE: Self = Self {
        width: 1000.0,
        height: 250.0,
    };
}

/// Width/height attributes as written on the chart element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionAttributes<'a> {
    pub width: Option<&'a str>,
    pub height: Option<&'a str>,
}

/// Read-only presentation resolver over a set of attached stylesheets.
///
/// Every resolution is independent and infallible: any missing or malformed
/// value degrades to the next precedence level and ultimately a default.
/// Injecting the sheets (instead of reaching into ambient document state)
/// keeps resolution testable against fixture stylesheets.
#[derive(Debug, Clone, Default)]
pub struct StyleResolver {
    sheets: Vec<StyleSheet>,
}

impl StyleResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: StyleSheet) -> Self {
        self.push_sheet(sheet);
        self
    }

    pub fn push_sheet(&mut self, sheet: StyleSheet) {
        self.sheets.push(sheet);
    }

    /// Resolved chart size. Precedence per axis: `#id` rule custom property,
    /// `.class` rule custom property, element attribute, flavor default.
    /// A candidate that is non-numeric or not above [`MIN_DIMENSION`] is
    /// discarded and the chain continues.
    #[must_use]
    pub fn resolve_dimensions(
        &self,
        target: &StyleTarget,
        attributes: DimensionAttributes<'_>,
        defaults: SizeDefaults,
    ) -> (f64, f64) {
        let width = self.resolve_axis(
            target,
            CHART_WIDTH_PROPERTY,
            attributes.width,
            defaults.width,
        );
        let height = self.resolve_axis(
            target,
            CHART_HEIGHT_PROPERTY,
            attributes.height,
            defaults.height,
        );
        (width, height)
    }

    /// Resolved color for one series (or point) target, default `"blue"`.
    #[must_use]
    pub fn resolve_color(&self, target: &StyleTarget) -> String {
        self.property(target, CHART_COLOR_PROPERTY)
            .map(str::to_owned)
            .unwrap_or_else(|| DEFAULT_SERIES_COLOR.to_owned())
    }

    /// Whether axis ticks should be drawn; defaults to shown.
    #[must_use]
    pub fn resolve_tick_visibility(&self, target: &StyleTarget) -> bool {
        match self.property(target, CHART_TICKS_PROPERTY) {
            Some(raw) => {
                let flag = raw.trim().to_ascii_lowercase();
                !matches!(flag.as_str(), "hide" | "hidden" | "none" | "false" | "0")
            }
            None => true,
        }
    }

    fn resolve_axis(
        &self,
        target: &StyleTarget,
        property: &str,
        attribute: Option<&str>,
        default: f64,
    ) -> f64 {
        self.id_property(target, property)
            .and_then(sheet_dimension)
            .or_else(|| {
                self.class_property(target, property)
                    .and_then(sheet_dimension)
            })
            .or_else(|| attribute.and_then(attribute_dimension))
            .unwrap_or(default)
    }

    /// Custom property with id-over-class precedence across all sheets.
    fn property(&self, target: &StyleTarget, name: &str) -> Option<&str> {
        self.id_property(target, name)
            .or_else(|| self.class_property(target, name))
    }

    fn id_property(&self, target: &StyleTarget, name: &str) -> Option<&str> {
        self.sheets
            .iter()
            .filter_map(|sheet| sheet.id_property(target, name))
            .next_back()
    }

    fn class_property(&self, target: &StyleTarget, name: &str) -> Option<&str> {
        self.sheets
            .iter()
            .filter_map(|sheet| sheet.class_property(target, name))
            .next_back()
    }
}

fn sheet_dimension(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|v| *v > MIN_DIMENSION)
}

/// Attributes additionally reject any alphabetic character, so `100px` or
/// `1e3` never parse as dimensions.
fn attribute_dimension(raw: &str) -> Option<f64> {
    if raw.chars().any(char::is_alphabetic) {
        return None;
    }
    parse_number(raw).filter(|v| *v > MIN_DIMENSION)
}
