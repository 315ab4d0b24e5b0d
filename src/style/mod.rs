//! Presentation resolution: stylesheet inspection and precedence chains for
//! dimensions, colors, and tick visibility.

mod resolver;
mod sheet;

pub use resolver::{
    CHART_COLOR_PROPERTY, CHART_HEIGHT_PROPERTY, CHART_TICKS_PROPERTY, CHART_WIDTH_PROPERTY,
    DEFAULT_SERIES_COLOR, DimensionAttributes, MIN_DIMENSION, SizeDefaults, StyleResolver,
};
pub use sheet::{StyleSheet, StyleTarget};
