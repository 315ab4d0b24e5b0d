//! easycharts: declarative bar/line chart components.
//!
//! Each chart element parses its own markup snippet (an HTML-table-shaped
//! subtree or a `<dataseries>`/`<datapoint>` structure) into a validated
//! data model, resolves presentation metadata from attributes and attached
//! stylesheets, and builds a backend-agnostic render frame.

pub mod api;
pub mod chart;
pub mod core;
pub mod data;
pub mod error;
pub mod markup;
pub mod render;
pub mod style;
pub mod telemetry;

pub use crate::api::{ChartElement, ChartKind};
pub use crate::core::ChartData;
pub use crate::error::{ChartError, ChartResult};
