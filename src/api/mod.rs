//! Public component surface: chart elements and their activation pipeline.

mod element;

pub use crate::chart::ChartKind;
pub use element::ChartElement;
