//! Frame builders: one per chart kind, all consuming the same `ChartData`.

mod axes;
mod bar;
mod layout;
mod line;

pub use bar::build_bar_frame;
pub use layout::PlotArea;
pub use line::build_line_frame;

use serde::{Deserialize, Serialize};

use crate::core::ChartData;
use crate::error::ChartResult;
use crate::render::RenderFrame;

/// Chart flavor. A tagged variant instead of one component type per chart
/// kind; both kinds consume the same extracted model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Line,
}

/// Dispatches to the kind-specific frame builder.
pub fn build_frame(
    kind: ChartKind,
    data: &ChartData,
    ticks_visible: bool,
) -> ChartResult<RenderFrame> {
    match kind {
        ChartKind::Bar => build_bar_frame(data, ticks_visible),
        ChartKind::Line => build_line_frame(data, ticks_visible),
    }
}

/// Value-axis domain for a model, widened when every value is identical so
/// the linear scale always has a non-empty domain.
pub(crate) fn value_domain(data: &ChartData) -> (f64, f64) {
    let (min, max) = data.value_extent();
    if min < max { (min, max) } else { (min, min + 1.0) }
}
