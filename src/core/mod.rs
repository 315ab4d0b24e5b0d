//! Chart domain model and the scale/tick math frame builders draw with.

mod model;
mod scale;
mod ticks;

pub use model::{AxisTitles, ChartData, DEFAULT_X_AXIS_TITLE, DEFAULT_Y_AXIS_TITLE, Series};
pub use scale::{BandScale, LinearScale, PointScale};
pub use ticks::{DEFAULT_TICK_COUNT, linear_ticks, tick_label};
