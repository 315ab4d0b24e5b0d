/// Inner drawing region after margins.
///
/// Margins are proportional: 20% of each dimension per side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub const MARGIN_RATIO: f64 = 0.2;

    #[must_use]
    pub fn proportional(chart_width: f64, chart_height: f64) -> Self {
        let horizontal = chart_width * Self::MARGIN_RATIO;
        let vertical = chart_height * Self::MARGIN_RATIO;
        Self {
            left: horizontal,
            top: vertical,
            width: chart_width - 2.0 * horizontal,
            height: chart_height - 2.0 * vertical,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}
