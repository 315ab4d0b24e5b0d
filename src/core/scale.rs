use crate::error::{ChartError, ChartResult};

/// Maps a finite value domain onto a pixel range.
///
/// The range may run backwards (pixel y axes grow downward); the domain may
/// not be empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_min: f64,
        domain_max: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_min.is_finite()
            || !domain_max.is_finite()
            || !range_start.is_finite()
            || !range_end.is_finite()
        {
            return Err(ChartError::InvalidData(
                "scale domain and range must be finite".to_owned(),
            ));
        }
        if domain_min >= domain_max {
            return Err(ChartError::InvalidData(
                "scale domain must be non-empty".to_owned(),
            ));
        }
        Ok(Self {
            domain_min,
            domain_max,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn position(self, value: f64) -> f64 {
        let normalized = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_start + normalized * (self.range_end - self.range_start)
    }
}

/// Categorical band scale with proportional padding, for bars.
///
/// The math follows the conventional band layout (inner padding = outer
/// padding, centered): `step = span / (n + padding)`,
/// `bandwidth = step * (1 - padding)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    range_start: f64,
    offset: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub const DEFAULT_PADDING: f64 = 0.1;

    pub fn new(count: usize, range_start: f64, range_end: f64, padding: f64) -> ChartResult<Self> {
        if count == 0 {
            return Err(ChartError::InvalidData(
                "band scale needs at least one category".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_end <= range_start {
            return Err(ChartError::InvalidData(
                "band scale range must be finite and ascending".to_owned(),
            ));
        }
        if !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band scale padding must be in [0, 1)".to_owned(),
            ));
        }

        let span = range_end - range_start;
        let step = span / (count as f64 + padding);
        let offset = (span - step * (count as f64 - padding)) * 0.5;
        Ok(Self {
            count,
            range_start,
            offset,
            step,
            bandwidth: step * (1.0 - padding),
        })
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Left edge of the band at `index`.
    #[must_use]
    pub fn band_start(&self, index: usize) -> f64 {
        debug_assert!(index < self.count);
        self.range_start + self.offset + self.step * index as f64
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

/// Categorical point scale: evenly spaced positions, a single category sits
/// centered in the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointScale {
    count: usize,
    range_start: f64,
    offset: f64,
    step: f64,
}

impl PointScale {
    pub fn new(count: usize, range_start: f64, range_end: f64) -> ChartResult<Self> {
        if count == 0 {
            return Err(ChartError::InvalidData(
                "point scale needs at least one category".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_end <= range_start {
            return Err(ChartError::InvalidData(
                "point scale range must be finite and ascending".to_owned(),
            ));
        }

        let span = range_end - range_start;
        let step = span / (count.max(2) as f64 - 1.0);
        let offset = (span - step * (count as f64 - 1.0)) * 0.5;
        Ok(Self {
            count,
            range_start,
            offset,
            step,
        })
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn position(&self, index: usize) -> f64 {
        debug_assert!(index < self.count);
        self.range_start + self.offset + self.step * index as f64
    }
}
