/// Default tick count for the value axis.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Nice tick values covering `[min, max]` at roughly `target_count` ticks.
///
/// Steps snap to the 1-2-5 sequence; ticks land on step multiples inside
/// the domain. Degenerate input yields an empty set rather than an error:
/// the axis simply draws without ticks.
#[must_use]
pub fn linear_ticks(min: f64, max: f64, target_count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || min >= max || target_count == 0 {
        return Vec::new();
    }

    let step = nice_step((max - min) / target_count as f64);
    if step <= 0.0 {
        return Vec::new();
    }

    // The tiny epsilon keeps boundary ticks (e.g. 1.0 with step 0.2) from
    // being lost to division rounding.
    let first = (min / step - 1e-9).ceil();
    let last = (max / step + 1e-9).floor();
    let mut ticks = Vec::new();
    let mut mark = first;
    while mark <= last {
        ticks.push(mark * step);
        mark += 1.0;
    }
    ticks
}

/// Formats one tick value with the number of decimals its step calls for,
/// so fractional steps never leak float noise (`0.6`, not
/// `0.6000000000000001`).
#[must_use]
pub fn tick_label(value: f64, step: f64) -> String {
    // Normalizes -0.0 so the origin tick reads "0".
    let value = value + 0.0;
    let decimals = if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    format!("{value:.decimals$}")
}

fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 0.0;
    }
    let magnitude = 10.0_f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}
