use crate::core::{BandScale, ChartData, LinearScale};
use crate::error::ChartResult;
use crate::render::{Color, RectPrimitive, RenderFrame};

use super::axes::draw_axes;
use super::layout::PlotArea;
use super::value_domain;

/// Builds the bar-chart scene for a validated model.
///
/// One rect per (series, point). With multiple series the bars of one
/// category share its band, split evenly in series order. Deterministic and
/// side-effect free so rendering and tests consume identical geometry.
pub fn build_bar_frame(data: &ChartData, ticks_visible: bool) -> ChartResult<RenderFrame> {
    data.validate()?;

    let plot = PlotArea::proportional(data.width, data.height);
    let categories = data.category_labels();
    let bands = BandScale::new(
        categories.len(),
        plot.left,
        plot.right(),
        BandScale::DEFAULT_PADDING,
    )?;
    let (domain_min, domain_max) = value_domain(data);
    let values = LinearScale::new(domain_min, domain_max, plot.bottom(), plot.top)?;

    let mut frame = RenderFrame::new(data.width, data.height);
    let slot_width = bands.bandwidth() / data.series.len() as f64;
    let baseline = values.position(0.0);

    for (series_index, series) in data.series.iter().enumerate() {
        let fill = Color::new(data.color_for(&series.name));
        for (label, value) in &series.points {
            let Some(slot) = categories.iter().position(|c| *c == label.as_str()) else {
                continue;
            };
            let x = bands.band_start(slot) + slot_width * series_index as f64;
            let y = values.position(*value);
            frame.push_rect(RectPrimitive::new(
                x,
                y.min(baseline),
                slot_width,
                (y - baseline).abs(),
                fill.clone(),
            ));
        }
    }

    let centers: Vec<(&str, f64)> = categories
        .iter()
        .enumerate()
        .map(|(i, label)| (*label, bands.band_start(i) + bands.bandwidth() / 2.0))
        .collect();
    draw_axes(
        &mut frame,
        &plot,
        values,
        &centers,
        &data.axis_titles,
        ticks_visible,
    );

    frame.validate()?;
    Ok(frame)
}
