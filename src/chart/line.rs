use crate::core::{ChartData, LinearScale, PointScale};
use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RenderFrame};

use super::axes::draw_axes;
use super::layout::PlotArea;
use super::value_domain;

const SERIES_STROKE_WIDTH: f64 = 1.5;

/// Builds the line-chart scene for a validated model.
///
/// Each series becomes a polyline of `points - 1` segments connecting its
/// points in insertion order, positioned on the shared category axis.
pub fn build_line_frame(data: &ChartData, ticks_visible: bool) -> ChartResult<RenderFrame> {
    data.validate()?;

    let plot = PlotArea::proportional(data.width, data.height);
    let categories = data.category_labels();
    let positions = PointScale::new(categories.len(), plot.left, plot.right())?;
    let (domain_min, domain_max) = value_domain(data);
    let values = LinearScale::new(domain_min, domain_max, plot.bottom(), plot.top)?;

    let mut frame = RenderFrame::new(data.width, data.height);

    for series in &data.series {
        let stroke = Color::new(data.color_for(&series.name));
        let mut mapped = Vec::with_capacity(series.len());
        for (label, value) in &series.points {
            let Some(slot) = categories.iter().position(|c| *c == label.as_str()) else {
                continue;
            };
            mapped.push((positions.position(slot), values.position(*value)));
        }
        for pair in mapped.windows(2) {
            frame.push_line(LinePrimitive::new(
                pair[0].0,
                pair[0].1,
                pair[1].0,
                pair[1].1,
                SERIES_STROKE_WIDTH,
                stroke.clone(),
            ));
        }
    }

    let centers: Vec<(&str, f64)> = categories
        .iter()
        .enumerate()
        .map(|(i, label)| (*label, positions.position(i)))
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
