use crate::core::{AxisTitles, DEFAULT_TICK_COUNT, LinearScale, linear_ticks, tick_label};
use crate::render::{Color, LinePrimitive, RenderFrame, TextAnchor, TextPrimitive};

use super::layout::PlotArea;

pub(super) const AXIS_COLOR: &str = "black";
pub(super) const AXIS_STROKE_WIDTH: f64 = 1.0;
pub(super) const TICK_LENGTH: f64 = 6.0;
pub(super) const TICK_FONT_SIZE: f64 = 10.0;
pub(super) const TITLE_FONT_SIZE: f64 = 12.0;

/// Draws both axis baselines, tick marks/labels, category labels, and axis
/// titles into the frame.
///
/// The tick-visibility flag only governs tick marks and value tick labels;
/// category labels are data, not decoration, and are always drawn.
pub(super) fn draw_axes(
    frame: &mut RenderFrame,
    plot: &PlotArea,
    value_scale: LinearScale,
    category_centers: &[(&str, f64)],
    titles: &AxisTitles,
    ticks_visible: bool,
) {
    let axis_color = Color::new(AXIS_COLOR);

    // Baselines: x along the plot bottom, y along the plot left.
    frame.push_line(LinePrimitive::new(
        plot.left,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        AXIS_STROKE_WIDTH,
        axis_color.clone(),
    ));
    frame.push_line(LinePrimitive::new(
        plot.left,
        plot.top,
        plot.left,
        plot.bottom(),
        AXIS_STROKE_WIDTH,
        axis_color.clone(),
    ));

    if ticks_visible {
        let (min, max) = value_scale.domain();
        let ticks = linear_ticks(min, max, DEFAULT_TICK_COUNT);
        let step = match ticks.as_slice() {
            [first, second, ..] => second - first,
            _ => 1.0,
        };
        for tick in ticks {
            let y = value_scale.position(tick);
            frame.push_line(LinePrimitive::new(
                plot.left - TICK_LENGTH,
                y,
                plot.left,
                y,
                AXIS_STROKE_WIDTH,
                axis_color.clone(),
            ));
            frame.push_text(
                TextPrimitive::new(
                    plot.left - TICK_LENGTH - 2.0,
                    y,
                    tick_label(tick, step),
                    TICK_FONT_SIZE,
                )
                .with_anchor(TextAnchor::End),
            );
        }

        for (_, x) in category_centers {
            frame.push_line(LinePrimitive::new(
                *x,
                plot.bottom(),
                *x,
                plot.bottom() + TICK_LENGTH,
                AXIS_STROKE_WIDTH,
                axis_color.clone(),
            ));
        }
    }

    for (label, x) in category_centers {
        frame.push_text(
            TextPrimitive::new(
                *x,
                plot.bottom() + TICK_LENGTH + TICK_FONT_SIZE,
                *label,
                TICK_FONT_SIZE,
            )
            .with_anchor(TextAnchor::Middle),
        );
    }

    frame.push_text(
        TextPrimitive::new(
            plot.right(),
            plot.bottom() + 40.0,
            titles.x.clone(),
            TITLE_FONT_SIZE,
        )
        .with_anchor(TextAnchor::End),
    );
    frame.push_text(
        TextPrimitive::new(
            plot.left - 50.0,
            plot.top,
            titles.y.clone(),
            TITLE_FONT_SIZE,
        )
        .with_anchor(TextAnchor::End)
        .with_rotation(-90.0),
    );
}
