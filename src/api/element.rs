use indexmap::IndexMap;
use tracing::{debug, error};

use crate::chart::{ChartKind, build_frame};
use crate::core::{AxisTitles, ChartData, Series};
use crate::error::ChartResult;
use crate::markup::{self, ChartMarkup, ExtractionMode, RawExtraction};
use crate::render::{RenderFrame, Renderer};
use crate::style::{DimensionAttributes, SizeDefaults, StyleResolver, StyleSheet};

/// One chart component instance: a chart kind, the markup it owns, and the
/// stylesheets attached to it.
///
/// The markup string must be complete before activation. Every activation
/// re-runs the full pipeline over the current markup and sheets; nothing
/// is cached between activations.
#[derive(Debug, Clone)]
pub struct ChartElement {
    kind: ChartKind,
    source: String,
    styles: StyleResolver,
}

impl ChartElement {
    #[must_use]
    pub fn new(kind: ChartKind, source: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
            styles: StyleResolver::new(),
        }
    }

    /// Attaches a stylesheet; later sheets win within one specificity.
    #[must_use]
    pub fn with_stylesheet(mut self, sheet: StyleSheet) -> Self {
        self.styles.push_sheet(sheet);
        self
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Runs extraction, presentation resolution, and assembly into the
    /// normalized model. Fails fast on the first violation.
    pub fn chart_data(&self) -> ChartResult<ChartData> {
        let parsed = ChartMarkup::parse(&self.source)?;
        let raw = markup::extract(&parsed)?;
        self.assemble(&parsed, raw)
    }

    /// Builds the full render frame for this element.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        let parsed = ChartMarkup::parse(&self.source)?;
        let raw = markup::extract(&parsed)?;
        let ticks_visible = self.styles.resolve_tick_visibility(&parsed.style_target());
        let data = self.assemble(&parsed, raw)?;
        build_frame(self.kind, &data, ticks_visible)
    }

    /// Activation entry point. Extraction errors never propagate to the
    /// host: they are reported through `tracing` and the chart is simply
    /// not rendered. Returns whether a frame was handed to the renderer.
    pub fn activate<R: Renderer>(&self, renderer: &mut R) -> bool {
        match self.try_activate(renderer) {
            Ok(()) => true,
            Err(err) => {
                error!(error = %err, "chart activation failed; render skipped");
                false
            }
        }
    }

    fn try_activate<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.build_frame()?;
        renderer.render(&frame)?;
        debug!(
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "chart rendered"
        );
        Ok(())
    }

    fn assemble(&self, parsed: &ChartMarkup<'_>, raw: RawExtraction) -> ChartResult<ChartData> {
        let defaults = match raw.mode {
            ExtractionMode::Table => SizeDefaults::TABLE,
            ExtractionMode::DataSeries => SizeDefaults::DATA_SERIES,
        };
        let attributes = DimensionAttributes {
            width: parsed.attribute("width"),
            height: parsed.attribute("height"),
        };
        let (width, height) =
            self.styles
                .resolve_dimensions(&parsed.style_target(), attributes, defaults);

        let mut colors = IndexMap::new();
        let mut series = Vec::with_capacity(raw.series.len());
        for raw_series in raw.series {
            colors.insert(
                raw_series.name.clone(),
                self.styles.resolve_color(&raw_series.target),
            );
            series.push(Series::new(raw_series.name, raw_series.points));
        }

        let data = ChartData {
            series,
            axis_titles: AxisTitles::resolve(raw.x_title, raw.y_title),
            colors,
            width,
            height,
        };
        data.validate()?;
        Ok(data)
    }
}
