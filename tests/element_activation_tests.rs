use easycharts::render::{NullRenderer, SvgRenderer};
use easycharts::style::StyleSheet;
use easycharts::{ChartElement, ChartKind};

const VALID_MARKUP: &str = r#"<ec-barchart>
    <dataseries name="A">
      <datapoint>10, x</datapoint>
      <datapoint>20, y</datapoint>
    </dataseries>
</ec-barchart>"#;

#[test]
fn activation_hands_one_frame_to_the_renderer() {
    let element = ChartElement::new(ChartKind::Bar, VALID_MARKUP);
    let mut renderer = NullRenderer::default();

    assert!(element.activate(&mut renderer));
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_rect_count, 2);
    assert!(renderer.last_line_count >= 2);
    assert!(renderer.last_text_count >= 4);
}

#[test]
fn activation_failure_reports_false_and_skips_the_renderer() {
    let element = ChartElement::new(
        ChartKind::Bar,
        r#"<ec-barchart>
            <dataseries name="A"><datapoint>abc, x</datapoint></dataseries>
        </ec-barchart>"#,
    );
    let mut renderer = NullRenderer::default();

    assert!(!element.activate(&mut renderer));
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn malformed_markup_never_reaches_the_renderer() {
    let element = ChartElement::new(ChartKind::Line, "<ec-linechart><unclosed>");
    let mut renderer = NullRenderer::default();

    assert!(!element.activate(&mut renderer));
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn repeated_activation_is_idempotent_per_run() {
    let element = ChartElement::new(ChartKind::Line, VALID_MARKUP);
    let mut renderer = NullRenderer::default();

    assert!(element.activate(&mut renderer));
    assert!(element.activate(&mut renderer));
    assert_eq!(renderer.frames_rendered, 2);

    let first = element.build_frame().expect("valid markup");
    let second = element.build_frame().expect("valid markup");
    assert_eq!(first, second);
}

#[test]
fn tick_visibility_comes_from_the_element_stylesheet() {
    let source = r#"<ec-barchart id="c">
        <dataseries name="A">
          <datapoint>0, a</datapoint>
          <datapoint>100, b</datapoint>
        </dataseries>
    </ec-barchart>"#;

    // Ticks default to shown; a hide flag on the element's rule removes the
    // tick marks and their value labels.
    let default = ChartElement::new(ChartKind::Bar, source)
        .build_frame()
        .expect("valid markup");
    let hidden = ChartElement::new(ChartKind::Bar, source)
        .with_stylesheet(StyleSheet::parse("#c { --chart-ticks: none; }"))
        .build_frame()
        .expect("valid markup");
    let shown = ChartElement::new(ChartKind::Bar, source)
        .with_stylesheet(StyleSheet::parse("#c { --chart-ticks: visible; }"))
        .build_frame()
        .expect("valid markup");

    assert!(default.lines.len() > hidden.lines.len());
    assert!(default.texts.len() > hidden.texts.len());
    assert_eq!(shown.lines.len(), default.lines.len());
}

#[test]
fn svg_backend_produces_a_document_on_activation() {
    let element = ChartElement::new(ChartKind::Bar, VALID_MARKUP);
    let mut renderer = SvgRenderer::new();

    assert!(element.activate(&mut renderer));
    let svg = renderer.last_svg().expect("a document was rendered");
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("<rect "));
    assert!(svg.ends_with("</svg>\n"));
}
