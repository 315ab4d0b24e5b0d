use easycharts::style::StyleSheet;
use easycharts::{ChartElement, ChartKind};

#[test]
fn dataseries_markup_assembles_with_flavor_defaults() {
    let element = ChartElement::new(
        ChartKind::Line,
        r#"<ec-linechart>
            <dataseries name="A">
              <datapoint>10, x</datapoint>
              <datapoint>20, y</datapoint>
            </dataseries>
        </ec-linechart>"#,
    );
    let data = element.chart_data().expect("valid markup");

    assert_eq!(data.width, 500.0);
    assert_eq!(data.height, 300.0);
    assert_eq!(data.axis_titles.x, "x-Axis");
    assert_eq!(data.axis_titles.y, "y-Axis");
    assert_eq!(data.series.len(), 1);
    assert_eq!(data.color_for("A"), "blue");
}

#[test]
fn table_markup_assembles_with_wider_defaults() {
    let element = ChartElement::new(
        ChartKind::Bar,
        r#"<ec-barchart>
            <table><tr><td>cat</td><td>5</td></tr></table>
        </ec-barchart>"#,
    );
    let data = element.chart_data().expect("valid markup");

    assert_eq!(data.width, 1000.0);
    assert_eq!(data.height, 250.0);
    assert_eq!(data.series[0].name, "dataseries1");
}

#[test]
fn id_rule_beats_class_rule_beats_attribute() {
    let sheet = StyleSheet::parse(
        r#"
        .wide { --chart-width: 800; --chart-height: 600; }
        #chart1 { --chart-width: 640; --chart-height: 480; }
        "#,
    );
    let element = ChartElement::new(
        ChartKind::Bar,
        r#"<ec-barchart id="chart1" class="wide" width="320" height="200">
            <dataseries name="A"><datapoint>1, a</datapoint></dataseries>
        </ec-barchart>"#,
    )
    .with_stylesheet(sheet);
    let data = element.chart_data().expect("valid markup");

    assert_eq!(data.width, 640.0);
    assert_eq!(data.height, 480.0);
}

#[test]
fn invalid_candidates_fall_through_per_axis() {
    // Width from the id rule is non-numeric; height is below the minimum.
    // Each axis falls through independently to the attribute.
    let sheet = StyleSheet::parse(r#"#c { --chart-width: 100px; --chart-height: 5; }"#);
    let element = ChartElement::new(
        ChartKind::Line,
        r#"<ec-linechart id="c" width="320" height="200">
            <dataseries name="A"><datapoint>1, a</datapoint></dataseries>
        </ec-linechart>"#,
    )
    .with_stylesheet(sheet);
    let data = element.chart_data().expect("valid markup");

    assert_eq!(data.width, 320.0);
    assert_eq!(data.height, 200.0);
}

#[test]
fn unusable_attributes_fall_back_to_defaults() {
    let element = ChartElement::new(
        ChartKind::Line,
        r#"<ec-linechart width="abc" height="10">
            <dataseries name="A"><datapoint>1, a</datapoint></dataseries>
        </ec-linechart>"#,
    );
    let data = element.chart_data().expect("valid markup");

    assert_eq!(data.width, 500.0);
    assert_eq!(data.height, 300.0);
}

#[test]
fn per_series_colors_resolve_from_series_targets() {
    let sheet = StyleSheet::parse(
        r#"
        #s1 { --chart-color: crimson; }
        .cool { --chart-color: teal; }
        "#,
    );
    let element = ChartElement::new(
        ChartKind::Line,
        r#"<ec-linechart>
            <dataseries name="A" id="s1"><datapoint>1, a</datapoint></dataseries>
            <dataseries name="B" class="cool"><datapoint>2, a</datapoint></dataseries>
            <dataseries name="C"><datapoint>3, a</datapoint></dataseries>
        </ec-linechart>"#,
    )
    .with_stylesheet(sheet);
    let data = element.chart_data().expect("valid markup");

    assert_eq!(data.color_for("A"), "crimson");
    assert_eq!(data.color_for("B"), "teal");
    assert_eq!(data.color_for("C"), "blue");
}

#[test]
fn explicit_axis_titles_reach_the_model() {
    let element = ChartElement::new(
        ChartKind::Bar,
        r#"<ec-barchart>
            <x-axis-title>Month</x-axis-title>
            <y-axis-title>Rainfall (mm)</y-axis-title>
            <dataseries name="A"><datapoint>1, Jan</datapoint></dataseries>
        </ec-barchart>"#,
    );
    let data = element.chart_data().expect("valid markup");

    assert_eq!(data.axis_titles.x, "Month");
    assert_eq!(data.axis_titles.y, "Rainfall (mm)");
}

#[test]
fn chart_data_is_deterministic_across_repeated_runs() {
    let element = ChartElement::new(
        ChartKind::Line,
        r#"<ec-linechart>
            <dataseries name="A">
              <datapoint>3, a</datapoint>
              <datapoint>1, b</datapoint>
            </dataseries>
        </ec-linechart>"#,
    );
    let first = element.chart_data().expect("valid markup");
    let second = element.chart_data().expect("valid markup");
    assert_eq!(first, second);
}

#[test]
fn category_union_keeps_first_appearance_order() {
    let element = ChartElement::new(
        ChartKind::Line,
        r#"<ec-linechart>
            <dataseries name="A">
              <datapoint>1, b</datapoint>
              <datapoint>2, a</datapoint>
            </dataseries>
            <dataseries name="B">
              <datapoint>3, c</datapoint>
              <datapoint>4, a</datapoint>
            </dataseries>
        </ec-linechart>"#,
    );
    let data = element.chart_data().expect("valid markup");
    assert_eq!(data.category_labels(), vec!["b", "a", "c"]);
}

#[test]
fn value_extent_is_zero_anchored() {
    let element = ChartElement::new(
        ChartKind::Bar,
        r#"<ec-barchart>
            <dataseries name="A">
              <datapoint>5, a</datapoint>
              <datapoint>12, b</datapoint>
            </dataseries>
        </ec-barchart>"#,
    );
    let data = element.chart_data().expect("valid markup");
    assert_eq!(data.value_extent(), (0.0, 12.0));
}

#[test]
fn json_round_trip_preserves_the_model() {
    let element = ChartElement::new(
        ChartKind::Bar,
        r#"<ec-barchart width="400" height="300">
            <dataseries name="A">
              <datapoint>10, x</datapoint>
              <datapoint>-4.5, y</datapoint>
            </dataseries>
        </ec-barchart>"#,
    );
    let data = element.chart_data().expect("valid markup");
    let json = data.to_json_pretty().expect("serializes");
    let restored = easycharts::ChartData::from_json_str(&json).expect("deserializes");
    assert_eq!(data, restored);
}

#[test]
fn extraction_failure_propagates_from_chart_data() {
    let element = ChartElement::new(
        ChartKind::Bar,
        r#"<ec-barchart>
            <table><tr><td>cat</td><td>abc</td></tr></table>
        </ec-barchart>"#,
    );
    let err = element.chart_data().expect_err("non-numeric value");
    assert!(err.is_value(), "got {err}");
}
