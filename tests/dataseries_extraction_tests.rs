use easycharts::markup::{self, ChartMarkup, ExtractionMode};

fn extract(source: &str) -> Result<markup::RawExtraction, easycharts::ChartError> {
    let parsed = ChartMarkup::parse(source).expect("well-formed markup");
    markup::extract(&parsed)
}

#[test]
fn named_series_with_value_first_datapoints() {
    let raw = extract(
        r#"<ec-linechart>
            <dataseries name="A">
              <datapoint>10, x</datapoint>
              <datapoint>20, y</datapoint>
            </dataseries>
        </ec-linechart>"#,
    )
    .expect("valid dataseries markup");

    assert_eq!(raw.mode, ExtractionMode::DataSeries);
    assert_eq!(raw.series.len(), 1);
    let series = &raw.series[0];
    assert_eq!(series.name, "A");
    assert_eq!(series.points.get("x"), Some(&10.0));
    assert_eq!(series.points.get("y"), Some(&20.0));
    assert_eq!(raw.x_title, None);
    assert_eq!(raw.y_title, None);
}

#[test]
fn multiple_series_keep_document_order() {
    let raw = extract(
        r#"<ec-linechart>
            <dataseries name="first"><datapoint>1, a</datapoint></dataseries>
            <dataseries name="second"><datapoint>2, a</datapoint></dataseries>
            <dataseries name="third"><datapoint>3, a</datapoint></dataseries>
        </ec-linechart>"#,
    )
    .expect("valid markup");

    let names: Vec<&str> = raw.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn datapoint_parts_are_trimmed_but_interior_whitespace_survives() {
    let raw = extract(
        r#"<ec-linechart>
            <dataseries name="A">
              <datapoint>  42.5 ,  Label A  </datapoint>
            </dataseries>
        </ec-linechart>"#,
    )
    .expect("valid markup");
    assert_eq!(raw.series[0].points.get("Label A"), Some(&42.5));
}

#[test]
fn series_without_name_attribute_is_a_structure_error() {
    let err = extract(
        r#"<ec-linechart>
            <dataseries><datapoint>1, a</datapoint></dataseries>
        </ec-linechart>"#,
    )
    .expect_err("missing name");
    assert!(err.is_structure(), "got {err}");
}

#[test]
fn duplicate_series_names_are_a_structure_error() {
    let err = extract(
        r#"<ec-linechart>
            <dataseries name="dup"><datapoint>1, a</datapoint></dataseries>
            <dataseries name="dup"><datapoint>2, b</datapoint></dataseries>
        </ec-linechart>"#,
    )
    .expect_err("duplicate series name");
    assert!(err.is_structure(), "got {err}");
    assert!(err.to_string().contains("dup"));
}

#[test]
fn series_without_datapoints_is_a_structure_error() {
    let err = extract(
        r#"<ec-linechart><dataseries name="A"></dataseries></ec-linechart>"#,
    )
    .expect_err("no datapoints");
    assert!(err.is_structure(), "got {err}");
    assert!(err.to_string().contains("<datapoint>"));
}

#[test]
fn malformed_datapoint_values_are_value_errors() {
    for body in ["5", "5,", ",label", "1,2,3", "abc, label"] {
        let source = format!(
            r#"<ec-linechart>
                <dataseries name="A"><datapoint>{body}</datapoint></dataseries>
            </ec-linechart>"#
        );
        let err = extract(&source).expect_err(body);
        assert!(err.is_value(), "body {body:?} gave {err}");
    }
}

#[test]
fn non_numeric_datapoint_error_names_the_offending_token() {
    let err = extract(
        r#"<ec-linechart>
            <dataseries name="A"><datapoint>12px, cat</datapoint></dataseries>
        </ec-linechart>"#,
    )
    .expect_err("non-numeric value");
    assert!(err.to_string().contains("\"12px\""));
}

#[test]
fn duplicate_labels_within_one_series_are_rejected() {
    let err = extract(
        r#"<ec-linechart>
            <dataseries name="A">
              <datapoint>1, cat</datapoint>
              <datapoint>2, cat</datapoint>
            </dataseries>
        </ec-linechart>"#,
    )
    .expect_err("duplicate label");
    assert!(err.is_value(), "got {err}");
}

#[test]
fn series_share_labels_freely_across_each_other() {
    let raw = extract(
        r#"<ec-linechart>
            <dataseries name="A"><datapoint>1, cat</datapoint></dataseries>
            <dataseries name="B"><datapoint>2, cat</datapoint></dataseries>
        </ec-linechart>"#,
    )
    .expect("shared labels across series are fine");
    assert_eq!(raw.series[0].points.get("cat"), Some(&1.0));
    assert_eq!(raw.series[1].points.get("cat"), Some(&2.0));
}

#[test]
fn series_targets_carry_their_own_id_and_classes() {
    let raw = extract(
        r#"<ec-linechart id="chart1">
            <dataseries name="A" id="s1" class="warm bold">
              <datapoint>1, a</datapoint>
            </dataseries>
        </ec-linechart>"#,
    )
    .expect("valid markup");
    let target = &raw.series[0].target;
    assert_eq!(target.id(), Some("s1"));
    assert_eq!(target.classes(), &["warm", "bold"]);
}
