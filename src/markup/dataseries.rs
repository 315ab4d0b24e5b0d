use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::markup::document::{ChartMarkup, element_style_target, text_content};
use crate::markup::number::parse_number;

use super::RawSeries;

/// Extracts every `<dataseries>` container, in document order.
///
/// Each container needs a unique, non-empty `name` attribute and at least
/// one `<datapoint>` child. Datapoint text is a comma pair in canonical
/// order: numeric value first, category label second.
pub(super) fn extract_dataseries(markup: &ChartMarkup<'_>) -> ChartResult<Vec<RawSeries>> {
    let mut series: Vec<RawSeries> = Vec::new();

    for container in markup.find_all("dataseries") {
        let name = container
            .attribute("name")
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                ChartError::Structure(
                    "<dataseries> element is missing its name attribute".to_owned(),
                )
            })?;
        if series.iter().any(|s| s.name == name) {
            return Err(ChartError::Structure(format!(
                "duplicate <dataseries> name \"{name}\""
            )));
        }

        let mut points = IndexMap::new();
        for datapoint in container
            .descendants()
            .filter(|n| n.is_element() && n.has_tag_name("datapoint"))
        {
            let (label, value) = split_datapoint(&text_content(datapoint))?;
            if points.insert(label.clone(), value).is_some() {
                return Err(ChartError::Value(format!(
                    "duplicate category label \"{label}\" in series \"{name}\""
                )));
            }
        }
        if points.is_empty() {
            return Err(ChartError::Structure(
                "no <datapoint> elements found inside <dataseries>".to_owned(),
            ));
        }

        series.push(RawSeries {
            name: name.to_owned(),
            points,
            target: element_style_target(container),
        });
    }

    Ok(series)
}

/// Splits one datapoint body into `(label, value)`.
///
/// Exactly two comma-separated parts are required; extra parts would mean
/// silently dropping input, so they are rejected. Parts are trimmed but
/// interior label whitespace survives (`"42, Label A"` keeps `"Label A"`).
fn split_datapoint(text: &str) -> ChartResult<(String, f64)> {
    let trimmed = text.trim();
    let parts: Vec<&str> = trimmed.split(',').collect();
    if parts.len() != 2 {
        return Err(ChartError::Value(format!(
            "datapoint \"{trimmed}\" must hold exactly one value and one label"
        )));
    }

    let value_text = parts[0].trim();
    let label = parts[1].trim();
    if value_text.is_empty() {
        return Err(ChartError::Value("datapoint value is missing".to_owned()));
    }
    if label.is_empty() {
        return Err(ChartError::Value("datapoint label is missing".to_owned()));
    }

    let value = parse_number(value_text).ok_or_else(|| {
        ChartError::Value(format!(
            "datapoint value \"{value_text}\" is not a valid input for chart"
        ))
    })?;
    Ok((label.to_owned(), value))
}
