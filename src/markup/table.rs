use indexmap::IndexMap;
use roxmltree::Node;
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};
use crate::markup::document::{ChartMarkup, text_content};
use crate::markup::number::parse_number;

pub(super) struct TableExtraction {
    pub points: IndexMap<String, f64>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
}

/// Walks the `<table>` subtree into a single ordered label→value mapping.
///
/// Header rows (rows inside `<thead>`, or rows with only `<th>` cells) are
/// not data rows; the first one supplies the axis titles. Every body row
/// must have at least two `<td>` cells: category label first, numeric value
/// second. The first violation aborts the whole extraction.
pub(super) fn extract_table(markup: &ChartMarkup<'_>) -> ChartResult<TableExtraction> {
    let table = markup
        .find("table")
        .ok_or_else(|| ChartError::Structure("<table> element not found".to_owned()))?;

    let mut points = IndexMap::new();
    let mut x_title = None;
    let mut y_title = None;

    for row in table
        .descendants()
        .filter(|n| n.is_element() && n.has_tag_name("tr"))
    {
        if is_header_row(row) {
            if x_title.is_none() && y_title.is_none() {
                (x_title, y_title) = header_titles(row);
            }
            continue;
        }

        let cells: SmallVec<[Node<'_, '_>; 2]> = row
            .descendants()
            .filter(|n| n.is_element() && n.has_tag_name("td"))
            .collect();
        if cells.len() < 2 {
            return Err(ChartError::Structure(
                "each table row must have at least two cells".to_owned(),
            ));
        }

        let label = text_content(cells[0]).trim().to_owned();
        let value_text = text_content(cells[1]).trim().to_owned();
        if label.is_empty() || value_text.is_empty() {
            return Err(ChartError::Value(
                "each table cell must have a value".to_owned(),
            ));
        }

        let value = parse_number(&value_text).ok_or_else(|| {
            ChartError::Value(format!("table value \"{value_text}\" is not a valid number"))
        })?;
        if points.insert(label.clone(), value).is_some() {
            return Err(ChartError::Value(format!(
                "duplicate category label \"{label}\" in table"
            )));
        }
    }

    if points.is_empty() {
        return Err(ChartError::Structure("table has no data rows".to_owned()));
    }

    Ok(TableExtraction {
        points,
        x_title,
        y_title,
    })
}

fn is_header_row(row: Node<'_, '_>) -> bool {
    if row.ancestors().any(|a| a.has_tag_name("thead")) {
        return true;
    }
    let mut has_th = false;
    for cell in row.descendants().filter(Node::is_element) {
        if cell.has_tag_name("td") {
            return false;
        }
        if cell.has_tag_name("th") {
            has_th = true;
        }
    }
    has_th
}

fn header_titles(row: Node<'_, '_>) -> (Option<String>, Option<String>) {
    let mut cells = row
        .descendants()
        .filter(|n| n.is_element() && n.has_tag_name("th"))
        .map(|cell| text_content(cell).trim().to_owned())
        .map(|text| (!text.is_empty()).then_some(text));
    let x = cells.next().flatten();
    let y = cells.next().flatten();
    (x, y)
}
