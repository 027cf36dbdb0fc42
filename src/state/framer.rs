//! Derives the header frame and body rows from raw row data.

use crate::state::data_model::{self, Row};
use crate::state::table_config::HeaderCase;

/// A rendered row: a synthetic label cell followed by the values in column order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FramedRow {
    pub label: String,
    pub values: Vec<String>,
    /// Position of the backing row in the original data, if any.
    pub source_index: Option<usize>,
}

impl FramedRow {
    /// All cells of the row, label first.
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.label.as_str()).chain(self.values.iter().map(String::as_str))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub header_rows: Vec<FramedRow>,
    pub body_rows: Vec<FramedRow>,
}

/// Splits `data` into a header frame of `freeze_header_num` rows and the body.
///
/// The first header row is synthesized from `columns` (case-transformed) under
/// `corner_label`. Each further header row takes the next leading data row.
/// Body rows keep the 1-based index of their position in `data`.
pub fn frame(
    data: &[Row],
    columns: &[String],
    freeze_header_num: usize,
    case: HeaderCase,
    corner_label: &str,
) -> Frame {
    let consumed = freeze_header_num.saturating_sub(1).min(data.len());

    let mut header_rows = Vec::with_capacity(consumed + 1);
    header_rows.push(FramedRow {
        label: corner_label.to_string(),
        values: columns
            .iter()
            .map(|column| transform_header_key(column, case))
            .collect(),
        source_index: None,
    });
    header_rows.extend(
        data[..consumed]
            .iter()
            .enumerate()
            .map(|(index, row)| framed_data_row(index, row, columns)),
    );

    let body_rows = data
        .iter()
        .enumerate()
        .skip(consumed)
        .map(|(index, row)| framed_data_row(index, row, columns))
        .collect();

    Frame {
        header_rows,
        body_rows,
    }
}

fn framed_data_row(index: usize, row: &Row, columns: &[String]) -> FramedRow {
    FramedRow {
        label: (index + 1).to_string(),
        values: data_model::row_values(row, columns),
        source_index: Some(index),
    }
}

/// Applies the header case transforms. Word capitalization always runs
/// before uppercasing.
pub fn transform_header_key(key: &str, case: HeaderCase) -> String {
    let key = if case.capitalize_words {
        capitalize_words(key)
    } else {
        key.to_string()
    };
    if case.uppercase {
        key.to_uppercase()
    } else {
        key
    }
}

/// Uppercases the first character of the string and every character that
/// follows whitespace.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start && !ch.is_whitespace() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}

/// Sum of the first `freeze_col_num` widths: the leading offset of the live grid.
pub fn frozen_width(widths: &[f64], freeze_col_num: usize) -> f64 {
    widths.iter().take(freeze_col_num).sum()
}
