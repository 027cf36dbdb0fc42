use serde_json::{Map, Value};

/// One table row: column key to cell value, in insertion order.
pub type Row = Map<String, Value>;
pub type TableData = Vec<Row>;

/// Returns the column keys of the first row, in order.
pub fn column_keys(data: &[Row]) -> Vec<String> {
    data.first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

/// Returns true when `row` has exactly the keys of `reference`, in the same order.
pub fn same_keys(reference: &Row, row: &Row) -> bool {
    reference.len() == row.len() && reference.keys().zip(row.keys()).all(|(a, b)| a == b)
}

/// Formats a JSON value for display in a table cell.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Display strings for the given columns of a row; missing cells are empty.
pub fn row_values(row: &Row, columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .map(|column| row.get(column).map(display_value).unwrap_or_default())
        .collect()
}

/// Builds a row from `(key, value)` pairs, keeping their order.
pub fn row_from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Row
where
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}
