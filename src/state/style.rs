//! Conversion of style maps into inline CSS declarations.

use serde_json::Value;

use crate::state::data_model;
use crate::state::table_config::StyleMap;

/// Style properties whose numeric values are unitless.
const UNITLESS: &[&str] = &[
    "flex",
    "flex-grow",
    "flex-shrink",
    "opacity",
    "shadow-opacity",
    "z-index",
    "font-weight",
    "line-height",
];

/// `backgroundColor` -> `background-color`. Already kebab-cased names pass through.
pub fn css_property(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

pub fn css_value(property: &str, value: &Value) -> String {
    match value {
        Value::Number(n) if !UNITLESS.contains(&property) => format!("{n}px"),
        other => data_model::display_value(other),
    }
}

/// Appends `property: value;` for every entry of `styles`.
pub fn push_declarations(out: &mut String, styles: &StyleMap) {
    for (name, value) in styles {
        let property = css_property(name);
        let value = css_value(&property, value);
        push_declaration(out, &property, &value);
    }
}

pub fn push_declaration(out: &mut String, property: &str, value: &str) {
    if !out.is_empty() && !out.ends_with(' ') {
        out.push(' ');
    }
    out.push_str(property);
    out.push_str(": ");
    out.push_str(value);
    out.push(';');
}
