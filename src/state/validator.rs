//! Configuration checks run before any layout work.
//!
//! Rules are checked in a fixed order and the first violation is returned.
//! Validation never mutates the configuration.

use serde_json::Value;

use crate::error::ConfigError;
use crate::state::data_model;
use crate::state::table_config::{StyleMap, TableConfig};

pub const CONTAINER_STYLE_ALLOW_LIST: &[&str] = &[
    "margin",
    "border",
    "background",
    "width",
    "height",
    "flex",
    "shadow",
    "z-index",
];

pub const CELL_STYLE_ALLOW_LIST: &[&str] = &[
    "background",
    "border",
    "color",
    "font",
    "text",
    "line",
    "letter",
    "padding",
    "shadow",
];

/// Flex growth of the container before any override is applied.
const BASE_CONTAINER_FLEX: f64 = 1.0;

pub fn validate(config: &TableConfig) -> Result<(), ConfigError> {
    let Some(first_row) = config.data.first() else {
        return Err(ConfigError::NoData);
    };

    if config.width.is_empty() {
        return Err(ConfigError::NoWidths);
    }
    let expected = first_row.len() + 1;
    if config.width.len() != expected {
        return Err(ConfigError::WidthLength {
            expected,
            actual: config.width.len(),
        });
    }

    // `!(w > 0)` also rejects NaN.
    if let Some((index, value)) = config
        .width
        .iter()
        .copied()
        .enumerate()
        .find(|(_, w)| !(*w > 0.0))
    {
        return Err(ConfigError::NonPositiveWidth { index, value });
    }

    if let Some(n) = config.freeze_col_num {
        if n < 1 {
            return Err(ConfigError::FreezeColNum(n));
        }
    }

    if let Some(n) = config.freeze_header_num {
        let rows = config.data.len();
        if n < 1 || n as u64 > rows as u64 {
            return Err(ConfigError::FreezeHeaderNum { value: n, rows });
        }
    }

    if let Some(styles) = config.main_container_styles.as_ref() {
        validate_container_styles(styles)?;
    }

    let cell_groups = [
        ("headerStyles", config.header_styles.as_ref()),
        ("freezeColStyles", config.freeze_col_styles.as_ref()),
        ("bodyStyles", config.body_styles.as_ref()),
    ];
    for (group, styles) in cell_groups {
        if let Some(styles) = styles {
            validate_cell_styles(group, styles)?;
        }
    }

    if let Some(row) = config
        .data
        .iter()
        .position(|row| !data_model::same_keys(first_row, row))
    {
        return Err(ConfigError::InconsistentRowKeys { row });
    }

    Ok(())
}

pub fn validate_container_styles(styles: &StyleMap) -> Result<(), ConfigError> {
    let unsupported = unsupported_keys(styles, CONTAINER_STYLE_ALLOW_LIST);
    if !unsupported.is_empty() {
        return Err(ConfigError::UnsupportedContainerStyles {
            keys: unsupported.join(", "),
            allowed: CONTAINER_STYLE_ALLOW_LIST.join(", "),
        });
    }

    let has_width = styles.contains_key("width");
    let has_height = styles.contains_key("height");
    if has_width != has_height {
        return Err(ConfigError::ContainerDimensions);
    }

    if !has_width {
        let grows = match styles.get("flex") {
            Some(value) => flex_grows(value),
            None => BASE_CONTAINER_FLEX > 0.0,
        };
        if !grows {
            return Err(ConfigError::ContainerFlex);
        }
    }

    Ok(())
}

/// Whether a `flex` value lets the container take space: a positive number,
/// or a shorthand string whose first token is a positive number or `auto`.
fn flex_grows(value: &Value) -> bool {
    match value {
        Value::Number(number) => number.as_f64().is_some_and(|flex| flex > 0.0),
        Value::String(shorthand) => match shorthand.split_whitespace().next() {
            Some("auto") => true,
            Some(grow) => grow.parse::<f64>().is_ok_and(|flex| flex > 0.0),
            None => false,
        },
        _ => false,
    }
}

pub fn validate_cell_styles(group: &'static str, styles: &StyleMap) -> Result<(), ConfigError> {
    let unsupported = unsupported_keys(styles, CELL_STYLE_ALLOW_LIST);
    if unsupported.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::UnsupportedCellStyles {
            group,
            keys: unsupported.join(", "),
            allowed: CELL_STYLE_ALLOW_LIST.join(", "),
        })
    }
}

/// Case-insensitive substring match, ignoring `-` and `_` so that
/// `zIndex`, `z-index` and `z_index` all match `z-index`.
pub fn style_key_allowed(key: &str, allow_list: &[&str]) -> bool {
    let key = normalize_style_key(key);
    allow_list
        .iter()
        .any(|allowed| key.contains(&normalize_style_key(allowed)))
}

fn unsupported_keys<'a>(styles: &'a StyleMap, allow_list: &[&str]) -> Vec<&'a str> {
    styles
        .keys()
        .map(String::as_str)
        .filter(|key| !style_key_allowed(key, allow_list))
        .collect()
}

fn normalize_style_key(key: &str) -> String {
    key.chars()
        .filter(|ch| *ch != '-' && *ch != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

