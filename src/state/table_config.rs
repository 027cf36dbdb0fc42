use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::state::data_model::{self, TableData};

/// Free-form style overrides: style property name to value.
pub type StyleMap = Map<String, Value>;

pub const DEFAULT_BACKGROUND: &str = "#fff";
pub const DEFAULT_TEXT_COLOR: &str = "#000";
pub const DEFAULT_BORDER_WIDTH: f64 = 1.0;

/// Per-region colors. Unset regions fall back to the neutral defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionColors {
    pub corner_cell: Option<String>,
    pub header: Option<String>,
    pub freeze_column: Option<String>,
    pub body: Option<String>,
}

/// Everything a rendered table instance is configured with.
///
/// Field names serialize as the camelCase option names (`freezeColNum`,
/// `firstCellContent`, ...), so a configuration can be loaded straight
/// from JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    pub data: TableData,
    pub width: Vec<f64>,
    /// Leading columns kept fixed. Defaults to 1.
    pub freeze_col_num: Option<i64>,
    /// Leading rows promoted into the header frame. Defaults to 1.
    pub freeze_header_num: Option<i64>,
    pub first_cell_content: String,
    pub bold_header: bool,
    pub bold_freeze_col: bool,
    pub cap_header: bool,
    pub upper_header: bool,
    pub border_width: Option<f64>,
    pub inner_border_width: Option<f64>,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub bg_colors: RegionColors,
    pub text_colors: RegionColors,
    pub main_container_styles: Option<StyleMap>,
    pub header_styles: Option<StyleMap>,
    pub freeze_col_styles: Option<StyleMap>,
    pub body_styles: Option<StyleMap>,
}

impl TableConfig {
    pub fn new(data: TableData, width: Vec<f64>) -> Self {
        Self {
            data,
            width,
            ..Self::default()
        }
    }

    pub fn columns(&self) -> Vec<String> {
        data_model::column_keys(&self.data)
    }

    /// Effective frozen column count. Only meaningful after validation.
    pub fn freeze_col_num(&self) -> usize {
        self.freeze_col_num
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| *n >= 1)
            .unwrap_or(1)
    }

    /// Effective frozen header row count. Only meaningful after validation.
    pub fn freeze_header_num(&self) -> usize {
        self.freeze_header_num
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| *n >= 1)
            .unwrap_or(1)
    }

    /// Border thickness of a single cell.
    pub fn cell_border_width(&self) -> f64 {
        self.inner_border_width
            .or(self.border_width)
            .unwrap_or(DEFAULT_BORDER_WIDTH)
    }

    pub fn header_case(&self) -> HeaderCase {
        HeaderCase {
            capitalize_words: self.cap_header,
            uppercase: self.upper_header,
        }
    }
}

/// Case transforms applied to the synthesized header row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderCase {
    pub capitalize_words: bool,
    pub uppercase: bool,
}
