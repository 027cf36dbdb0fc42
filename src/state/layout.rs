//! One layout computation per table, consumed by two presentation passes.
//!
//! The frozen pass renders underneath and shows the corner and frozen column
//! cells. The live pass is offset by the frozen width and scrolls; its own
//! copies of the frozen cells are not displayed so the frozen pass shows
//! through. Both passes read the same [`TableLayout`].

use std::rc::Rc;

use tracing::debug;

use crate::error::ConfigError;
use crate::state::framer::{self, Frame, FramedRow};
use crate::state::style;
use crate::state::table_config::{
    RegionColors, StyleMap, TableConfig, DEFAULT_BACKGROUND, DEFAULT_TEXT_COLOR,
};
use crate::state::validator;

pub const CELL_PADDING: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pass {
    Frozen,
    Live,
}

impl Pass {
    pub fn name(self) -> &'static str {
        match self {
            Pass::Frozen => "frozen",
            Pass::Live => "live",
        }
    }
}

/// Which frame a row belongs to, with its index inside that frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    Header(usize),
    Body(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRole {
    Corner,
    Header,
    FrozenColumn,
    Body,
}

/// Resolved presentation of a single cell in one pass.
#[derive(Clone, Debug, PartialEq)]
pub struct CellPresentation {
    pub role: CellRole,
    /// False means the cell takes no space (`display: none`).
    pub displayed: bool,
    pub opacity: f64,
    pub width: f64,
    pub border_width: f64,
    pub background: String,
    pub color: String,
    pub bold: bool,
}

impl CellPresentation {
    pub fn inline_style(&self, overrides: Option<&StyleMap>) -> String {
        let mut out = String::new();
        style::push_declaration(&mut out, "width", &format!("{}px", self.width));
        style::push_declaration(&mut out, "min-width", &format!("{}px", self.width));
        style::push_declaration(&mut out, "border", &format!("{}px solid #000", self.border_width));
        style::push_declaration(&mut out, "padding", &format!("{CELL_PADDING}px"));
        style::push_declaration(&mut out, "text-align", "center");
        style::push_declaration(&mut out, "background-color", &self.background);
        style::push_declaration(&mut out, "color", &self.color);
        style::push_declaration(&mut out, "font-weight", if self.bold { "bold" } else { "normal" });
        if !self.displayed {
            style::push_declaration(&mut out, "display", "none");
        }
        if self.opacity < 1.0 {
            style::push_declaration(&mut out, "opacity", &self.opacity.to_string());
        }
        if let Some(overrides) = overrides {
            style::push_declarations(&mut out, overrides);
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableLayout {
    pub columns: Vec<String>,
    pub frame: Frame,
    pub widths: Vec<f64>,
    pub freeze_col_num: usize,
    /// Sum of the frozen column widths; the live grid's leading offset.
    pub frozen_width: f64,
    config: TableConfig,
}

impl TableLayout {
    /// Validates `config` and frames its rows. Nothing is computed for an
    /// invalid configuration.
    pub fn compute(config: &TableConfig) -> Result<Self, ConfigError> {
        validator::validate(config)?;

        let columns = config.columns();
        let freeze_col_num = config.freeze_col_num();
        let frame = framer::frame(
            &config.data,
            &columns,
            config.freeze_header_num(),
            config.header_case(),
            &config.first_cell_content,
        );
        let frozen_width = framer::frozen_width(&config.width, freeze_col_num);

        debug!(
            columns = columns.len(),
            header_rows = frame.header_rows.len(),
            body_rows = frame.body_rows.len(),
            frozen_width,
            "computed table layout"
        );

        Ok(Self {
            columns,
            frame,
            widths: config.width.clone(),
            freeze_col_num,
            frozen_width,
            config: config.clone(),
        })
    }

    pub fn header_rows(&self) -> &[FramedRow] {
        &self.frame.header_rows
    }

    pub fn body_rows(&self) -> &[FramedRow] {
        &self.frame.body_rows
    }

    /// Pre-rendered rows of one pass: keys, inline styles and cell text.
    pub fn pass_rows(&self, pass: Pass) -> PassRows {
        PassRows {
            header: self
                .frame
                .header_rows
                .iter()
                .enumerate()
                .map(|(index, row)| self.rendered_row(pass, RowKind::Header(index), row))
                .collect(),
            body: self
                .frame
                .body_rows
                .iter()
                .enumerate()
                .map(|(index, row)| self.rendered_row(pass, RowKind::Body(index), row))
                .collect(),
        }
    }

    fn rendered_row(&self, pass: Pass, kind: RowKind, row: &FramedRow) -> Rc<RenderedRow> {
        let cells = row
            .cells()
            .enumerate()
            .map(|(column, content)| RenderedCell {
                key: cell_key(pass, kind, column),
                style: self.cell_style(pass, kind, column),
                content: content.to_string(),
            })
            .collect();
        Rc::new(RenderedRow {
            key: cell_key(pass, kind, 0),
            kind,
            cells,
        })
    }

    pub fn cell_role(&self, kind: RowKind, column: usize) -> CellRole {
        let frozen = column < self.freeze_col_num;
        match (kind, frozen) {
            (RowKind::Header(_), true) => CellRole::Corner,
            (RowKind::Header(_), false) => CellRole::Header,
            (RowKind::Body(_), true) => CellRole::FrozenColumn,
            (RowKind::Body(_), false) => CellRole::Body,
        }
    }

    pub fn present(&self, pass: Pass, kind: RowKind, column: usize) -> CellPresentation {
        let role = self.cell_role(kind, column);
        let (displayed, opacity) = match (pass, role) {
            (Pass::Frozen, CellRole::Body) => (true, 0.0),
            (Pass::Frozen, _) => (true, 1.0),
            (Pass::Live, CellRole::Corner | CellRole::FrozenColumn) => (false, 1.0),
            (Pass::Live, _) => (true, 1.0),
        };
        let bold = match role {
            CellRole::Corner | CellRole::Header => self.config.bold_header,
            CellRole::FrozenColumn => self.config.bold_freeze_col,
            CellRole::Body => false,
        };

        CellPresentation {
            role,
            displayed,
            opacity,
            width: self.widths.get(column).copied().unwrap_or_default(),
            border_width: self.config.cell_border_width(),
            background: region_color(&self.config.bg_colors, role, DEFAULT_BACKGROUND),
            color: region_color(&self.config.text_colors, role, DEFAULT_TEXT_COLOR),
            bold,
        }
    }

    /// Cell-level overrides that apply to `role`.
    pub fn cell_overrides(&self, role: CellRole) -> Option<&StyleMap> {
        match role {
            CellRole::Corner | CellRole::Header => self.config.header_styles.as_ref(),
            CellRole::FrozenColumn => self.config.freeze_col_styles.as_ref(),
            CellRole::Body => self.config.body_styles.as_ref(),
        }
    }

    pub fn cell_style(&self, pass: Pass, kind: RowKind, column: usize) -> String {
        let presentation = self.present(pass, kind, column);
        presentation.inline_style(self.cell_overrides(presentation.role))
    }

    /// Inline style of the outer container: the base flex row, margins, then
    /// the validated overrides.
    pub fn container_style(&self) -> String {
        let mut out = String::new();
        style::push_declaration(&mut out, "display", "flex");
        style::push_declaration(&mut out, "flex", "1");
        style::push_declaration(&mut out, "flex-direction", "row");
        style::push_declaration(&mut out, "position", "relative");
        style::push_declaration(&mut out, "overflow", "hidden");
        style::push_declaration(&mut out, "margin-top", &format!("{}px", self.config.margin_top));
        style::push_declaration(
            &mut out,
            "margin-bottom",
            &format!("{}px", self.config.margin_bottom),
        );
        if let Some(overrides) = self.config.main_container_styles.as_ref() {
            style::push_declarations(&mut out, overrides);
        }
        out
    }

    /// Left margin of the live grid, exposing the frozen pass beneath it.
    pub fn live_grid_style(&self) -> String {
        let mut out = String::new();
        style::push_declaration(&mut out, "margin-left", &format!("{}px", self.frozen_width));
        out
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedCell {
    pub key: String,
    pub style: String,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedRow {
    pub key: String,
    pub kind: RowKind,
    pub cells: Vec<RenderedCell>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PassRows {
    pub header: Vec<Rc<RenderedRow>>,
    pub body: Vec<Rc<RenderedRow>>,
}

/// Everything a rendered table needs, independent of scroll offsets.
///
/// Built once per configuration; scroll events only change the transforms
/// applied around these rows.
#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
    pub container_style: String,
    pub live_grid_style: String,
    pub frozen: PassRows,
    pub live: PassRows,
}

impl TableView {
    pub fn new(layout: &TableLayout) -> Self {
        Self {
            container_style: layout.container_style(),
            live_grid_style: layout.live_grid_style(),
            frozen: layout.pass_rows(Pass::Frozen),
            live: layout.pass_rows(Pass::Live),
        }
    }

    pub fn build(config: &TableConfig) -> Result<Self, ConfigError> {
        TableLayout::compute(config).map(|layout| Self::new(&layout))
    }
}

/// Stable identity of a cell across re-renders.
pub fn cell_key(pass: Pass, kind: RowKind, column: usize) -> String {
    match kind {
        RowKind::Header(row) => format!("{}-h{row}-c{column}", pass.name()),
        RowKind::Body(row) => format!("{}-r{row}-c{column}", pass.name()),
    }
}

fn region_color(colors: &RegionColors, role: CellRole, default: &str) -> String {
    let color = match role {
        CellRole::Corner => colors.corner_cell.as_ref(),
        CellRole::Header => colors.header.as_ref(),
        CellRole::FrozenColumn => colors.freeze_column.as_ref(),
        CellRole::Body => colors.body.as_ref(),
    };
    color.cloned().unwrap_or_else(|| default.to_string())
}
