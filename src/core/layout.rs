//! Sheet layout builder
//!
//! Turns a parsed CSV document into a [`SheetLayout`]: group header row,
//! relabeled column header row, typed data rows, merged category cells and
//! the bounds of the named table. Nothing here touches the filesystem.

use super::headers::{category_label, display_header, is_percent_header, Category};
use crate::config::FormatterConfig;
use crate::parser::CsvDocument;
use crate::types::{Cell, CellStyle, CellValue, MergedRegion, SheetLayout, TableRange};
use std::collections::HashSet;

/// Row holding the category labels
pub const GROUP_HEADER_ROW: u32 = 0;
/// Row holding the (relabeled) column headers; first row of the table
pub const HEADER_ROW: u32 = 1;
/// First data row
pub const FIRST_DATA_ROW: u32 = 2;

/// Columns available in an xlsx worksheet
const MAX_COLUMNS: usize = 16_384;

/// Parse a field as a locale-invariant decimal. Non-finite values stay text.
pub fn parse_number(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Find maximal runs of two or more adjacent columns sharing a category.
///
/// Categories are scanned one at a time in [`Category::ALL`] order, so the
/// result is grouped by category and left-to-right within each. Columns
/// without a category are never merged.
pub fn merge_category_runs(labels: &[&str], row: u32) -> Vec<MergedRegion> {
    let mut regions = Vec::new();

    for category in Category::ALL {
        let label = category.label();
        let mut start: Option<usize> = None;

        for col in 0..=labels.len() {
            let matches = labels.get(col).is_some_and(|l| *l == label);
            match (matches, start) {
                (true, None) => start = Some(col),
                (false, Some(first)) => {
                    if col - first > 1 {
                        regions.push(MergedRegion {
                            row,
                            first_col: first as u16,
                            last_col: (col - 1) as u16,
                            label: label.to_string(),
                        });
                    }
                    start = None;
                }
                _ => {}
            }
        }
    }

    regions
}

/// Table column names: empty headers become `ColumnN` and repeats get a
/// numeric suffix, compared case-insensitively.
pub fn unique_table_headers(headers: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let base = if header.is_empty() {
                format!("Column{}", idx + 1)
            } else {
                header.clone()
            };
            let mut name = base.clone();
            let mut suffix = 2;
            while !seen.insert(name.to_lowercase()) {
                name = format!("{}{}", base, suffix);
                suffix += 1;
            }
            name
        })
        .collect()
}

/// Builds a [`SheetLayout`] from a CSV document
pub struct LayoutBuilder<'a> {
    config: &'a FormatterConfig,
}

impl<'a> LayoutBuilder<'a> {
    pub fn new(config: &'a FormatterConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, document: &CsvDocument) -> SheetLayout {
        let mut layout = SheetLayout::new(self.config.sheet_name.clone());
        layout.autofit = self.config.autofit;

        let group_row = layout.create_row();
        let header_row = layout.create_row();
        debug_assert_eq!((group_row, header_row), (GROUP_HEADER_ROW, HEADER_ROW));

        let headers = if document.headers.len() > MAX_COLUMNS {
            tracing::warn!(
                columns = document.headers.len(),
                "header line is wider than a worksheet, extra columns dropped"
            );
            &document.headers[..MAX_COLUMNS]
        } else {
            &document.headers[..]
        };

        let display: Vec<String> = headers
            .iter()
            .map(|h| display_header(h).to_string())
            .collect();
        let table_headers = unique_table_headers(&display);
        let labels: Vec<&str> = headers.iter().map(|h| category_label(h)).collect();

        self.write_header_rows(&mut layout, &table_headers, &labels);
        layout.merged_regions = merge_category_runs(&labels, GROUP_HEADER_ROW);
        self.write_data_rows(&mut layout, document, &display);
        self.apply_team_labels(&mut layout);
        self.center_region(&mut layout);
        center_row(&mut layout, GROUP_HEADER_ROW);
        layout.table = self.table_range(&layout, table_headers);

        tracing::debug!(
            rows = layout.rows.len(),
            merges = layout.merged_regions.len(),
            "built sheet layout"
        );
        layout
    }

    fn write_header_rows(&self, layout: &mut SheetLayout, headers: &[String], labels: &[&str]) {
        for (idx, (header, label)) in headers.iter().zip(labels).enumerate() {
            let col = idx as u16;
            if let Some(row) = layout.row_mut(HEADER_ROW) {
                row.set(col, Cell::text(header.clone()));
            }
            if let Some(row) = layout.row_mut(GROUP_HEADER_ROW) {
                row.set(col, Cell::text(*label));
            }
        }
    }

    fn write_data_rows(
        &self,
        layout: &mut SheetLayout,
        document: &CsvDocument,
        display_headers: &[String],
    ) {
        for (line_idx, fields) in document.rows.iter().enumerate() {
            if fields.len() != display_headers.len() {
                tracing::warn!(
                    line = line_idx + 2,
                    fields = fields.len(),
                    headers = display_headers.len(),
                    "ragged CSV row"
                );
            }

            let row_idx = layout.create_row();
            let Some(row) = layout.row_mut(row_idx) else {
                continue;
            };

            for (idx, field) in fields.iter().take(MAX_COLUMNS).enumerate() {
                let cell = match parse_number(field) {
                    Some(value) => {
                        let percent = display_headers
                            .get(idx)
                            .is_some_and(|h| is_percent_header(h));
                        let style = if percent {
                            CellStyle::Percent
                        } else {
                            CellStyle::Number
                        };
                        Cell::number(value, Some(style))
                    }
                    None => Cell::text(field.clone()),
                };
                row.set(idx as u16, cell);
            }
        }
    }

    /// Overwrite column A of the configured data rows. Missing rows are skipped.
    fn apply_team_labels(&self, layout: &mut SheetLayout) {
        for label in &self.config.team_labels {
            if label.row < FIRST_DATA_ROW {
                tracing::warn!(row = label.row, "team label row is not a data row, skipped");
                continue;
            }
            let Some(row) = layout.row_mut(label.row) else {
                tracing::debug!(row = label.row, "no such row for team label, skipped");
                continue;
            };
            match row.get_mut(0) {
                Some(cell) => cell.value = CellValue::Text(label.text.clone()),
                None => row.set(0, Cell::text(label.text.clone())),
            }
        }
    }

    /// Center existing cells inside the configured region
    fn center_region(&self, layout: &mut SheetLayout) {
        let region = self.config.center_region;
        for row_idx in region.first_row..=region.last_row {
            let Some(row) = layout.row_mut(row_idx) else {
                break;
            };
            for (col, cell) in row.iter_mut() {
                if region.contains(row_idx, col) {
                    cell.style = Some(CellStyle::Center);
                }
            }
        }
    }

    fn table_range(&self, layout: &SheetLayout, headers: Vec<String>) -> Option<TableRange> {
        if headers.is_empty() {
            return None;
        }
        // a table needs at least one body row
        let last_row = layout
            .last_row()
            .unwrap_or(HEADER_ROW)
            .max(HEADER_ROW + 1);

        Some(TableRange {
            name: self.config.table_name.clone(),
            first_row: HEADER_ROW,
            first_col: 0,
            last_row,
            last_col: (headers.len() - 1) as u16,
            headers,
        })
    }
}

fn center_row(layout: &mut SheetLayout, row_idx: u32) {
    if let Some(row) = layout.row_mut(row_idx) {
        for (_, cell) in row.iter_mut() {
            cell.style = Some(CellStyle::Center);
        }
    }
}

/// Build a layout with the given configuration
pub fn build_layout(document: &CsvDocument, config: &FormatterConfig) -> SheetLayout {
    LayoutBuilder::new(config).build(document)
}
