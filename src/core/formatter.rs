//! CSV → formatted Excel table

use super::layout::LayoutBuilder;
use crate::config::FormatterConfig;
use crate::error::FormatResult;
use crate::excel::ExcelExporter;
use crate::parser::{self, CsvDocument};
use crate::types::SheetLayout;
use std::path::{Path, PathBuf};

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq)]
pub struct FormatReport {
    pub output: PathBuf,
    pub columns: usize,
    pub data_rows: usize,
    pub merged_regions: usize,
    pub table_name: Option<String>,
}

/// Reads a stats CSV and writes the formatted workbook
#[derive(Debug, Clone, Default)]
pub struct TableFormatter {
    config: FormatterConfig,
}

impl TableFormatter {
    /// Formatter with the stock match-report layout
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Build the sheet layout for a CSV file without writing anything
    pub fn plan(&self, csv_path: &Path) -> FormatResult<(CsvDocument, SheetLayout)> {
        let document = parser::parse_csv_file(csv_path)?;
        let layout = LayoutBuilder::new(&self.config).build(&document);
        Ok((document, layout))
    }

    /// Convert `csv_path` into an `.xlsx` file at `output_path`
    pub fn format(&self, csv_path: &Path, output_path: &Path) -> FormatResult<FormatReport> {
        let (document, layout) = self.plan(csv_path)?;
        tracing::debug!(input = %csv_path.display(), "planned sheet layout");
        self.export(&document, &layout, output_path)
    }

    /// Write an already planned layout to `output_path`
    pub fn export(
        &self,
        document: &CsvDocument,
        layout: &SheetLayout,
        output_path: &Path,
    ) -> FormatResult<FormatReport> {
        ExcelExporter::with_number_formats(
            layout,
            &self.config.number_format,
            &self.config.percent_format,
        )
        .export(output_path)?;

        let report = FormatReport {
            output: output_path.to_path_buf(),
            columns: document.column_count(),
            data_rows: document.row_count(),
            merged_regions: layout.merged_regions.len(),
            table_name: layout.table.as_ref().map(|t| t.name.clone()),
        };
        tracing::info!(
            output = %output_path.display(),
            columns = report.columns,
            rows = report.data_rows,
            "Excel file saved with formatted table"
        );
        Ok(report)
    }
}

/// Convert with the default configuration
pub fn format(csv_path: &Path, output_path: &Path) -> FormatResult<FormatReport> {
    TableFormatter::new().format(csv_path, output_path)
}
