//! Excel exporter implementation

use crate::config::FormatterConfig;
use crate::error::{FormatError, FormatResult};
use crate::types::{Cell, CellStyle, CellValue, SheetLayout, TableRange};
use rust_xlsxwriter::{
    Format, FormatAlign, Table, TableColumn, Workbook, Worksheet, XlsxError,
};
use std::path::Path;

/// The three cell formats used by a sheet
struct CellFormats {
    center: Format,
    number: Format,
    percent: Format,
}

impl CellFormats {
    fn new(number_format: &str, percent_format: &str) -> Self {
        Self {
            center: Format::new()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            number: Format::new().set_num_format(number_format),
            percent: Format::new().set_num_format(percent_format),
        }
    }

    fn get(&self, style: CellStyle) -> &Format {
        match style {
            CellStyle::Center => &self.center,
            CellStyle::Number => &self.number,
            CellStyle::Percent => &self.percent,
        }
    }
}

/// Writes a [`SheetLayout`] to an `.xlsx` workbook
pub struct ExcelExporter<'a> {
    layout: &'a SheetLayout,
    formats: CellFormats,
}

impl<'a> ExcelExporter<'a> {
    /// Exporter with the default `0.00` / `0.00%` number formats
    pub fn new(layout: &'a SheetLayout) -> Self {
        let defaults = FormatterConfig::default();
        Self::with_number_formats(layout, &defaults.number_format, &defaults.percent_format)
    }

    pub fn with_number_formats(
        layout: &'a SheetLayout,
        number_format: &str,
        percent_format: &str,
    ) -> Self {
        Self {
            layout,
            formats: CellFormats::new(number_format, percent_format),
        }
    }

    /// Build the workbook in memory
    pub fn build_workbook(&self) -> FormatResult<Workbook> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.layout.sheet_name)?;

        self.write_cells(worksheet)?;
        self.write_merged_regions(worksheet)?;

        if let Some(table) = &self.layout.table {
            Self::add_table(worksheet, table)?;
        }

        if self.layout.autofit {
            worksheet.autofit();
        }

        Ok(workbook)
    }

    /// Export the layout to an Excel .xlsx file
    pub fn export(&self, output_path: &Path) -> FormatResult<()> {
        let mut workbook = self.build_workbook()?;

        workbook.save(output_path).map_err(|e| match e {
            XlsxError::IoError(source) => FormatError::io(output_path, source),
            other => FormatError::Xlsx(other),
        })?;

        tracing::debug!(path = %output_path.display(), "workbook saved");
        Ok(())
    }

    fn write_cells(&self, worksheet: &mut Worksheet) -> FormatResult<()> {
        for (row_idx, row) in self.layout.rows.iter().enumerate() {
            let row_idx = row_idx as u32;
            for (col, cell) in row.iter() {
                // merged cells are written with their region
                if self.layout.is_merged(row_idx, col) {
                    continue;
                }
                self.write_cell(worksheet, row_idx, col, cell)?;
            }
        }
        Ok(())
    }

    /// Write a single cell value with its format
    fn write_cell(
        &self,
        worksheet: &mut Worksheet,
        row: u32,
        col: u16,
        cell: &Cell,
    ) -> FormatResult<()> {
        let format = cell.style.map(|s| self.formats.get(s));

        match (&cell.value, format) {
            (CellValue::Number(value), Some(format)) => {
                worksheet.write_number_with_format(row, col, *value, format)?;
            }
            (CellValue::Number(value), None) => {
                worksheet.write_number(row, col, *value)?;
            }
            // Excel has no empty strings, only blank cells
            (CellValue::Text(text), Some(format)) if text.is_empty() => {
                worksheet.write_blank(row, col, format)?;
            }
            (CellValue::Text(text), None) if text.is_empty() => {}
            (CellValue::Text(text), Some(format)) => {
                worksheet.write_string_with_format(row, col, text, format)?;
            }
            (CellValue::Text(text), None) => {
                worksheet.write_string(row, col, text)?;
            }
        }
        Ok(())
    }

    fn write_merged_regions(&self, worksheet: &mut Worksheet) -> FormatResult<()> {
        for region in &self.layout.merged_regions {
            let style = self
                .layout
                .cell(region.row, region.first_col)
                .and_then(|c| c.style)
                .unwrap_or(CellStyle::Center);

            worksheet.merge_range(
                region.row,
                region.first_col,
                region.row,
                region.last_col,
                &region.label,
                self.formats.get(style),
            )?;
        }
        Ok(())
    }

    fn add_table(worksheet: &mut Worksheet, range: &TableRange) -> FormatResult<()> {
        let columns: Vec<TableColumn> = range
            .headers
            .iter()
            .map(|header| TableColumn::new().set_header(header))
            .collect();

        let table = Table::new().set_name(&range.name).set_columns(&columns);

        worksheet.add_table(
            range.first_row,
            range.first_col,
            range.last_row,
            range.last_col,
            &table,
        )?;
        Ok(())
    }
}
