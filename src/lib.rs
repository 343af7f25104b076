//! volley-sheet - volleyball stats CSV to formatted Excel table
//!
//! Reads a match statistics CSV export and writes an `.xlsx` workbook with
//! Polish column headers, category group headers merged across their
//! columns, number/percentage formats and a named Excel table.
//!
//! # Example
//!
//! ```no_run
//! use volley_sheet::TableFormatter;
//! use std::path::Path;
//!
//! let report = TableFormatter::new().format(Path::new("Stats.csv"), Path::new("StatsFormatted.xlsx"))?;
//! println!("{} rows written", report.data_rows);
//! # Ok::<(), volley_sheet::FormatError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use crate::core::{FormatReport, TableFormatter};
pub use config::FormatterConfig;
pub use error::{FormatError, FormatResult};
pub use types::{Cell, CellStyle, CellValue, SheetLayout};
