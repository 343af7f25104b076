//! Excel output
//!
//! Serializes a resolved [`SheetLayout`](crate::types::SheetLayout) with
//! `rust_xlsxwriter`: styled cells, merged group headers, the named table and
//! column autofit.

mod exporter;

pub use exporter::ExcelExporter;
