//! Formatting pipeline: header rules, sheet layout and the formatter facade

pub mod formatter;
pub mod headers;
pub mod layout;

pub use formatter::{FormatReport, TableFormatter};
pub use headers::{category_label, display_header, Category};
pub use layout::{build_layout, LayoutBuilder, FIRST_DATA_ROW, GROUP_HEADER_ROW, HEADER_ROW};
