use std::path::PathBuf;
use thiserror::Error;

pub type FormatResult<T> = Result<T, FormatError>;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV file '{}' has no header line", .0.display())]
    EmptyInput(PathBuf),

    #[error("Excel error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FormatError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FormatError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures reading the CSV or writing the workbook
    pub fn is_io(&self) -> bool {
        match self {
            FormatError::Io { .. } => true,
            FormatError::Xlsx(rust_xlsxwriter::XlsxError::IoError(_)) => true,
            _ => false,
        }
    }
}
