//! CSV input
//!
//! Deliberately naive: fields are separated by bare commas with no quoting or
//! escaping. Surrounding whitespace is trimmed. Trailing empty fields are
//! dropped, so `"1,2,,"` has two fields, while an empty line still has one
//! empty field. Lines end at `\n`, `\r\n` or a bare `\r`.

use crate::error::{FormatError, FormatResult};
use std::path::Path;

/// Header line plus data lines of a stats export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvDocument {
    /// Trimmed header fields from the first line
    pub headers: Vec<String>,
    /// Trimmed fields of every following line, in file order
    pub rows: Vec<Vec<String>>,
}

impl CsvDocument {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Split a line on commas and trim each field
pub fn split_fields(line: &str) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields.into_iter().map(|f| f.trim().to_string()).collect()
}

/// Split text into lines on `\n`, `\r\n` and bare `\r`. A terminator at
/// the very end does not start another line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(pos) => {
                lines.push(&rest[..pos]);
                let end = if rest[pos..].starts_with("\r\n") { pos + 2 } else { pos + 1 };
                rest = &rest[end..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

/// Parse CSV text already in memory
pub fn parse_csv_str(content: &str) -> Option<CsvDocument> {
    let mut lines = split_lines(content).into_iter();
    let headers = split_fields(lines.next()?);
    let rows = lines.map(split_fields).collect();
    Some(CsvDocument { headers, rows })
}

/// Read and split a CSV file
pub fn parse_csv_file(path: &Path) -> FormatResult<CsvDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| FormatError::io(path, e))?;
    let document =
        parse_csv_str(&content).ok_or_else(|| FormatError::EmptyInput(path.to_path_buf()))?;

    tracing::debug!(
        path = %path.display(),
        columns = document.column_count(),
        rows = document.row_count(),
        "parsed CSV"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_split_trims_fields() {
        assert_eq!(split_fields(" Attack K , Serve SA"), vec!["Attack K", "Serve SA"]);
    }

    #[test]
    fn test_split_keeps_inner_empty_fields() {
        assert_eq!(split_fields("1,,3"), vec!["1", "", "3"]);
    }

    #[test]
    fn test_split_drops_trailing_empty_fields() {
        assert_eq!(split_fields("1,2,,"), vec!["1", "2"]);
        assert!(split_fields(",,").is_empty());
    }

    #[test]
    fn test_split_whitespace_field_is_not_trailing_empty() {
        // only truly empty fields are dropped, a blank field survives as ""
        assert_eq!(split_fields("1, "), vec!["1", ""]);
    }

    #[test]
    fn test_split_empty_line() {
        assert_eq!(split_fields(""), vec![""]);
    }

    #[test]
    fn test_split_ignores_quotes() {
        assert_eq!(split_fields("\"a,b\",c"), vec!["\"a", "b\"", "c"]);
    }

    #[test]
    fn test_parse_str_header_and_rows() {
        let doc = parse_csv_str("H1,H2\r\n1,2\r\n3,x\r\n").unwrap();
        assert_eq!(doc.headers, vec!["H1", "H2"]);
        assert_eq!(doc.rows, vec![vec!["1", "2"], vec!["3", "x"]]);
    }

    #[test]
    fn test_parse_str_bare_carriage_returns() {
        let doc = parse_csv_str("H1,H2\r1,2\r3,x\r").unwrap();
        assert_eq!(doc.headers, vec!["H1", "H2"]);
        assert_eq!(doc.rows, vec![vec!["1", "2"], vec!["3", "x"]]);
    }

    #[test]
    fn test_split_lines_mixed_endings() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\r\n"), vec!["a", ""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_parse_str_empty_is_none() {
        assert!(parse_csv_str("").is_none());
    }

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Player,Attack K").unwrap();
        writeln!(file, "Kowalski,12").unwrap();

        let doc = parse_csv_file(file.path()).unwrap();
        assert_eq!(doc.column_count(), 2);
        assert_eq!(doc.row_count(), 1);
        assert_eq!(doc.rows[0], vec!["Kowalski", "12"]);
    }

    #[test]
    fn test_parse_missing_file_is_io_error() {
        let err = parse_csv_file(Path::new("/nonexistent/stats.csv")).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_parse_empty_file_is_empty_input() {
        let file = NamedTempFile::new().unwrap();
        let err = parse_csv_file(file.path()).unwrap_err();
        assert!(matches!(err, FormatError::EmptyInput(_)));
    }
}
