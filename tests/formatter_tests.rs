//! End-to-end formatter tests
//!
//! Each test writes a CSV to a scratch directory, runs the formatter and
//! reads the produced workbook back with calamine.

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use volley_sheet::{FormatError, FormatterConfig, TableFormatter};

const SHEET: &str = "Formatted Table";

/// Header line of a full match-report export
const REPORT_HEADERS: &str = "Player,Attack K,Attack E,Attack Atk%,Attack Kill%,Serve SA,Serve SE,Serve TA,Receive TA,Receive Pass%,Perfect Perfect Pass%,Block BS,Block BE,Dig DS,Dig DE";

fn write_csv(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("Stats.csv");
    std::fs::write(&path, content).unwrap();
    path
}

fn convert(dir: &TempDir, content: &str) -> PathBuf {
    let input = write_csv(dir, content);
    let output = dir.path().join("StatsFormatted.xlsx");
    TableFormatter::new().format(&input, &output).unwrap();
    output
}

fn open(path: &Path) -> Xlsx<std::io::BufReader<std::fs::File>> {
    open_workbook(path).unwrap()
}

fn read_sheet(path: &Path) -> Range<Data> {
    open(path).worksheet_range(SHEET).unwrap()
}

fn string_at(range: &Range<Data>, row: u32, col: u32) -> Option<String> {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => Some(s.clone()),
        _ => None,
    }
}

fn number_at(range: &Range<Data>, row: u32, col: u32) -> Option<f64> {
    match range.get_value((row, col)) {
        Some(Data::Float(f)) => Some(*f),
        Some(Data::Int(i)) => Some(*i as f64),
        _ => None,
    }
}

/// Report CSV with `rows` data lines
fn report_csv(rows: usize) -> String {
    let mut csv = format!("{}\n", REPORT_HEADERS);
    for i in 0..rows {
        csv.push_str(&format!(
            "Player {i},{i},1,0.25,0.5,2,1,10,8,0.6,0.3,1,0,4,1\n"
        ));
    }
    csv
}

// ═══════════════════════════════════════════════════════════════════════════
// SHEET CONTENT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_sheet_name() {
    let dir = TempDir::new().unwrap();
    let output = convert(&dir, "H1,H2\n1,2\n");
    let workbook = open(&output);
    assert_eq!(workbook.sheet_names(), vec![SHEET.to_string()]);
}

#[test]
fn test_minimal_csv_values() {
    let dir = TempDir::new().unwrap();
    let output = convert(&dir, "H1,H2\n1,2\n3,x\n");
    let range = read_sheet(&output);

    assert_eq!(string_at(&range, 1, 0).as_deref(), Some("H1"));
    assert_eq!(string_at(&range, 1, 1).as_deref(), Some("H2"));
    assert_eq!(number_at(&range, 2, 0), Some(1.0));
    assert_eq!(number_at(&range, 2, 1), Some(2.0));
    assert_eq!(number_at(&range, 3, 0), Some(3.0));
    assert_eq!(string_at(&range, 3, 1).as_deref(), Some("x"));
}

#[test]
fn test_minimal_csv_has_no_merges() {
    let dir = TempDir::new().unwrap();
    let output = convert(&dir, "H1,H2\n1,2\n3,x\n");
    let mut workbook = open(&output);

    let merges = workbook
        .worksheet_merge_cells(SHEET)
        .map(|r| r.unwrap())
        .unwrap_or_default();
    assert!(merges.is_empty());
}

#[test]
fn test_report_headers_relabeled() {
    let dir = TempDir::new().unwrap();
    let output = convert(&dir, &report_csv(2));
    let range = read_sheet(&output);

    let headers: Vec<String> = (0..15)
        .map(|col| string_at(&range, 1, col).unwrap_or_default())
        .collect();
    assert_eq!(
        headers,
        vec![
            "Player",
            "Punkty",
            "Błędy",
            "% ataków zakończonych punktem",
            "Punkt%",
            "Asy",
            "Serwis błąd",
            "Serwisy",
            "Przyjęcia",
            "Średni % przyjęcia",
            "% Idealnego przyjęcia",
            "Punkty blokiem",
            "Błąd w bloku",
            "Udane obrony",
            "Błąd obrony",
        ]
    );
}

#[test]
fn test_report_group_headers_merged() {
    let dir = TempDir::new().unwrap();
    let output = convert(&dir, &report_csv(2));

    let range = read_sheet(&output);
    assert_eq!(string_at(&range, 0, 1).as_deref(), Some("Atak"));
    assert_eq!(string_at(&range, 0, 5).as_deref(), Some("Serwis"));
    assert_eq!(string_at(&range, 0, 8).as_deref(), Some("Przyjęcie"));
    assert_eq!(string_at(&range, 0, 11).as_deref(), Some("Obrona"));
    assert_eq!(string_at(&range, 0, 13).as_deref(), Some("Blok"));

    let mut workbook = open(&output);
    let mut merges: Vec<((u32, u32), (u32, u32))> = workbook
        .worksheet_merge_cells(SHEET)
        .unwrap()
        .unwrap()
        .into_iter()
        .map(|d| (d.start, d.end))
        .collect();
    merges.sort();

    // "Perfect Perfect Pass%" has no category, so the receive group is
    // two columns and the column after it stands alone
    assert_eq!(
        merges,
        vec![
            ((0, 1), (0, 4)),
            ((0, 5), (0, 7)),
            ((0, 8), (0, 9)),
            ((0, 11), (0, 12)),
            ((0, 13), (0, 14)),
        ]
    );
}

#[test]
fn test_numbers_are_stored_as_numbers() {
    let dir = TempDir::new().unwrap();
    let output = convert(&dir, &report_csv(3));
    let range = read_sheet(&output);

    assert_eq!(string_at(&range, 2, 0).as_deref(), Some("Player 0"));
    assert_eq!(number_at(&range, 3, 1), Some(1.0));
    assert_eq!(number_at(&range, 4, 3), Some(0.25));
    assert_eq!(number_at(&range, 4, 9), Some(0.6));
}

#[test]
fn test_team_labels_written_with_enough_rows() {
    let dir = TempDir::new().unwrap();
    let output = convert(&dir, &report_csv(14));
    let range = read_sheet(&output);

    assert_eq!(
        string_at(&range, 12, 0).as_deref(),
        Some("KS Mogielanka Mogielnica")
    );
    assert_eq!(string_at(&range, 13, 0).as_deref(), Some("Przeciwnik"));
    assert_eq!(string_at(&range, 11, 0).as_deref(), Some("Player 9"));
    assert_eq!(string_at(&range, 14, 0).as_deref(), Some("Player 12"));
}

#[test]
fn test_short_csv_skips_team_labels() {
    let dir = TempDir::new().unwrap();
    let output = convert(&dir, &report_csv(5));
    let range = read_sheet(&output);

    for row in 2..7 {
        let name = string_at(&range, row, 0).unwrap();
        assert!(name.starts_with("Player"), "row {} was {}", row, name);
    }
}

#[test]
fn test_ragged_rows_do_not_fail() {
    let dir = TempDir::new().unwrap();
    let output = convert(&dir, "A,B,C\n1\n1,2,3,4,extra\n");
    let range = read_sheet(&output);

    assert_eq!(number_at(&range, 2, 0), Some(1.0));
    assert_eq!(range.get_value((2, 1)).cloned().unwrap_or(Data::Empty), Data::Empty);
    assert_eq!(number_at(&range, 3, 3), Some(4.0));
    assert_eq!(string_at(&range, 3, 4).as_deref(), Some("extra"));
}

// ═══════════════════════════════════════════════════════════════════════════
// TABLE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_data_table_registered() {
    let dir = TempDir::new().unwrap();
    let output = convert(&dir, &report_csv(3));
    let mut workbook = open(&output);

    workbook.load_tables().unwrap();
    let names: Vec<String> = workbook.table_names().into_iter().cloned().collect();
    assert_eq!(names, vec!["DataTable".to_string()]);

    let table = workbook.table_by_name("DataTable").unwrap();
    assert_eq!(table.sheet_name(), SHEET);
    assert_eq!(table.columns().len(), 15);
    assert_eq!(table.columns()[1], "Punkty");
}

#[test]
fn test_configured_names() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "A,B\n1,2\n");
    let output = dir.path().join("custom.xlsx");

    let config = FormatterConfig {
        sheet_name: "Mecz".into(),
        table_name: "Statystyki".into(),
        ..Default::default()
    };
    TableFormatter::with_config(config)
        .format(&input, &output)
        .unwrap();

    let mut workbook = open(&output);
    assert_eq!(workbook.sheet_names(), vec!["Mecz".to_string()]);
    workbook.load_tables().unwrap();
    let names: Vec<String> = workbook.table_names().into_iter().cloned().collect();
    assert_eq!(names, vec!["Statystyki".to_string()]);
}

// ═══════════════════════════════════════════════════════════════════════════
// ERRORS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();
    let err = TableFormatter::new()
        .format(&dir.path().join("nope.csv"), &dir.path().join("out.xlsx"))
        .unwrap_err();
    assert!(err.is_io());
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn test_empty_input() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "");
    let err = TableFormatter::new()
        .format(&input, &dir.path().join("out.xlsx"))
        .unwrap_err();
    assert!(matches!(err, FormatError::EmptyInput(_)));
}

#[test]
fn test_output_directory_missing() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "A\n1\n");
    let err = TableFormatter::new()
        .format(&input, &dir.path().join("missing").join("out.xlsx"))
        .unwrap_err();
    assert!(matches!(err, FormatError::Io { .. }));
}
