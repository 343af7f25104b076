use std::collections::BTreeMap;

//==============================================================================
// Cells
//==============================================================================

/// Value stored in a single worksheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Parsed decimal number
    Number(f64),
    /// Raw (trimmed) text
    Text(String),
}

impl CellValue {
    /// Get the text, if this is a string cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Number(_) => None,
            CellValue::Text(s) => Some(s),
        }
    }
}

/// Cell style. Applying a style replaces whatever the cell had before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStyle {
    /// Horizontally and vertically centered
    Center,
    /// Two-decimal number (`0.00`)
    Number,
    /// Two-decimal percentage (`0.00%`)
    Percent,
}

/// A cell: value plus optional style
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub style: Option<CellStyle>,
}

impl Cell {
    pub fn number(value: f64, style: Option<CellStyle>) -> Self {
        Self {
            value: CellValue::Number(value),
            style,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: CellValue::Text(value.into()),
            style: None,
        }
    }
}

//==============================================================================
// Rows and sheet
//==============================================================================

/// A sparse row of cells keyed by zero-based column index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: BTreeMap<u16, Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or replace) the cell at `col`
    pub fn set(&mut self, col: u16, cell: Cell) {
        self.cells.insert(col, cell);
    }

    pub fn get(&self, col: u16) -> Option<&Cell> {
        self.cells.get(&col)
    }

    pub fn get_mut(&mut self, col: u16) -> Option<&mut Cell> {
        self.cells.get_mut(&col)
    }

    /// One past the highest populated column (0 for an empty row)
    pub fn width(&self) -> u16 {
        self.cells
            .keys()
            .next_back()
            .map(|&col| col + 1)
            .unwrap_or(0)
    }

    /// Iterate populated cells in column order
    pub fn iter(&self) -> impl Iterator<Item = (u16, &Cell)> {
        self.cells.iter().map(|(&col, cell)| (col, cell))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (u16, &mut Cell)> {
        self.cells.iter_mut().map(|(&col, cell)| (col, cell))
    }
}

/// Horizontal merge over a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedRegion {
    pub row: u32,
    pub first_col: u16,
    pub last_col: u16,
    pub label: String,
}

impl MergedRegion {
    /// Number of columns covered
    pub fn span(&self) -> u16 {
        self.last_col - self.first_col + 1
    }
}

/// Bounds and column headers of the named table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRange {
    pub name: String,
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
    /// Column headers as registered on the table (non-empty, unique)
    pub headers: Vec<String>,
}

/// Fully resolved worksheet, ready to be written
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetLayout {
    pub sheet_name: String,
    pub rows: Vec<Row>,
    pub merged_regions: Vec<MergedRegion>,
    pub table: Option<TableRange>,
    pub autofit: bool,
}

impl SheetLayout {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            ..Default::default()
        }
    }

    /// Append an empty row and return its index
    pub fn create_row(&mut self) -> u32 {
        self.rows.push(Row::new());
        (self.rows.len() - 1) as u32
    }

    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows.get(index as usize)
    }

    pub fn row_mut(&mut self, index: u32) -> Option<&mut Row> {
        self.rows.get_mut(index as usize)
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.row(row).and_then(|r| r.get(col))
    }

    /// Index of the last row, or `None` for an empty sheet
    pub fn last_row(&self) -> Option<u32> {
        self.rows.len().checked_sub(1).map(|i| i as u32)
    }

    /// Is the given cell part of a merged region?
    pub fn is_merged(&self, row: u32, col: u16) -> bool {
        self.merged_regions
            .iter()
            .any(|m| m.row == row && (m.first_col..=m.last_col).contains(&col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_width_tracks_highest_column() {
        let mut row = Row::new();
        assert_eq!(row.width(), 0);
        row.set(3, Cell::text("x"));
        row.set(1, Cell::number(1.0, None));
        assert_eq!(row.width(), 4);
        assert_eq!(row.iter().count(), 2);
    }

    #[test]
    fn test_row_set_replaces_cell() {
        let mut row = Row::new();
        row.set(0, Cell::number(5.0, Some(CellStyle::Number)));
        row.set(0, Cell::text("Przeciwnik"));
        assert_eq!(row.get(0), Some(&Cell::text("Przeciwnik")));
    }

    #[test]
    fn test_cell_value_accessors() {
        assert_eq!(CellValue::Number(2.5).as_text(), None);
        assert_eq!(CellValue::Text("a".into()).as_text(), Some("a"));
    }

    #[test]
    fn test_layout_rows_and_merges() {
        let mut layout = SheetLayout::new("Sheet");
        assert_eq!(layout.last_row(), None);
        assert_eq!(layout.create_row(), 0);
        assert_eq!(layout.create_row(), 1);
        assert_eq!(layout.last_row(), Some(1));

        layout.merged_regions.push(MergedRegion {
            row: 0,
            first_col: 2,
            last_col: 4,
            label: "Atak".into(),
        });
        assert!(layout.is_merged(0, 3));
        assert!(!layout.is_merged(0, 5));
        assert!(!layout.is_merged(1, 3));
        assert_eq!(layout.merged_regions[0].span(), 3);
    }
}
