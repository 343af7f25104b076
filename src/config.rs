//! Formatter configuration
//!
//! Every positional constant of the output (team label rows, the centered
//! block, sheet and table names, number formats) lives here. Defaults match
//! the stock match-report layout; a YAML file can override any subset.

use crate::error::{FormatError, FormatResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed label written into column A of a given sheet row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLabel {
    /// Zero-based sheet row (row 0 is the group header row)
    pub row: u32,
    pub text: String,
}

/// Rectangular block of cells, zero-based and inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRegion {
    pub first_row: u32,
    pub last_row: u32,
    pub first_col: u16,
    pub last_col: u16,
}

impl CellRegion {
    pub fn contains(&self, row: u32, col: u16) -> bool {
        (self.first_row..=self.last_row).contains(&row)
            && (self.first_col..=self.last_col).contains(&col)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    pub sheet_name: String,
    pub table_name: String,
    pub number_format: String,
    pub percent_format: String,
    pub team_labels: Vec<TeamLabel>,
    pub center_region: CellRegion,
    pub autofit: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Formatted Table".to_string(),
            table_name: "DataTable".to_string(),
            number_format: "0.00".to_string(),
            percent_format: "0.00%".to_string(),
            // A13 and A14
            team_labels: vec![
                TeamLabel {
                    row: 12,
                    text: "KS Mogielanka Mogielnica".to_string(),
                },
                TeamLabel {
                    row: 13,
                    text: "Przeciwnik".to_string(),
                },
            ],
            // B3:U14
            center_region: CellRegion {
                first_row: 2,
                last_row: 13,
                first_col: 1,
                last_col: 20,
            },
            autofit: true,
        }
    }
}

impl FormatterConfig {
    /// Parse a configuration from YAML text. Missing keys take defaults.
    pub fn from_yaml_str(content: &str) -> FormatResult<Self> {
        let config: FormatterConfig = serde_yaml::from_str(content)
            .map_err(|e| FormatError::Config(format!("Invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_yaml_file(path: &Path) -> FormatResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FormatError::Config(format!(
                "Failed to read configuration file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> FormatResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| FormatError::Config(format!("Failed to serialize configuration: {}", e)))
    }

    fn validate(&self) -> FormatResult<()> {
        let region = &self.center_region;
        if region.first_row > region.last_row || region.first_col > region.last_col {
            return Err(FormatError::Config(format!(
                "center_region is inverted: rows {}..={}, columns {}..={}",
                region.first_row, region.last_row, region.first_col, region.last_col
            )));
        }
        if self.table_name.trim().is_empty() {
            return Err(FormatError::Config("table_name must not be empty".into()));
        }
        Ok(())
    }
}
