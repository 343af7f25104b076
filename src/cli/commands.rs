use crate::config::FormatterConfig;
use crate::core::{TableFormatter, GROUP_HEADER_ROW, HEADER_ROW};
use crate::error::FormatResult;
use crate::types::{CellValue, SheetLayout};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Column letter for a zero-based index (0 → A, 26 → AA)
fn column_letter(mut col: u16) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (col % 26) as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// A1-style reference for a zero-based cell
fn cell_ref(row: u32, col: u16) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

fn load_config(config: Option<&Path>) -> FormatResult<FormatterConfig> {
    match config {
        Some(path) => FormatterConfig::from_yaml_file(path),
        None => Ok(FormatterConfig::default()),
    }
}

/// Print header rows, merged regions and the table range of a layout
fn print_layout_summary(layout: &SheetLayout) {
    let header_row = layout.row(HEADER_ROW);
    let group_row = layout.row(GROUP_HEADER_ROW);
    let width = header_row.map(|r| r.width()).unwrap_or(0);

    println!("{}", "📋 Columns:".cyan());
    for col in 0..width {
        let header = header_row
            .and_then(|r| r.get(col))
            .and_then(|c| c.value.as_text())
            .unwrap_or("");
        let group = group_row
            .and_then(|r| r.get(col))
            .and_then(|c| c.value.as_text())
            .unwrap_or("");
        if group.is_empty() {
            println!("   {:>3}  {}", column_letter(col), header);
        } else {
            println!(
                "   {:>3}  {} {}",
                column_letter(col),
                header,
                format!("[{}]", group).bright_blue()
            );
        }
    }

    if !layout.merged_regions.is_empty() {
        println!("\n{}", "🔗 Merged group headers:".cyan());
        for region in &layout.merged_regions {
            println!(
                "   {}:{}  {} ({} columns)",
                cell_ref(region.row, region.first_col),
                cell_ref(region.row, region.last_col),
                region.label.bright_blue(),
                region.span()
            );
        }
    }

    if let Some(table) = &layout.table {
        println!(
            "\n{} {} {}:{}",
            "📊 Table:".cyan(),
            table.name.bold(),
            cell_ref(table.first_row, table.first_col),
            cell_ref(table.last_row, table.last_col)
        );
    }

    let text_cells = layout
        .rows
        .iter()
        .skip(2)
        .flat_map(|r| r.iter())
        .filter(|(_, c)| matches!(c.value, CellValue::Text(_)))
        .count();
    println!("   Data rows: {}", layout.rows.len().saturating_sub(2));
    println!("   Text cells: {}\n", text_cells);
}

/// Execute the format command
pub fn format(
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    dry_run: bool,
    verbose: bool,
) -> FormatResult<()> {
    println!("{}", "🏐 Volley Sheet - CSV to Excel".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    if dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No changes will be written\n".yellow()
        );
    }

    if verbose {
        if let Some(path) = &config {
            println!("{} {}", "⚙️  Loading configuration".cyan(), path.display());
        }
    }
    let config = load_config(config.as_deref())?;
    let formatter = TableFormatter::with_config(config);

    if verbose {
        println!("{}", "📖 Reading CSV file...".cyan());
    }
    let (document, layout) = formatter.plan(&input)?;

    if dry_run {
        print_layout_summary(&layout);
        println!("{}", "✅ Dry run complete".bold().green());
        return Ok(());
    }

    if verbose {
        print_layout_summary(&layout);
        println!("{}", "📊 Writing Excel file...".cyan());
    }

    let report = formatter.export(&document, &layout, &output)?;

    if verbose {
        println!(
            "   {} columns, {} data rows, {} merged group headers",
            report.columns, report.data_rows, report.merged_regions
        );
    }
    println!(
        "{}",
        format!(
            "✅ Excel file saved as '{}' with formatted table.",
            report.output.display()
        )
        .bold()
        .green()
    );

    Ok(())
}

/// Execute the config command: print the default configuration as YAML
pub fn config() -> FormatResult<()> {
    let yaml = FormatterConfig::default().to_yaml()?;
    print!("{}", yaml);
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
