use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use volley_sheet::cli;

#[derive(Parser)]
#[command(name = "volley-sheet")]
#[command(about = "Turn a volleyball stats CSV into a formatted Excel table")]
#[command(long_about = "Volley Sheet - volleyball stats CSV to formatted Excel table

Reads a match statistics CSV export and writes an .xlsx workbook:
  - Column headers relabeled in Polish (Attack K → Punkty, Serve SA → Asy, ...)
  - Category row above the headers (Atak, Serwis, Przyjęcie, Obrona, Blok),
    merged across adjacent columns of the same category
  - Numbers formatted as 0.00, percentage columns as 0.00%
  - Team names in A13/A14, block B3:U14 centered
  - Everything wrapped in an Excel table named DataTable

COMMANDS:
  format   - Convert a CSV file to a formatted .xlsx
  config   - Print the default configuration as YAML

EXAMPLES:
  volley-sheet format Stats.csv StatsFormatted.xlsx
  volley-sheet format Stats.csv out.xlsx --dry-run
  volley-sheet config > volley.yaml
  volley-sheet format Stats.csv out.xlsx --config volley.yaml")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert a volleyball stats CSV into a formatted Excel table.

The CSV is split on bare commas (no quoting). The first line holds the
column headers, every following line is one data row. Numeric fields become
number cells, everything else is kept as text.

Use --config to override sheet/table names, number formats, the team label
rows or the centered block (see 'volley-sheet config').")]
    /// Convert a CSV file to a formatted .xlsx
    Format {
        /// Path to the stats CSV file
        input: PathBuf,

        /// Output Excel file path (.xlsx)
        output: PathBuf,

        /// YAML configuration file
        #[arg(short, long, env = "VOLLEY_SHEET_CONFIG")]
        config: Option<PathBuf>,

        /// Show the resulting layout without writing the workbook
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Show verbose conversion steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the default configuration as YAML
    Config,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "volley_sheet=debug"
    } else {
        "volley_sheet=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

impl Commands {
    /// Prefix printed before an error from this command
    fn failure_message(&self) -> &'static str {
        match self {
            Commands::Format { .. } => "Error while converting CSV to Excel:",
            Commands::Config => "Error while printing configuration:",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let failure_message = cli.command.failure_message();

    let result = match cli.command {
        Commands::Format {
            input,
            output,
            config,
            dry_run,
            verbose,
        } => {
            init_tracing(verbose);
            cli::format(input, output, config, dry_run, verbose)
        }

        Commands::Config => cli::config(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", format!("❌ {}", failure_message).bold().red(), e);
            ExitCode::FAILURE
        }
    }
}
