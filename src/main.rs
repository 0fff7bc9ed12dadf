use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use excel_segregate::options::{DEFAULT_COLUMN, DEFAULT_HEADER_ROWS};
use excel_segregate::{SegregateOptions, SheetSelector, preview, segregate};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source .xlsx file
    #[arg(default_value = "test.xlsx")]
    input: PathBuf,

    /// Sheet name or 0-based index to read (default: first sheet)
    #[arg(long, short = 's')]
    sheet: Option<SheetSelector>,

    /// Customer code column: letter like F, 1-based index, or header text
    #[arg(long, short = 'c', default_value = DEFAULT_COLUMN)]
    column: String,

    /// Output .xlsx path (default: <input>_segregated.xlsx)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Number of header rows at the top to copy verbatim
    #[arg(long, short = 'r', default_value_t = DEFAULT_HEADER_ROWS)]
    header_rows: u32,

    /// Print the sheets that would be created as JSON, without writing anything
    #[arg(long, short = 'n')]
    dry_run: bool,

    /// Debug logging
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        tracing::Level::ERROR
    } else if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let options = SegregateOptions {
        sheet: cli.sheet.unwrap_or_default(),
        column: cli.column,
        header_rows: cli.header_rows,
        output: cli.output,
    };

    // Dry run only reads values and prints the plan
    if cli.dry_run {
        let plan = preview(&cli.input, &options)
            .with_context(|| format!("Unable to inspect {}", cli.input.display()))?;
        let json = serde_json::to_string_pretty(&plan).context("Failed to serialize preview to JSON")?;
        println!("{}", json);
        return Ok(());
    }

    let report = segregate(&cli.input, &options)
        .with_context(|| format!("Failed to segregate {}", cli.input.display()))?;

    if let Some(path) = &report.output {
        println!("Created: {}", path.display());
    }

    Ok(())
}
