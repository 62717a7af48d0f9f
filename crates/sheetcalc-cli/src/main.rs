//! sheetcalc CLI - range aggregates and cleanup over CSV files

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use sheetcalc::prelude::*;
use sheetcalc::{column_totals, AggregateEvaluator, GridShape, RangeAddressResolver};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetcalc")]
#[command(author, version, about = "Evaluate ranges and clean up CSV grids")]
struct Cli {
    #[command(flatten)]
    csv: CsvArgs,

    /// Log evaluation details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CsvArgs {
    /// Field delimiter
    #[arg(short, long, default_value = ",", global = true)]
    delimiter: char,

    /// Treat the first record as a header (kept as row 1, never typed)
    #[arg(long, global = true)]
    header: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an aggregate over a range
    Eval {
        /// Input CSV file
        input: PathBuf,

        /// Operation: SUM, AVERAGE, MAX, MIN, COUNT or COUNTA
        #[arg(long)]
        op: String,

        /// Range such as A1:C3
        #[arg(short, long, conflicts_with_all = ["start", "end"])]
        range: Option<String>,

        /// First corner of the range
        #[arg(long, requires = "end")]
        start: Option<String>,

        /// Second corner of the range
        #[arg(long, requires = "start")]
        end: Option<String>,
    },

    /// Apply a data-quality operation and write the cleaned CSV
    Clean {
        /// Input CSV file
        input: PathBuf,

        /// Operation: TRIM, UPPER, LOWER, REMOVE_DUPLICATES or FIND_AND_REPLACE
        #[arg(long)]
        op: String,

        /// Pattern to find (FIND_AND_REPLACE)
        #[arg(long, default_value = "")]
        find: String,

        /// Replacement text (FIND_AND_REPLACE)
        #[arg(long, default_value = "")]
        replace: String,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the sum of every column
    Totals {
        /// Input CSV file
        input: PathBuf,
    },

    /// Show the shape and cell counts of a CSV file
    Info {
        /// Input CSV file
        input: PathBuf,
    },

    /// List the supported operations
    Ops,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Eval {
            input,
            op,
            range,
            start,
            end,
        } => eval(&cli.csv, &input, &op, range, start.zip(end)),
        Commands::Clean {
            input,
            op,
            find,
            replace,
            output,
        } => clean(&cli.csv, &input, &op, find, replace, output.as_deref()),
        Commands::Totals { input } => totals(&cli.csv, &input),
        Commands::Info { input } => show_info(&cli.csv, &input),
        Commands::Ops => list_ops(),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(io::stderr)
        .init();
}

impl CsvArgs {
    fn delimiter(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            bail!("Delimiter must be a single ASCII character, got '{}'", self.delimiter);
        }
        Ok(self.delimiter as u8)
    }

    fn read_options(&self) -> Result<CsvReadOptions> {
        Ok(CsvReadOptions {
            delimiter: self.delimiter()?,
            has_header: self.header,
            ..Default::default()
        })
    }

    fn write_options(&self) -> Result<CsvWriteOptions> {
        Ok(CsvWriteOptions {
            delimiter: self.delimiter()?,
            ..Default::default()
        })
    }
}

fn load(csv: &CsvArgs, input: &Path) -> Result<Grid> {
    tracing::debug!(
        path = %input.display(),
        delimiter = %csv.delimiter,
        header = csv.header,
        "reading csv"
    );
    CsvReader::read_file(input, &csv.read_options()?)
        .with_context(|| format!("Failed to open '{}'", input.display()))
}

fn eval(
    csv: &CsvArgs,
    input: &Path,
    op: &str,
    range: Option<String>,
    corners: Option<(String, String)>,
) -> Result<()> {
    let grid = load(csv, input)?;
    let shape = GridShape::of(&grid);

    let range = match (range, corners) {
        (Some(text), _) => RangeAddressResolver::resolve_range(shape, &text)
            .with_context(|| format!("Invalid range '{}'", text))?,
        (None, Some((start, end))) => RangeAddressResolver::resolve(shape, &start, &end)
            .with_context(|| format!("Invalid range '{}:{}'", start, end))?,
        (None, None) => bail!("Give either --range or both --start and --end"),
    };

    let value = AggregateEvaluator::evaluate(&grid, &range, op)
        .with_context(|| format!("Failed to evaluate {} over {}", op.trim(), range))?;
    println!("{}", value);
    Ok(())
}

fn clean(
    csv: &CsvArgs,
    input: &Path,
    op: &str,
    find: String,
    replace: String,
    output: Option<&Path>,
) -> Result<()> {
    let mut op: CleanupOp = op.parse().context("Unknown cleanup operation")?;
    if let CleanupOp::FindAndReplace { .. } = op {
        if find.is_empty() || replace.is_empty() {
            eprintln!("Warning: FIND_AND_REPLACE needs both --find and --replace; nothing changed");
        }
        op = CleanupOp::find_and_replace(find, replace);
    }

    let mut sheet = Spreadsheet::from_grid(load(csv, input)?);
    sheet
        .clean(&op)
        .with_context(|| format!("Failed to apply {}", op))?;

    let options = csv.write_options()?;
    if let Some(output_path) = output {
        CsvWriter::write_file(sheet.grid(), output_path, &options)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Wrote {} rows to '{}'",
            sheet.grid().row_count(),
            output_path.display()
        );
    } else {
        let stdout = io::stdout();
        CsvWriter::write(sheet.grid(), stdout.lock(), &options)
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn totals(csv: &CsvArgs, input: &Path) -> Result<()> {
    const BAR_WIDTH: f64 = 40.0;

    let grid = load(csv, input)?;
    let totals = column_totals(&grid);
    let peak = totals
        .iter()
        .map(|t| t.total.abs())
        .fold(0.0_f64, f64::max);

    let mut stdout = io::stdout().lock();
    for total in &totals {
        let bar = if peak > 0.0 {
            "#".repeat((total.total.abs() / peak * BAR_WIDTH).round() as usize)
        } else {
            String::new()
        };
        writeln!(stdout, "{:>4}  {:>12}  {}", total.label, total.total, bar)
            .context("Failed to write to stdout")?;
    }
    Ok(())
}

fn show_info(csv: &CsvArgs, input: &Path) -> Result<()> {
    let grid = load(csv, input)?;
    let (rows, cols) = grid.shape();

    println!("File: {}", input.display());
    println!("Shape: {} rows x {} columns", rows, cols);

    if let Some(range) = grid.full_range() {
        let summary = AggregateEvaluator::summarize(&grid, &range)?;
        println!("Range: {}", range);
        println!("Cells: {}", summary.cells);
        println!("Non-empty: {}", summary.non_empty);
        println!("Numeric: {}", summary.numeric);
    } else {
        println!("Range: empty");
    }

    Ok(())
}

fn list_ops() -> Result<()> {
    println!("Aggregates:");
    for op in Operation::ALL {
        println!("  {:<18} {}", op.name(), op.def().summary);
    }
    println!("Cleanup:");
    for name in CleanupOp::NAMES {
        println!("  {}", name);
    }
    Ok(())
}
