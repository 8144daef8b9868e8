use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use xsd_lexical_core::WhiteSpace;

mod batch;
mod kind;

use batch::{BatchFile, format_report_text, run_batch};
use kind::XsdKind;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
}

/// Whitespace facet selectable on the command line.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliWhiteSpace {
    Preserve,
    Replace,
    Collapse,
}

impl From<CliWhiteSpace> for WhiteSpace {
    fn from(mode: CliWhiteSpace) -> Self {
        match mode {
            CliWhiteSpace::Preserve => Self::Preserve,
            CliWhiteSpace::Replace => Self::Replace,
            CliWhiteSpace::Collapse => Self::Collapse,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "xsd-lex")]
#[command(about = "Check and canonicalize XML Schema lexical values")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode values as an XSD type and print their canonical form.
    Check(CheckArgs),
    /// Check every case listed in a YAML batch file.
    Batch(BatchArgs),
    /// Apply a whiteSpace facet to text.
    Normalize(NormalizeArgs),
    /// Write a starter batch file.
    Init(InitArgs),
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// XSD type name (e.g. date, dateTime, byte, base64Binary).
    #[arg(value_name = "TYPE")]
    kind: XsdKind,
    /// Lexical values to decode.
    #[arg(required = true)]
    values: Vec<String>,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Path to the batch YAML file.
    input: PathBuf,
    /// Report format.
    #[arg(long, default_value = "text")]
    format: CliOutputFormat,
    /// Also write the report to this path.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct NormalizeArgs {
    /// Whitespace handling mode.
    #[arg(long, default_value = "collapse")]
    mode: CliWhiteSpace,
    /// Text to normalize.
    text: String,
}

#[derive(Debug, Args)]
struct InitArgs {
    /// Path of the batch YAML file to create.
    output: PathBuf,
    /// Overwrite an existing file.
    #[arg(long)]
    force: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Check(args) => run_check(args),
        Command::Batch(args) => run_batch_file(args),
        Command::Normalize(args) => run_normalize(args),
        Command::Init(args) => run_init(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let mut rejected = 0usize;
    for value in &args.values {
        match args.kind.canonicalize(value) {
            Ok(canonical) => println!("{canonical}"),
            Err(err) => {
                eprintln!("{value:?}: {err}");
                rejected += 1;
            }
        }
    }

    if rejected > 0 {
        return Err(format!(
            "{rejected} of {} value(s) rejected as {}",
            args.values.len(),
            args.kind
        ));
    }
    Ok(())
}

fn run_batch_file(args: BatchArgs) -> Result<(), String> {
    let batch = BatchFile::load(&args.input)
        .map_err(|err| format!("Failed to load '{}': {err}", args.input.display()))?;
    info!(path = %args.input.display(), cases = batch.cases.len(), "Loaded batch file");

    let report = run_batch(&batch);
    let raw = match args.format {
        CliOutputFormat::Text => format_report_text(&report),
        CliOutputFormat::Json => serde_json::to_string_pretty(&report)
            .map_err(|err| format!("Failed to serialize report: {err}"))?,
    };

    print!("{raw}");
    if matches!(args.format, CliOutputFormat::Json) {
        println!();
    }

    if let Some(output) = &args.output {
        fs::write(output, &raw)
            .map_err(|err| format!("Failed to write '{}': {err}", output.display()))?;
    }

    if !report.all_passed() {
        return Err(format!(
            "{} of {} case(s) did not match expectation",
            report.failed, report.total
        ));
    }
    Ok(())
}

fn run_normalize(args: NormalizeArgs) -> Result<(), String> {
    let mode: WhiteSpace = args.mode.into();
    println!("{}", mode.apply(&args.text));
    Ok(())
}

fn run_init(args: InitArgs) -> Result<(), String> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "'{}' already exists (use --force to overwrite)",
            args.output.display()
        ));
    }
    BatchFile::starter()
        .save(&args.output)
        .map_err(|err| format!("Failed to write '{}': {err}", args.output.display()))?;
    println!("Wrote starter batch file '{}'.", args.output.display());
    Ok(())
}
