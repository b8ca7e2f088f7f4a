use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use recidivism_report_to_csv::{
    ExtractionReport, PageFailureMode, ReportConfig, extract_report_to_csv,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "report2csv",
    version,
    about = "Extract the FY2020 Community Recidivism Report into CSV"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract the summary and employment CSV files.
    Extract(ExtractArgs),
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Input PDF path.
    #[arg(
        short,
        long,
        default_value = "communityrecidivismreport_fy2020starters_final.pdf"
    )]
    input: PathBuf,

    /// Output path of the per-page summary CSV.
    #[arg(long)]
    summary_out: Option<PathBuf>,

    /// Output path of the employment table CSV.
    #[arg(long)]
    employment_out: Option<PathBuf>,

    /// First document page (zero-based) to consider.
    #[arg(long)]
    page_start: Option<usize>,

    /// Last document page (zero-based, inclusive) to consider.
    #[arg(long)]
    page_end: Option<usize>,

    /// Skip malformed pages with a warning instead of aborting the run.
    #[arg(long)]
    skip_failed_pages: bool,

    /// Enable verbose warning output.
    #[arg(short, long)]
    verbose: bool,
}

fn build_config(args: &ExtractArgs) -> ReportConfig {
    let mut config = ReportConfig::default();
    if let Some(path) = &args.summary_out {
        config.summary_csv_path.clone_from(path);
    }
    if let Some(path) = &args.employment_out {
        config.employment_csv_path.clone_from(path);
    }
    if let Some(page_start) = args.page_start {
        config.page_start = page_start;
    }
    if let Some(page_end) = args.page_end {
        config.page_end = page_end;
    }
    if args.skip_failed_pages {
        config.failure_mode = PageFailureMode::SkipAndWarn;
    }
    config
}

fn log_report(report: &ExtractionReport, verbose: bool) {
    if report.warnings.is_empty() {
        return;
    }

    eprintln!("warning: {} issue(s) detected", report.warnings.len());
    if verbose {
        for warning in &report.warnings {
            eprintln!(
                "  - {:?} page={:?}: {}",
                warning.code, warning.page, warning.message
            );
        }
    }
}

fn run_extract(args: &ExtractArgs) -> Result<ExtractionReport> {
    let config = build_config(args);
    extract_report_to_csv(&args.input, &config)
        .with_context(|| format!("failed to extract report from '{}'", args.input.display()))
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("recidivism_report_to_csv=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract(args) => match run_extract(&args) {
            Ok(report) => {
                log_report(&report, args.verbose);
                println!(
                    "Data extraction complete: {} page record(s), {} employment row(s).",
                    report.record_count, report.employment_row_count
                );
                if report.record_count > 0 {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(2)
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::from(1)
            }
        },
    }
}
