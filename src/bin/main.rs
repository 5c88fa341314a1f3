use airfoil_convert::convert::{convert_files, OutputNaming, AF_SUFFIX};
use airfoil_convert::{Format, SUPPORTED_FORMATS};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "airfoil-convert", version)]
#[command(about = "Convert airfoil files into OpenVSP airfoil (.af) files", long_about = None)]
#[command(after_help = SUPPORTED_FORMATS)]
struct Cli {
    /// Names of the files to be converted
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Format of the input files
    #[arg(long, value_name = "FORMAT", default_value_t = Format::Selig)]
    format: Format,

    /// Write the .af files into this directory instead of next to the inputs
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Suffix given to the output files
    #[arg(long, value_name = "SUFFIX", default_value = AF_SUFFIX, allow_hyphen_values = true)]
    suffix: String,

    /// Append the suffix to the full input name instead of replacing its extension
    #[arg(long)]
    keep_extension: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("airfoil_convert={}", level))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(dir) = &cli.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed creating output directory {}", dir.display()))?;
    }

    let naming = OutputNaming::new(&cli.suffix, !cli.keep_extension, cli.output_dir.clone());
    let report = convert_files(&cli.files, cli.format, &naming);
    if report.is_success() {
        info!("converted {} file(s)", report.converted.len());
        Ok(ExitCode::SUCCESS)
    } else {
        warn!(
            "{} of {} file(s) failed to convert",
            report.failed.len(),
            cli.files.len()
        );
        Ok(ExitCode::FAILURE)
    }
}
