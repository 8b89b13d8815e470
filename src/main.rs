use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use icontrace::{default_project_root, run, tool_dir, ConverterConfig, PotraceTracer, RunReport};

/// With no flags, converts `<project>/assets/icons/imports/*.png` into
/// `<project>/assets/icons/svgs/*.svg`.
#[derive(Parser)]
#[command(name = "icontrace")]
#[command(author, version, about = "Convert PNG icons into 1024x1024 monochrome SVGs with potrace", long_about = None)]
struct Cli {
    /// Project whose assets/icons folders are used
    #[arg(long)]
    project_root: Option<PathBuf>,

    /// Override the PNG input directory
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Override the SVG output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Gray level below which a pixel becomes black
    #[arg(long, default_value = "128")]
    threshold: u8,

    /// Width and height written into every SVG
    #[arg(long, default_value = "1024")]
    size: u32,

    /// Tracer executable
    #[arg(long, default_value = "potrace")]
    potrace: String,

    /// Exit with status 1 if any file fails to convert
    #[arg(long)]
    strict: bool,

    /// Write a JSON report of the run
    #[arg(long)]
    report: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = build_config(&cli);

    println!("Tool directory: {}", tool_dir().display());
    println!("Project root: {}", config.project_root.display());
    println!("Input directory: {}", config.input_dir.display());
    println!("Output directory: {}", config.output_dir.display());

    let tracer = PotraceTracer::new(config.tracer_program.clone());
    let summary = run(&config, &tracer)?;

    println!(
        "Done: {} converted, {} skipped, {} failed",
        summary.converted(),
        summary.skipped(),
        summary.failed()
    );

    if let Some(path) = &cli.report {
        let report = RunReport::new(&summary, &config.input_dir, &config.output_dir, config.target_size);
        report.write_json(path)?;
        info!("Report written to {:?}", path);
    }

    if config.strict && summary.has_failures() {
        anyhow::bail!("{} file(s) failed to convert", summary.failed());
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn build_config(cli: &Cli) -> ConverterConfig {
    let root = cli.project_root.clone().unwrap_or_else(default_project_root);
    let mut config = ConverterConfig::from_project_root(root);

    if let Some(input) = &cli.input {
        config.input_dir = input.clone();
    }
    if let Some(output) = &cli.output {
        config.output_dir = output.clone();
    }
    config.threshold = cli.threshold;
    config.target_size = cli.size;
    config.tracer_program = cli.potrace.clone();
    config.strict = cli.strict;

    config
}
