//! Command-line front end: reads `(x, y)` samples and prints
//! `(x, persistence)` pairs, optionally with the persistence diagram.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use topf::io::{read_samples, write_tsv};
use topf::{transform, FilterWarning, PersistenceDiagram, TransformerConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Output {
    Tsv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Sample table (one `x y` pair or a single `y` per line); stdin if omitted
    input: Option<PathBuf>,

    /// JSON file with transformer options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also compute the persistence diagram
    #[arg(long)]
    diagram: bool,

    /// Keep only this many most persistent peaks
    #[arg(short = 'n', long)]
    n_peaks: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Output::Tsv)]
    output: Output,

    /// Print only samples with positive persistence
    #[arg(long)]
    peaks_only: bool,

    /// Print the Lp total persistence of the diagram instead of the samples
    #[arg(long, value_name = "P")]
    total_persistence: Option<f64>,
}

#[derive(Serialize)]
struct Report<'a> {
    points: &'a [(f64, f64)],
    diagram: Option<&'a PersistenceDiagram>,
    warnings: &'a [FilterWarning],
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("topf=info"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn load_config(args: &Args) -> anyhow::Result<TransformerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open config {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => TransformerConfig::default(),
    };

    if args.diagram || args.total_persistence.is_some() {
        config.calculate_persistence_diagram = true;
    }
    if let Some(n) = args.n_peaks {
        config.n_peaks = Some(n);
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let config = load_config(&args)?;

    let samples = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_samples(file)?
        }
        None => read_samples(io::stdin().lock())?,
    };
    info!(n_samples = samples.len(), ?config, "transforming");

    let out = transform(&samples, &config)?;
    for w in &out.warnings {
        warn!("{}", w);
    }

    if let Some(p) = args.total_persistence {
        let diagram = out.diagram.as_ref().context("diagram was not computed")?;
        println!("{}", diagram.total_persistence(p)?);
        return Ok(());
    }

    let points: Vec<(f64, f64)> = if args.peaks_only {
        out.points.iter().copied().filter(|&(_, p)| p > 0.0).collect()
    } else {
        out.points.clone()
    };

    let stdout = io::stdout();
    match args.output {
        Output::Tsv => write_tsv(BufWriter::new(stdout.lock()), &points)?,
        Output::Json => {
            let report = Report {
                points: &points,
                diagram: out.diagram.as_ref(),
                warnings: &out.warnings,
            };
            serde_json::to_writer_pretty(stdout.lock(), &report)?;
            println!();
        }
    }
    Ok(())
}
