//! Cuckoo CLI — runs cuckoo search experiments from the command line
//!
//! Settings come from an optional YAML/JSON config file; flags override it.

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use cuckoo_landscape::{run_batch, ExperimentConfig, FitnessLandscape, LandscapeKind, SearchReport};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cuckoo", version, about = "Cuckoo search over gridded 2D landscapes")]
struct Cli {
    /// Experiment config file (.yaml, .yml or .json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one or more seeded searches
    Run {
        /// Landscape to optimize
        #[arg(long)]
        landscape: Option<LandscapeKind>,

        /// Number of iterations per run
        #[arg(long)]
        iterations: Option<usize>,

        /// Number of nests
        #[arg(long)]
        individuals: Option<usize>,

        /// Lévy step scale
        #[arg(long)]
        alpha: Option<f64>,

        /// Lévy distribution scale
        #[arg(long)]
        tail: Option<f64>,

        /// Grid samples per axis
        #[arg(long)]
        resolution: Option<usize>,

        /// Seed of the first run
        #[arg(long)]
        seed: Option<u64>,

        /// Number of independent runs
        #[arg(long)]
        runs: Option<usize>,
    },
    /// Show every landscape's extrema over the configured domain
    Landscapes,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => ExperimentConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ExperimentConfig::default(),
    };

    match cli.command {
        Commands::Run { landscape, iterations, individuals, alpha, tail, resolution, seed, runs } => {
            if let Some(v) = landscape {
                config.landscape = v;
            }
            if let Some(v) = iterations {
                config.iterations = v;
            }
            if let Some(v) = individuals {
                config.search.num_individuals = v;
            }
            if let Some(v) = alpha {
                config.search.step_scale = v;
            }
            if let Some(v) = tail {
                config.search.tail_parameter = v;
            }
            if let Some(v) = resolution {
                config.resolution = v;
            }
            if let Some(v) = seed {
                config.seed = v;
            }
            if let Some(v) = runs {
                config.runs = v;
            }
            config.validate()?;
            run_experiment(&config, &cli.format)
        }
        Commands::Landscapes => show_landscapes(&config, &cli.format),
    }
}

fn run_experiment(config: &ExperimentConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let landscape = config.build_landscape()?;
    let reports = run_batch(&landscape, &config.search, config.iterations, &config.seeds())?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Csv => {
            println!("seed,best_fitness,max_fitness,replacements,iterations");
            for r in &reports {
                println!(
                    "{},{},{},{},{}",
                    seed_label(r),
                    r.best_fitness,
                    landscape.max_fitness(),
                    r.replacements,
                    r.iterations
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Seed", "Best fitness", "Max fitness", "Replacements", "Best nest"]);

            for r in &reports {
                table.add_row(vec![
                    seed_label(r),
                    format!("{:.4}", r.best_fitness),
                    format!("{:.4}", landscape.max_fitness()),
                    r.replacements.to_string(),
                    best_nest(&landscape, r),
                ]);
            }

            println!("{}", table);
            println!(
                "{} run(s) of {} iterations on {}",
                reports.len(),
                config.iterations,
                landscape.kind()
            );
        }
    }

    Ok(())
}

fn show_landscapes(config: &ExperimentConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let landscapes = LandscapeKind::ALL
        .iter()
        .map(|&kind| FitnessLandscape::new(kind, config.bounds, config.resolution))
        .collect::<Result<Vec<_>, _>>()?;

    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = landscapes
                .iter()
                .map(|l| {
                    serde_json::json!({
                        "landscape": l.kind(),
                        "min_value": l.min_value(),
                        "max_value": l.max_value(),
                        "max_fitness": l.max_fitness(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Csv => {
            println!("landscape,min_value,max_value,max_fitness");
            for l in &landscapes {
                println!("{},{},{},{}", l.kind(), l.min_value(), l.max_value(), l.max_fitness());
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Landscape", "Min raw", "Max raw", "Max fitness"]);
            for l in &landscapes {
                table.add_row(vec![
                    l.kind().to_string(),
                    format!("{:.4}", l.min_value()),
                    format!("{:.4}", l.max_value()),
                    format!("{:.4}", l.max_fitness()),
                ]);
            }
            println!("{}", table);
        }
    }

    Ok(())
}

fn seed_label(report: &SearchReport) -> String {
    report.seed.map(|s| s.to_string()).unwrap_or_default()
}

/// Highest-scoring nest of the final population.
fn best_nest(landscape: &FitnessLandscape, report: &SearchReport) -> String {
    report
        .population
        .iter()
        .map(|p| (p, landscape.evaluate_fitness(p)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(p, _)| format!("({:.3}, {:.3})", p.x, p.y))
        .unwrap_or_default()
}
