use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use carbon_footprint::config::{DEFAULT_AVERAGE_KG, DEFAULT_FACTORS_PATH};
use carbon_footprint::report::DEFAULT_RESULTS_PATH;
use carbon_footprint::{run_session, EmissionFactorTable, NarrativeConfig, Settings};

/// Estimate your carbon footprint from travel and energy use.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// CSV with `activity` and `emission_factor` columns.
    #[arg(long, env = "CARBON_FACTORS", default_value = DEFAULT_FACTORS_PATH)]
    factors: PathBuf,

    /// Results CSV; overwritten on every run.
    #[arg(long, env = "CARBON_OUTPUT", default_value = DEFAULT_RESULTS_PATH)]
    output: PathBuf,

    /// Also save the chart as an SVG image.
    #[arg(long, env = "CARBON_CHART")]
    chart: Option<PathBuf>,

    /// Skip the console chart.
    #[arg(long)]
    no_chart: bool,

    /// Reference annual average in kg CO2.
    #[arg(long, default_value_t = DEFAULT_AVERAGE_KG)]
    average: f64,

    /// Debug logging unless RUST_LOG is set.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_settings(self) -> Settings {
        Settings {
            factors_path: self.factors,
            results_path: self.output,
            chart_path: self.chart,
            show_chart: !self.no_chart,
            narrative: NarrativeConfig {
                average_kg: self.average,
                ..NarrativeConfig::default()
            },
            ..Settings::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let settings = cli.into_settings();
    let table = EmissionFactorTable::load(&settings.factors_path)
        .context("cannot start without emission factors")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&table, &settings, stdin.lock(), stdout.lock())
        .context("carbon footprint session failed")?;
    Ok(())
}
