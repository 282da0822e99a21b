use std::path::PathBuf;

use crate::report::DEFAULT_RESULTS_PATH;

pub const DEFAULT_FACTORS_PATH: &str = "emission_factors.csv";

/// Example average for an individual per year, in kg CO2.
pub const DEFAULT_AVERAGE_KG: f64 = 16.2;

/// Reference values for the comparison and suggestion messages.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeConfig {
    pub average_kg: f64,
    /// Totals above this get the transport advice.
    pub high_threshold: f64,
    /// Totals above this (and not above `high_threshold`) get the diet/energy advice.
    pub moderate_threshold: f64,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            average_kg: DEFAULT_AVERAGE_KG,
            high_threshold: 20.0,
            moderate_threshold: 10.0,
        }
    }
}

/// Everything a session needs besides the factor table and the console.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub factors_path: PathBuf,
    pub results_path: PathBuf,
    /// SVG destination; no file when `None`.
    pub chart_path: Option<PathBuf>,
    pub show_chart: bool,
    pub chart_width: usize,
    pub narrative: NarrativeConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            factors_path: PathBuf::from(DEFAULT_FACTORS_PATH),
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
            chart_path: None,
            show_chart: true,
            chart_width: 50,
            narrative: NarrativeConfig::default(),
        }
    }
}
