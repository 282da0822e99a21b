//! Personal carbon footprint estimate from travel and energy use.
//!
//! Quantities typed at the console are multiplied by per-activity emission
//! factors loaded from a CSV table. The per-entry results and their total are
//! written to a results CSV, drawn as a bar chart, and compared with an average.

#![forbid(unsafe_code)]

pub mod calculator;
pub mod config;
pub mod entries;
pub mod error;
pub mod factors;
pub mod input;
pub mod quantity;
pub mod report;
pub mod session;

pub use calculator::{Assessment, Calculator, EmissionLine};
pub use config::{NarrativeConfig, Settings};
pub use entries::{Category, Entries};
pub use error::FootprintError;
pub use factors::{EmissionFactorTable, FactorRow};
pub use input::Prompter;
pub use quantity::Quantity;
pub use session::run_session;
