//! Independent sinks over a finished [`Assessment`](crate::calculator::Assessment):
//! the results table, the chart, and the narrative comparison.

pub mod chart;
pub mod narrative;
pub mod persist;

pub use chart::{render_text, save_svg};
pub use narrative::{narrate, write_narrative, Comparison, SuggestionTier};
pub use persist::{save_results, write_results, DEFAULT_RESULTS_PATH};
