use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::calculator::Assessment;
use crate::error::FootprintError;

pub const DEFAULT_RESULTS_PATH: &str = "carbon_footprint_results.csv";

const HEADER: [&str; 3] = ["Activity", "Distance/Consumption", "Emissions (kg CO2)"];
const TOTAL_LABEL: &str = "Total Emissions";

/// Write the results table to `path`, replacing any existing file.
pub fn save_results(path: impl AsRef<Path>, assessment: &Assessment) -> Result<(), FootprintError> {
    let path = path.as_ref();
    let persist_err = |reason: String| FootprintError::Persist {
        path: path.display().to_string(),
        reason,
    };

    let file = File::create(path).map_err(|e| persist_err(e.to_string()))?;
    write_results(file, assessment).map_err(|e| persist_err(e.to_string()))?;
    info!(path = %path.display(), rows = assessment.lines().len(), "saved results");
    Ok(())
}

/// One row per entry, then a total row with an empty middle field.
pub fn write_results<W: Write>(writer: W, assessment: &Assessment) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for line in assessment.lines() {
        wtr.write_record([
            line.activity.clone(),
            line.quantity.to_string(),
            line.emissions.to_string(),
        ])?;
    }
    wtr.write_record([TOTAL_LABEL.to_string(), String::new(), assessment.total().to_string()])?;
    wtr.flush()?;
    Ok(())
}
