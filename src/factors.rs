use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::FootprintError;

/// One row of the emission factor file.
/// Extra columns in the file are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorRow {
    pub activity: String,
    /// kg CO2-equivalent per unit of activity.
    pub emission_factor: f64,
}

/// Immutable lookup table from activity name to emission factor.
#[derive(Debug, Clone, Default)]
pub struct EmissionFactorTable {
    rows: Vec<FactorRow>,
    index: HashMap<String, usize>,
}

impl EmissionFactorTable {
    /// Load a comma-delimited factor file with `activity` and `emission_factor` columns.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FootprintError> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|e| FootprintError::DataLoad {
            source_name: source_name.clone(),
            reason: e.to_string(),
        })?;
        let table = Self::from_reader(file, &source_name)?;
        info!(source = %source_name, rows = table.len(), "loaded emission factors");
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R, source_name: &str) -> Result<Self, FootprintError> {
        let load_err = |reason: String| FootprintError::DataLoad {
            source_name: source_name.to_string(),
            reason,
        };

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().map_err(|e| load_err(e.to_string()))?;
        for required in ["activity", "emission_factor"] {
            if !headers.iter().any(|h| h == required) {
                return Err(load_err(format!("missing required column {required:?}")));
            }
        }

        let mut rows = Vec::new();
        for record in rdr.deserialize::<FactorRow>() {
            let row = record.map_err(|e| load_err(e.to_string()))?;
            if !row.emission_factor.is_finite() {
                return Err(load_err(format!(
                    "emission factor for {:?} is not finite",
                    row.activity
                )));
            }
            rows.push(row);
        }

        Self::try_from_rows(rows).map_err(load_err)
    }

    /// Build a table from in-memory rows, with the same duplicate check as a file load.
    pub fn from_rows(rows: impl IntoIterator<Item = FactorRow>) -> Result<Self, FootprintError> {
        Self::try_from_rows(rows.into_iter().collect()).map_err(|reason| {
            FootprintError::DataLoad {
                source_name: "<rows>".to_string(),
                reason,
            }
        })
    }

    fn try_from_rows(rows: Vec<FactorRow>) -> Result<Self, String> {
        let mut index = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if index.insert(row.activity.clone(), i).is_some() {
                return Err(format!("duplicate activity {:?}", row.activity));
            }
        }
        Ok(Self { rows, index })
    }

    /// Exact, case-sensitive lookup. There is no default factor.
    pub fn lookup(&self, activity: &str) -> Result<f64, FootprintError> {
        self.index
            .get(activity)
            .map(|&i| self.rows[i].emission_factor)
            .ok_or_else(|| FootprintError::UnknownActivity(activity.to_string()))
    }

    /// Activity names in file order.
    pub fn activities(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.activity.as_str())
    }

    pub fn rows(&self) -> &[FactorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
