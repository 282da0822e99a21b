use thiserror::Error;

/// Errors raised while loading factors, computing emissions, or writing reports.
#[derive(Debug, Error)]
pub enum FootprintError {
    #[error("failed to load emission factors from {source_name}: {reason}")]
    DataLoad { source_name: String, reason: String },
    #[error("unknown activity: {0:?}")]
    UnknownActivity(String),
    #[error("invalid quantity {input:?}: {reason}")]
    InvalidQuantity { input: String, reason: &'static str },
    #[error("failed to write results to {path}: {reason}")]
    Persist { path: String, reason: String },
    #[error("failed to render chart: {0}")]
    Chart(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

