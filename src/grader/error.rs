use thiserror::Error;

use crate::config::ConfigError;
use crate::payload::PayloadError;
use crate::range::RangeError;
use crate::schema::SchemaError;
use crate::threshold::ThresholdError;

/// First rule a grading call violated. Every variant collapses to `0.0` at
/// the production boundary.
#[derive(Debug, Error)]
pub enum GradeFailure {
    #[error("payload rejected: {0}")]
    Payload(#[from] PayloadError),

    #[error("schema violation: {0}")]
    Schema(#[from] SchemaError),

    #[error("takeaway {index} range rejected: {source}")]
    Range {
        index: usize,
        #[source]
        source: RangeError,
    },

    #[error("threshold violation: {0}")]
    Threshold(#[from] ThresholdError),

    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),
}
