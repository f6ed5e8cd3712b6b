use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The row failed to decode: not a mapping, missing count, wrong types,
    /// negative numbers, malformed interval pairs.
    #[error("failed to decode configuration row: {0}")]
    Row(#[from] serde_json::Error),

    #[error("expected_takeaway_count must be a positive integer")]
    ZeroExpectedCount,

    #[error("{name} must be within 0.0..=1.0, got {value}")]
    RatioOutOfRange { name: &'static str, value: f64 },

    #[error("max_takeaway_span_pages must be positive")]
    ZeroSpanCap,
}
