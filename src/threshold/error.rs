use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThresholdError {
    /// A record's best alignment fell below the hard floor. Unconditional
    /// failure, however well the rest of the collection scores.
    #[error("takeaway {index} best overlap {ratio:.4} is below the hard floor {floor}")]
    HardFloor { index: usize, ratio: f64, floor: f64 },

    /// A record's raw span exceeds the configured page cap.
    #[error("takeaway {index} spans {span} pages, cap is {max}")]
    SpanExceeded { index: usize, span: u64, max: u64 },

    /// Fewer than N−1 records reached the soft quality ratio.
    #[error("only {strong} takeaways reached the soft ratio {soft_ratio}, {required} required")]
    TooFewStrong {
        strong: usize,
        required: usize,
        soft_ratio: f64,
    },
}
