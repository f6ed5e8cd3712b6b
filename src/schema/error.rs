use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Record count differs from the configured bound. Exact equality is
    /// required; count drift is itself a defect under test.
    #[error("expected {expected} takeaways, got {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("takeaway {index} is not a JSON object")]
    RecordNotObject { index: usize },

    #[error("takeaway {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("takeaway {index} field '{field}' must be a string")]
    NotAString { index: usize, field: &'static str },

    #[error("takeaway {index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("takeaway {index} field 'scope_keywords' must be an array of strings")]
    KeywordsNotStringArray { index: usize },

    #[error("takeaway id '{id}' appears more than once")]
    DuplicateId { id: String },

    #[error("takeaway {index} claim is {len} chars, minimum is {min}")]
    ClaimTooShort { index: usize, len: usize, min: usize },

    #[error("takeaway {index} has {count} scope keywords, minimum is {min}")]
    TooFewKeywords {
        index: usize,
        count: usize,
        min: usize,
    },

    #[error("takeaway {index} claim contains banned term '{term}'")]
    BannedTerm { index: usize, term: String },

    #[error("takeaway {index} claim contains none of the required terms")]
    MissingRequiredTerm { index: usize },
}
