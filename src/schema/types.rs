/// One claimed insight with a citation span, as received from the producer.
///
/// Immutable once constructed; the engine only reads it. `page_range` is the
/// raw token (`p38-42`), not yet parsed; normalization is a later stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRecord {
    /// Unique within one output, not globally.
    pub id: String,
    /// Non-empty short heading.
    pub title: String,
    /// The core insight sentence.
    pub claim: String,
    /// Ordered keywords anchoring the claim to its scope.
    pub scope_keywords: Vec<String>,
    /// Raw citation token, wire name `approx_page_range`.
    pub page_range: String,
}

/// Ordered sequence of validated records; length equals the expected count.
pub type ExtractionOutput = Vec<ExtractionRecord>;
