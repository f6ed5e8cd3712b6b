//! Cross-cutting, shared constants.
//!
//! Threshold defaults live here rather than in the modules that apply them so
//! that configuration parsing and threshold enforcement cannot drift apart.

/// Default per-record hard floor: a takeaway whose best overlap ratio falls
/// below this fails the whole grading call.
pub const DEFAULT_HARD_FLOOR_RATIO: f64 = 0.5;

/// Default soft quality bar: a takeaway at or above this ratio counts as
/// strongly anchored. At least N−1 of N takeaways must reach it.
pub const DEFAULT_SOFT_QUALITY_RATIO: f64 = 0.8;

/// Wire name of the takeaway list in the payload root.
pub const TAKEAWAYS_FIELD: &str = "takeaways";

/// Wire names of the five required takeaway fields.
pub const ID_FIELD: &str = "id";
pub const TITLE_FIELD: &str = "title";
pub const CLAIM_FIELD: &str = "claim";
pub const SCOPE_KEYWORDS_FIELD: &str = "scope_keywords";
pub const PAGE_RANGE_FIELD: &str = "approx_page_range";

/// All required takeaway fields, in the order they are checked.
pub const REQUIRED_RECORD_FIELDS: [&str; 5] = [
    ID_FIELD,
    TITLE_FIELD,
    CLAIM_FIELD,
    SCOPE_KEYWORDS_FIELD,
    PAGE_RANGE_FIELD,
];
