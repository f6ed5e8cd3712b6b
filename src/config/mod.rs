//! Grading configuration decoded from an external dataset row.
//!
//! One row per grading call. Only `expected_takeaway_count` is required;
//! every threshold has a documented default and the target intervals are
//! optional (no targets means schema/format-only grading). Rows may carry the
//! scope as a single interval, a page band, or a list of disjoint clusters;
//! all three shapes collapse into one target list here, which is what lets a
//! single engine replace the per-variant grader copies.

pub mod error;


pub use error::ConfigError;

use serde::Deserialize;
use serde_json::Value;

use crate::range::PageInterval;
use crate::schema::ContentPolicy;
use crate::threshold::ThresholdPolicy;

/// Full configuration for one grading call. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct GradingConfig {
    /// Exact record count the payload must carry.
    pub expected_takeaway_count: usize,
    /// Permitted scope zones. Empty means no locality grading.
    pub targets: Vec<PageInterval>,
    /// Optional content rules applied by the schema validator.
    pub content: ContentPolicy,
    /// Hard floor, soft quality ratio, and span cap.
    pub thresholds: ThresholdPolicy,
}

/// Wire shape of a dataset row. Unknown keys are ignored; dataset rows carry
/// plenty of columns this engine does not read.
#[derive(Debug, Deserialize)]
struct RawRow {
    expected_takeaway_count: usize,
    scope_interval: Option<[u32; 2]>,
    page_band: Option<[u32; 2]>,
    cluster_intervals: Option<Vec<[u32; 2]>>,
    hard_floor_ratio: Option<f64>,
    soft_quality_ratio: Option<f64>,
    max_takeaway_span_pages: Option<u64>,
    min_claim_char_len: Option<usize>,
    min_scope_keywords: Option<usize>,
    banned_terms: Option<Vec<String>>,
    required_terms: Option<Vec<String>>,
}

impl GradingConfig {
    /// Creates a configuration with the given count bound, no targets, and
    /// default thresholds.
    pub fn new(expected_takeaway_count: usize) -> Self {
        Self {
            expected_takeaway_count,
            targets: Vec::new(),
            content: ContentPolicy::default(),
            thresholds: ThresholdPolicy::default(),
        }
    }

    /// Adds one target zone.
    pub fn target(mut self, interval: PageInterval) -> Self {
        self.targets.push(interval);
        self
    }

    /// Replaces the target set.
    pub fn targets(mut self, targets: Vec<PageInterval>) -> Self {
        self.targets = targets;
        self
    }

    pub fn content(mut self, content: ContentPolicy) -> Self {
        self.content = content;
        self
    }

    pub fn thresholds(mut self, thresholds: ThresholdPolicy) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Decodes a dataset row (a JSON mapping) into a validated configuration.
    ///
    /// Absent optional values take the documented defaults; that substitution
    /// is the only recovery the engine performs. A row that fails to decode
    /// or validate fails the grading call closed.
    pub fn from_row(row: &Value) -> Result<Self, ConfigError> {
        let raw: RawRow = serde_json::from_value(row.clone())?;

        let mut targets = Vec::new();
        if let Some([s, e]) = raw.scope_interval {
            targets.push(PageInterval::new(s, e));
        }
        if let Some([s, e]) = raw.page_band {
            targets.push(PageInterval::new(s, e));
        }
        if let Some(clusters) = raw.cluster_intervals {
            targets.extend(clusters.into_iter().map(|[s, e]| PageInterval::new(s, e)));
        }

        let thresholds = ThresholdPolicy {
            hard_floor_ratio: raw
                .hard_floor_ratio
                .unwrap_or(crate::constants::DEFAULT_HARD_FLOOR_RATIO),
            soft_quality_ratio: raw
                .soft_quality_ratio
                .unwrap_or(crate::constants::DEFAULT_SOFT_QUALITY_RATIO),
            max_span_pages: raw.max_takeaway_span_pages,
        };

        let content = ContentPolicy {
            min_claim_chars: raw.min_claim_char_len,
            min_scope_keywords: raw.min_scope_keywords,
            banned_terms: raw.banned_terms.unwrap_or_default(),
            required_terms: raw.required_terms.unwrap_or_default(),
        };

        let config = Self {
            expected_takeaway_count: raw.expected_takeaway_count,
            targets,
            content,
            thresholds,
        };
        config.validate()?;

        Ok(config)
    }

    /// Checks basic invariants: a positive count bound, ratios inside
    /// `0.0..=1.0`, a positive span cap when one is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expected_takeaway_count == 0 {
            return Err(ConfigError::ZeroExpectedCount);
        }

        check_ratio("hard_floor_ratio", self.thresholds.hard_floor_ratio)?;
        check_ratio("soft_quality_ratio", self.thresholds.soft_quality_ratio)?;

        if self.thresholds.max_span_pages == Some(0) {
            return Err(ConfigError::ZeroSpanCap);
        }

        Ok(())
    }
}

fn check_ratio(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::RatioOutOfRange { name, value });
    }
    Ok(())
}
