//! Citegrade library crate (used by the CLI binary and integration tests).
//!
//! A deterministic grading engine for structured takeaway extraction: given a
//! producer's raw JSON output and a per-sample configuration row, it checks
//! schema, citation-token format, and page locality, and collapses the result
//! to a single float: `1.0` or `0.0`, nothing in between.
//!
//! # Public API Surface
//!
//! - [`grade`], [`grade_row`] - the production float contract
//! - [`diagnose`], [`diagnose_row`], [`GradeFailure`] - debug-only variant
//!   naming the first violated rule
//! - [`GradingConfig`], [`ContentPolicy`], [`ThresholdPolicy`] - per-call
//!   configuration with documented defaults
//! - [`PageInterval`], [`parse_page_range`] - citation span normalization
//! - [`overlap_ratio`], [`best_alignment`] - interval alignment scoring
//! - [`ExtractionRecord`] - the validated record shape
//!
//! The engine holds no state across calls and has no suspension points;
//! concurrent grading from many threads needs no coordination.

pub mod config;
pub mod constants;
pub mod grader;
pub mod overlap;
pub mod payload;
pub mod range;
pub mod schema;
pub mod threshold;

pub use config::{ConfigError, GradingConfig};
pub use constants::{DEFAULT_HARD_FLOOR_RATIO, DEFAULT_SOFT_QUALITY_RATIO};
pub use grader::{GradeFailure, diagnose, diagnose_row, grade, grade_row};
pub use overlap::{best_alignment, overlap_ratio};
pub use payload::{PayloadError, RawPayload};
pub use range::{PageInterval, RangeError, parse_page_range};
pub use schema::{ContentPolicy, ExtractionOutput, ExtractionRecord, SchemaError};
pub use threshold::{RecordAlignment, ThresholdError, ThresholdPolicy};
