//! The grading pipeline.
//!
//! One call walks `decode → validate → (per record) normalize → align →
//! floor → soft rule` and collapses the outcome to a single float: `1.0` on
//! pass, `0.0` on any violation. No stage runs after a failure, nothing is
//! retried, and no error escapes [`grade`]: the production boundary carries
//! a float and no root-cause detail.
//!
//! The detail is not lost, only demoted: [`diagnose`] is the same pipeline
//! returning the first violated rule as a typed [`GradeFailure`], and
//! [`grade`] is a thin wrapper over it. Both are pure functions of their
//! inputs; nothing is cached or shared across calls, so concurrent grading
//! needs no coordination.

pub mod error;


pub use error::GradeFailure;

use serde_json::Value;
use tracing::{debug, info};

use crate::config::GradingConfig;
use crate::threshold::RecordAlignment;
use crate::{overlap, payload, range, schema};

/// Grades one payload against a parsed configuration.
///
/// Returns exactly `1.0` or `0.0`. Never panics, never errors; the failure
/// stage is logged at debug level and the verdict at info level.
pub fn grade(raw: &str, config: &GradingConfig) -> f64 {
    collapse(diagnose(raw, config))
}

/// Grades one payload against a raw dataset row.
///
/// A row that fails to decode or validate grades `0.0`, the same fail-closed
/// collapse as a malformed payload.
pub fn grade_row(raw: &str, row: &Value) -> f64 {
    collapse(diagnose_row(raw, row))
}

/// The pipeline behind [`grade`], reporting the first violated rule.
///
/// Debug-only surface: the production contract stays float-shaped, and this
/// function exists so a failing sample can be explained without re-running
/// the harness with different code.
pub fn diagnose(raw: &str, config: &GradingConfig) -> Result<(), GradeFailure> {
    let payload = payload::decode(raw)?;

    let records = schema::validate(
        payload.takeaways(),
        config.expected_takeaway_count,
        &config.content,
    )?;

    let mut alignments = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let interval = range::parse_page_range(&record.page_range)
            .map_err(|source| GradeFailure::Range { index, source })?;

        let alignment = RecordAlignment {
            index,
            interval,
            best_ratio: overlap::best_alignment(interval, &config.targets),
        };

        // Hard tier runs record by record, before later records are even
        // parsed; an egregious violation ends the call here.
        config.thresholds.check_record(&alignment)?;
        alignments.push(alignment);
    }

    config.thresholds.check_collection(&alignments)?;

    Ok(())
}

/// [`diagnose`] with the configuration row decoded first; a bad row is
/// itself the first violated rule.
pub fn diagnose_row(raw: &str, row: &Value) -> Result<(), GradeFailure> {
    let config = GradingConfig::from_row(row)?;
    diagnose(raw, &config)
}

fn collapse(outcome: Result<(), GradeFailure>) -> f64 {
    match outcome {
        Ok(()) => {
            info!(verdict = "pass", "grading call passed");
            1.0
        }
        Err(failure) => {
            debug!(%failure, "grading call rejected");
            info!(verdict = "fail", "grading call failed");
            0.0
        }
    }
}
