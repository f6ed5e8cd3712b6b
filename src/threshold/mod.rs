//! Two-tier threshold aggregation.
//!
//! Per record, a **hard floor**: a best-alignment ratio below the floor, or a
//! raw span wider than the configured cap, fails the whole call immediately.
//! Across the collection, a **soft quality rule**: at least N−1 of N records
//! must reach the soft ratio. One marginal record is tolerated; an egregious
//! locality violation never is.

pub mod error;


pub use error::ThresholdError;

use crate::constants::{DEFAULT_HARD_FLOOR_RATIO, DEFAULT_SOFT_QUALITY_RATIO};
use crate::range::PageInterval;

/// Threshold configuration for one grading call.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdPolicy {
    /// Per-record minimum best-alignment ratio.
    pub hard_floor_ratio: f64,
    /// Ratio at which a record counts as strongly anchored.
    pub soft_quality_ratio: f64,
    /// Maximum allowed raw span in pages, when configured.
    pub max_span_pages: Option<u64>,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            hard_floor_ratio: DEFAULT_HARD_FLOOR_RATIO,
            soft_quality_ratio: DEFAULT_SOFT_QUALITY_RATIO,
            max_span_pages: None,
        }
    }
}

/// One record's normalized interval and its best alignment to the targets.
///
/// `best_ratio` is `None` when the configuration carries no target intervals;
/// locality checks are skipped for such calls, the span cap is not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordAlignment {
    pub index: usize,
    pub interval: PageInterval,
    pub best_ratio: Option<f64>,
}

impl ThresholdPolicy {
    /// Per-record tier: hard floor, then span cap. Either violation is
    /// terminal for the whole call regardless of the other records.
    pub fn check_record(&self, alignment: &RecordAlignment) -> Result<(), ThresholdError> {
        if let Some(ratio) = alignment.best_ratio {
            if ratio < self.hard_floor_ratio {
                return Err(ThresholdError::HardFloor {
                    index: alignment.index,
                    ratio,
                    floor: self.hard_floor_ratio,
                });
            }
        }

        if let Some(max) = self.max_span_pages {
            let span = alignment.interval.span();
            if span > max {
                return Err(ThresholdError::SpanExceeded {
                    index: alignment.index,
                    span,
                    max,
                });
            }
        }

        Ok(())
    }

    /// Collection tier: at least N−1 of the N records must be strongly
    /// anchored. A no-op when no targets were configured.
    pub fn check_collection(&self, alignments: &[RecordAlignment]) -> Result<(), ThresholdError> {
        let ratios: Vec<f64> = alignments.iter().filter_map(|a| a.best_ratio).collect();
        if ratios.is_empty() {
            return Ok(());
        }

        let strong = ratios
            .iter()
            .filter(|&&r| r >= self.soft_quality_ratio)
            .count();
        let required = alignments.len().saturating_sub(1);

        if strong < required {
            return Err(ThresholdError::TooFewStrong {
                strong,
                required,
                soft_ratio: self.soft_quality_ratio,
            });
        }

        Ok(())
    }
}
