//! Interval overlap scoring.
//!
//! A candidate span is scored by its best alignment to any single target
//! zone, not by combined coverage across zones. A takeaway that straddles two
//! permitted regions is judged by whichever region holds more of it; locality
//! to one coherent region is the property being measured.

use crate::range::PageInterval;

/// Fraction of `candidate` that falls inside `target`, in `0.0..=1.0`.
///
/// `intersection / span(candidate)`; the denominator is at least 1 by
/// interval construction, so the ratio is always defined.
pub fn overlap_ratio(candidate: PageInterval, target: PageInterval) -> f64 {
    let lo = candidate.start().max(target.start());
    let hi = candidate.end().min(target.end());

    let intersection = if hi >= lo {
        u64::from(hi - lo) + 1
    } else {
        0
    };

    intersection as f64 / candidate.span() as f64
}

/// Maximum [`overlap_ratio`] of `candidate` against any one target.
///
/// Returns `None` when no targets are configured; the caller decides what a
/// target-less grading call means.
pub fn best_alignment(candidate: PageInterval, targets: &[PageInterval]) -> Option<f64> {
    targets
        .iter()
        .map(|target| overlap_ratio(candidate, *target))
        .fold(None, |best: Option<f64>, ratio| {
            Some(best.map_or(ratio, |b| b.max(ratio)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(start: u32, end: u32) -> PageInterval {
        PageInterval::new(start, end)
    }

    #[test]
    fn test_full_containment_scores_one() {
        let ratio = overlap_ratio(interval(40, 49), interval(38, 66));
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn test_disjoint_scores_zero() {
        let ratio = overlap_ratio(interval(10, 12), interval(38, 66));
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // [64, 68] vs [38, 66]: pages 64..=66 overlap, span is 5.
        let ratio = overlap_ratio(interval(64, 68), interval(38, 66));
        assert!((ratio - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_single_shared_boundary_page() {
        let ratio = overlap_ratio(interval(66, 70), interval(38, 66));
        assert!((ratio - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_single_page_candidate_inside() {
        let ratio = overlap_ratio(interval(50, 50), interval(38, 66));
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn test_candidate_wider_than_target() {
        // [30, 69] is 40 pages; [38, 66] holds 29 of them.
        let ratio = overlap_ratio(interval(30, 69), interval(38, 66));
        assert!((ratio - 29.0 / 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_best_alignment_picks_strongest_cluster() {
        let targets = [interval(38, 66), interval(100, 134)];
        let best = best_alignment(interval(100, 109), &targets).unwrap();
        assert_eq!(best, 1.0);
    }

    #[test]
    fn test_straddling_candidate_scored_by_best_single_zone() {
        // [60, 109] touches both clusters: 7 pages of the first, 10 of the
        // second, 50 total. Best single-zone alignment is 10/50, never 17/50.
        let targets = [interval(38, 66), interval(100, 134)];
        let best = best_alignment(interval(60, 109), &targets).unwrap();
        assert!((best - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_single_target_degenerates_to_plain_ratio() {
        let target = interval(38, 66);
        let candidate = interval(64, 68);
        assert_eq!(
            best_alignment(candidate, &[target]),
            Some(overlap_ratio(candidate, target))
        );
    }

    #[test]
    fn test_no_targets_yields_none() {
        assert_eq!(best_alignment(interval(1, 10), &[]), None);
    }
}
