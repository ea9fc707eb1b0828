//! Subinterval generation
//!
//! Every interval endpoint becomes a candidate breakpoint. After sorting,
//! breakpoints closer than the tolerance collapse onto the first member of
//! their run, and each gap between consecutive breakpoints becomes one
//! subinterval. The result covers `[min, max]` of all endpoints with no gaps
//! and no overlaps.

use crate::error::Result;
use crate::interval::Interval;
use crate::tolerance::Tolerance;

/// Sorted, deduplicated endpoint values of `intervals`
///
/// A value is kept only when it is not close to the most recently kept
/// breakpoint, so a run of near-equal values is represented by its smallest
/// member.
pub fn breakpoints(intervals: &[Interval], tolerance: &Tolerance) -> Vec<f64> {
    let mut points: Vec<f64> = intervals
        .iter()
        .flat_map(|interval| [interval.min(), interval.max()])
        .collect();
    points.sort_by(f64::total_cmp);
    points.dedup();

    let mut kept: Vec<f64> = Vec::with_capacity(points.len());
    for point in points {
        match kept.last() {
            Some(&last) if tolerance.is_close(point, last) => {}
            _ => kept.push(point),
        }
    }
    kept
}

/// Partition the span of `intervals` into consecutive subintervals
///
/// Returns an empty vector when fewer than two distinct breakpoints exist
/// (no input, or every interval collapses onto the same point). Callers
/// decide whether that is fatal; the median estimators reject it.
///
/// # Errors
/// Propagates the first subinterval that cannot be built from its bounds.
pub fn generate_subintervals(intervals: &[Interval], tolerance: &Tolerance) -> Result<Vec<Interval>> {
    breakpoints(intervals, tolerance)
        .windows(2)
        .map(|pair| Interval::from_bounds(pair[0], pair[1]))
        .collect()
}
