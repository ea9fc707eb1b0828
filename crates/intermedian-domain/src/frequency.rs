//! Per-subinterval coverage counts

use crate::interval::Interval;
use crate::tolerance::Tolerance;

/// Count, for each subinterval, the intervals containing its midpoint
///
/// The returned vector is parallel to `subintervals`.
pub fn calculate_frequencies(
    intervals: &[Interval],
    subintervals: &[Interval],
    tolerance: &Tolerance,
) -> Vec<usize> {
    subintervals
        .iter()
        .map(|subinterval| {
            intervals
                .iter()
                .filter(|interval| interval.contains(subinterval.mid(), tolerance))
                .count()
        })
        .collect()
}
