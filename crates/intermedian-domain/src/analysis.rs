//! Full estimation pipeline
//!
//! Runs the partitioner, the frequency counter and all three median
//! estimators over one input set:
//! 1. Subinterval generation
//! 2. Frequency counting
//! 3. Frequency median
//! 4. Distance median
//! 5. Distance-frequency median

use crate::error::Result;
use crate::frequency::calculate_frequencies;
use crate::interval::Interval;
use crate::median::{
    median_by_distances_and_frequencies, median_by_distances_to_intervals,
    median_by_frequencies,
};
use crate::partition::generate_subintervals;
use crate::tolerance::Tolerance;
use tracing::{debug, instrument};

/// Everything derived from one input set
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Partition of the input span
    pub subintervals: Vec<Interval>,
    /// Coverage count per subinterval, parallel to `subintervals`
    pub frequencies: Vec<usize>,
    /// Cumulative-frequency median
    pub frequency_median: Interval,
    /// Least summed distance to the input intervals
    pub distance_median: Interval,
    /// Least frequency-weighted distance to the other subintervals
    pub distance_frequency_median: Interval,
}

impl Analysis {
    /// The three medians with their short labels, in display order
    pub fn medians(&self) -> [(&'static str, Interval); 3] {
        [
            ("Me1", self.frequency_median),
            ("Me2", self.distance_median),
            ("Me3", self.distance_frequency_median),
        ]
    }
}

/// Run the whole pipeline over `intervals`
///
/// # Errors
/// Propagates the first estimator failure, e.g.
/// [`DomainError::EmptySubintervals`](crate::DomainError::EmptySubintervals)
/// when every input interval collapses onto a single point.
#[instrument(level = "debug", skip_all, fields(intervals = intervals.len()))]
pub fn analyze(intervals: &[Interval], tolerance: &Tolerance) -> Result<Analysis> {
    let subintervals = generate_subintervals(intervals, tolerance)?;
    debug!(count = subintervals.len(), "generated subintervals");

    let frequencies = calculate_frequencies(intervals, &subintervals, tolerance);
    debug!(total = frequencies.iter().sum::<usize>(), "counted frequencies");

    let frequency_median = median_by_frequencies(&subintervals, &frequencies, tolerance)?;
    debug!(median = %frequency_median, "frequency median");

    let distance_median = median_by_distances_to_intervals(intervals, &subintervals)?;
    debug!(median = %distance_median, "distance median");

    let distance_frequency_median =
        median_by_distances_and_frequencies(&subintervals, &frequencies)?;
    debug!(median = %distance_frequency_median, "distance-frequency median");

    Ok(Analysis {
        subintervals,
        frequencies,
        frequency_median,
        distance_median,
        distance_frequency_median,
    })
}
