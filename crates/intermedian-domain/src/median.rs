//! Median estimators over a subinterval partition
//!
//! Three independent criteria, each selecting one subinterval (or the
//! average of two adjacent ones) as the median of the input set:
//!
//! 1. [`median_by_frequencies`]: cumulative frequency reaches half the total
//! 2. [`median_by_distances_to_intervals`]: least summed Chebyshev distance to
//!    every input interval
//! 3. [`median_by_distances_and_frequencies`]: least frequency-weighted
//!    distance to every other subinterval
//!
//! All estimators require a non-empty subinterval sequence.

use crate::error::{DomainError, Result};
use crate::interval::Interval;
use crate::tolerance::Tolerance;

/// Frequency median
///
/// With `m = total / 2`, picks the first index whose cumulative frequency is
/// at least `m`. When that cumulative frequency equals `m` (within
/// tolerance) the split falls between two cells and the result is the
/// average of that subinterval and the next one.
///
/// # Errors
/// [`DomainError::EmptySubintervals`], [`DomainError::LengthMismatch`], and
/// [`DomainError::ZeroTotalFrequency`] when no subinterval is covered.
pub fn median_by_frequencies(
    subintervals: &[Interval],
    frequencies: &[usize],
    tolerance: &Tolerance,
) -> Result<Interval> {
    check_parallel(subintervals, frequencies)?;

    let cumulative: Vec<usize> = frequencies
        .iter()
        .scan(0usize, |sum, &f| {
            *sum += f;
            Some(*sum)
        })
        .collect();

    let total = cumulative.last().copied().unwrap_or(0);
    if total == 0 {
        return Err(DomainError::ZeroTotalFrequency);
    }
    let half = total as f64 / 2.0;

    // the last cumulative sum equals the total, so a qualifying index exists
    let idx = cumulative
        .iter()
        .position(|&c| c as f64 >= half)
        .unwrap_or(cumulative.len() - 1);

    if tolerance.is_close(cumulative[idx] as f64, half) {
        if let Some(next) = subintervals.get(idx + 1) {
            return subintervals[idx].average(next);
        }
    }
    Ok(subintervals[idx])
}

/// Distance median
///
/// Picks the subinterval with the least summed [`Interval::distance_to`]
/// over all input intervals. Ties go to the first subinterval.
pub fn median_by_distances_to_intervals(
    intervals: &[Interval],
    subintervals: &[Interval],
) -> Result<Interval> {
    let totals = subintervals.iter().map(|subinterval| {
        intervals
            .iter()
            .map(|interval| subinterval.distance_to(interval))
            .sum::<f64>()
    });
    least_total(subintervals, totals)
}

/// Distance-frequency median
///
/// For each subinterval `i`, sums `distance_to(subinterval j) * frequency j`
/// over every `j != i` and picks the least total. Ties go to the first
/// subinterval.
pub fn median_by_distances_and_frequencies(
    subintervals: &[Interval],
    frequencies: &[usize],
) -> Result<Interval> {
    check_parallel(subintervals, frequencies)?;

    let totals = subintervals.iter().enumerate().map(|(i, sub_i)| {
        subintervals
            .iter()
            .zip(frequencies)
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, (sub_j, &freq))| sub_i.distance_to(sub_j) * freq as f64)
            .sum::<f64>()
    });
    least_total(subintervals, totals)
}

fn check_parallel(subintervals: &[Interval], frequencies: &[usize]) -> Result<()> {
    if subintervals.is_empty() {
        return Err(DomainError::EmptySubintervals);
    }
    if subintervals.len() != frequencies.len() {
        return Err(DomainError::LengthMismatch {
            subintervals: subintervals.len(),
            frequencies: frequencies.len(),
        });
    }
    Ok(())
}

/// Subinterval with the smallest total
///
/// A total that overflowed to `inf` makes the comparison meaningless, so it
/// is an error rather than a tie.
fn least_total(subintervals: &[Interval], totals: impl Iterator<Item = f64>) -> Result<Interval> {
    let totals: Vec<f64> = totals.collect();
    if let Some(&value) = totals.iter().find(|total| !total.is_finite()) {
        return Err(DomainError::NonFinite {
            what: "distance total",
            value,
        });
    }
    let idx = argmin(totals.into_iter()).ok_or(DomainError::EmptySubintervals)?;
    Ok(subintervals[idx])
}

/// Index of the smallest value; the first one wins on ties
fn argmin(values: impl Iterator<Item = f64>) -> Option<usize> {
    values
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (idx, value)| match best {
            Some((_, current)) if current <= value => best,
            _ => Some((idx, value)),
        })
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::calculate_frequencies;
    use crate::partition::generate_subintervals;

    fn iv(mid: f64, rad: f64) -> Interval {
        Interval::new(mid, rad).unwrap()
    }

    #[test]
    fn test_frequency_median_split_between_cells() {
        // cumulative [1, 1, 2], m = 1 is hit at index 0
        let tol = Tolerance::default();
        let intervals = vec![iv(0.0, 1.0), iv(10.0, 1.0)];
        let subs = generate_subintervals(&intervals, &tol).unwrap();
        let freqs = calculate_frequencies(&intervals, &subs, &tol);

        let median = median_by_frequencies(&subs, &freqs, &tol).unwrap();
        assert_eq!(median, iv(2.5, 2.5));
    }

    #[test]
    fn test_frequency_median_touching_intervals() {
        let tol = Tolerance::default();
        let intervals = vec![iv(0.0, 1.0), iv(2.0, 1.0)];
        let subs = generate_subintervals(&intervals, &tol).unwrap();
        let freqs = calculate_frequencies(&intervals, &subs, &tol);
        assert_eq!(freqs, vec![1, 1]);

        let median = median_by_frequencies(&subs, &freqs, &tol).unwrap();
        assert_eq!(median, iv(1.0, 1.0));
    }

    #[test]
    fn test_frequency_median_single_cell() {
        // cumulative [1, 4, 5], m = 2.5 first exceeded at index 1
        let tol = Tolerance::default();
        let subs = vec![iv(0.0, 1.0), iv(2.0, 1.0), iv(4.0, 1.0)];
        let median = median_by_frequencies(&subs, &[1, 3, 1], &tol).unwrap();
        assert_eq!(median, iv(2.0, 1.0));
    }

    #[test]
    fn test_frequency_median_takes_first_qualifying_index() {
        // cumulative [2, 2, 4], m = 2 reached at index 0, not index 1
        let tol = Tolerance::default();
        let subs = vec![iv(0.0, 1.0), iv(2.0, 1.0), iv(4.0, 1.0)];
        let median = median_by_frequencies(&subs, &[2, 0, 2], &tol).unwrap();
        assert_eq!(median, iv(1.0, 1.0));
    }

    #[test]
    fn test_frequency_median_single_subinterval() {
        // cumulative [3], m = 1.5: no next cell to average with
        let tol = Tolerance::default();
        let median = median_by_frequencies(&[iv(1.0, 1.0)], &[3], &tol).unwrap();
        assert_eq!(median, iv(1.0, 1.0));
    }

    #[test]
    fn test_frequency_median_preconditions() {
        let tol = Tolerance::default();
        assert_eq!(
            median_by_frequencies(&[], &[], &tol),
            Err(DomainError::EmptySubintervals)
        );
        assert_eq!(
            median_by_frequencies(&[iv(0.0, 1.0)], &[0], &tol),
            Err(DomainError::ZeroTotalFrequency)
        );
        assert!(matches!(
            median_by_frequencies(&[iv(0.0, 1.0)], &[1, 2], &tol),
            Err(DomainError::LengthMismatch { subintervals: 1, frequencies: 2 })
        ));
    }

    #[test]
    fn test_distance_median_matches_brute_force() {
        let tol = Tolerance::default();
        let intervals = vec![iv(0.0, 1.0), iv(10.0, 1.0)];
        let subs = generate_subintervals(&intervals, &tol).unwrap();

        let median = median_by_distances_to_intervals(&intervals, &subs).unwrap();

        let mut best = (0, f64::INFINITY);
        for (idx, sub) in subs.iter().enumerate() {
            let total: f64 = intervals.iter().map(|i| sub.distance_to(i)).sum();
            if total < best.1 {
                best = (idx, total);
            }
        }
        assert_eq!(median, subs[best.0]);
        // end cells total 0 + 10, the gap [1, 9] totals 8 + 8
        assert_eq!(median, iv(0.0, 1.0));
    }

    #[test]
    fn test_distance_median_tie_prefers_first() {
        let subs = vec![iv(0.0, 1.0), iv(2.0, 1.0)];
        let intervals = vec![iv(1.0, 1.0)];
        // both cells are at distance 1 from [0, 2]
        let median = median_by_distances_to_intervals(&intervals, &subs).unwrap();
        assert_eq!(median, subs[0]);
    }

    #[test]
    fn test_distance_median_empty() {
        assert_eq!(
            median_by_distances_to_intervals(&[iv(0.0, 1.0)], &[]),
            Err(DomainError::EmptySubintervals)
        );
    }

    #[test]
    fn test_distance_frequency_median() {
        // cells [0,2], [2,4], [4,6] with weights 1, 3, 1
        let subs = vec![iv(1.0, 1.0), iv(3.0, 1.0), iv(5.0, 1.0)];
        let median = median_by_distances_and_frequencies(&subs, &[1, 3, 1]).unwrap();
        // totals: 2*3 + 4*1 = 10, 2*1 + 2*1 = 4, 4*1 + 2*3 = 10
        assert_eq!(median, subs[1]);
    }

    #[test]
    fn test_distance_frequency_median_excludes_self() {
        // a heavy cell does not pull towards itself through its own weight
        let subs = vec![iv(1.0, 1.0), iv(3.0, 1.0)];
        let median = median_by_distances_and_frequencies(&subs, &[5, 1]).unwrap();
        // totals: 2*1 = 2, 2*5 = 10
        assert_eq!(median, subs[0]);
    }

    #[test]
    fn test_distance_frequency_median_single_subinterval() {
        let subs = vec![iv(1.0, 1.0)];
        assert_eq!(median_by_distances_and_frequencies(&subs, &[0]).unwrap(), subs[0]);
        assert_eq!(
            median_by_distances_and_frequencies(&[], &[]),
            Err(DomainError::EmptySubintervals)
        );
    }

    #[test]
    fn test_overflowing_distance_totals_rejected() {
        let tol = Tolerance::default();
        let unit = 2f64.powi(1023);
        let intervals = vec![
            Interval::new(-1.5 * unit, 0.25 * unit).unwrap(),
            Interval::new(1.5 * unit, 0.25 * unit).unwrap(),
        ];
        let subs = generate_subintervals(&intervals, &tol).unwrap();
        let freqs = calculate_frequencies(&intervals, &subs, &tol);

        assert!(matches!(
            median_by_distances_to_intervals(&intervals, &subs),
            Err(DomainError::NonFinite { what: "distance total", .. })
        ));
        assert!(matches!(
            median_by_distances_and_frequencies(&subs, &freqs),
            Err(DomainError::NonFinite { what: "distance total", .. })
        ));
    }

    #[test]
    fn test_argmin() {
        assert_eq!(argmin([3.0, 1.0, 1.0, 2.0].into_iter()), Some(1));
        assert_eq!(argmin(std::iter::empty()), None);
    }
}
