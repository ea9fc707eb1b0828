//! Intermedian Domain Layer
//!
//! This crate contains the interval arithmetic and median estimation core of
//! Intermedian. It has no I/O: loading interval files, formatting results and
//! drawing charts live in `intermedian-cli`.
//!
//! ## Key Concepts
//!
//! - **Interval**: a closed range stored as midpoint and radius
//! - **Tolerance**: explicit "close enough" parameters for every comparison
//! - **Breakpoint**: a distinct interval endpoint partitioning the real line
//! - **Subinterval**: one cell of that partition
//! - **Frequency**: how many input intervals cover a subinterval's midpoint
//! - **Medians**: three criteria selecting a subinterval as the estimate
//!
//! ## Pipeline
//!
//! ```
//! use intermedian_domain::{analyze, Interval, Tolerance};
//!
//! let intervals = vec![
//!     Interval::new(0.0, 1.0).unwrap(),
//!     Interval::new(2.0, 1.0).unwrap(),
//! ];
//! let analysis = analyze(&intervals, &Tolerance::default()).unwrap();
//! assert_eq!(analysis.frequencies, vec![1, 1]);
//! assert_eq!(analysis.frequency_median, Interval::new(1.0, 1.0).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod error;
pub mod frequency;
pub mod interval;
pub mod median;
pub mod operation;
pub mod partition;
pub mod tolerance;

// Re-exports for convenience
pub use analysis::{analyze, Analysis};
pub use error::{DomainError, Result};
pub use frequency::calculate_frequencies;
pub use interval::Interval;
pub use median::{
    median_by_distances_and_frequencies, median_by_distances_to_intervals,
    median_by_frequencies,
};
pub use operation::{evaluate, Operand, Operation, Outcome};
pub use partition::{breakpoints, generate_subintervals};
pub use tolerance::Tolerance;
