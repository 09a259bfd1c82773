//! # concord
//!
//! Supervised clustering evaluation: score a clustering against known
//! ground-truth classes with the Rand index, purity and F-measure.
//!
//! Everything is derived from two tables computed from the input sequences:
//! the pairwise [`PairConfusion`] counts and the cluster × class
//! [`ContingencyTable`]. This crate does not cluster anything itself.
//!
//! ```rust
//! use concord::ClusterEvaluator;
//!
//! let assignments = [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2];
//! let truth = [0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 2, 0, 0, 2, 2, 2];
//!
//! let eval = ClusterEvaluator::new(&assignments, &truth);
//! let ri = eval.rand_index()?;
//! let purity = eval.purity()?;
//! let f1 = eval.f_measure(1.0)?;
//! assert!((purity - 12.0 / 17.0).abs() < 1e-9);
//! # let _ = (ri, f1);
//! # Ok::<(), concord::Error>(())
//! ```

pub mod confusion;
pub mod contingency;
/// Error types used across `concord`.
pub mod error;
pub mod evaluator;
pub mod metrics;
pub mod validate;

#[cfg(test)]
mod metrics_tests;

pub use confusion::{pair_confusion, PairConfusion, PairCounting};
pub use contingency::ContingencyTable;
pub use error::{Error, Result};
pub use evaluator::{ClusterEvaluator, EvaluationReport, EvaluatorConfig};
pub use metrics::{adjusted_rand_index, f_measure, fowlkes_mallows, purity, rand_index};
pub use validate::{parse_labels, validate};
