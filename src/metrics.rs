//! Clustering evaluation metrics.
//!
//! One-shot functions comparing predicted clusters to ground truth labels.
//! Each builds a [`ClusterEvaluator`] with the default configuration; use the
//! evaluator directly when asking for several scores on the same input.
//!
//! # Metrics Overview
//!
//! | Metric | Range | Best | Properties |
//! |--------|-------|------|------------|
//! | [`rand_index`] | [0, 1] | 1 | Pairwise agreement, not chance-corrected |
//! | [`adjusted_rand_index`] | [-1, 1] | 1 | Rand index adjusted for chance |
//! | [`purity`] | [0, 1] | 1 | Simple, biased toward many clusters |
//! | [`f_measure`] | [0, 1] | 1 | Pairwise precision/recall, β weights recall |
//! | [`fowlkes_mallows`] | [0, 1] | 1 | Geometric mean of pairwise precision and recall |
//!
//! # When to Use Which
//!
//! - **Rand index**: Easy to explain, but dominated by true negatives when
//!   there are many small clusters
//! - **ARI**: When you want to penalize random clustering
//! - **Purity**: Simple interpretation, but favors over-clustering
//! - **F-measure**: When merging distinct classes and splitting one class
//!   should cost differently (β > 1 punishes merges more)
//!
//! # Example
//!
//! ```rust
//! use concord::metrics::{f_measure, purity, rand_index};
//!
//! let pred = [0, 0, 1, 1, 2, 2];
//! let truth = [0, 0, 0, 1, 1, 1];
//!
//! let ri = rand_index(&pred, &truth).unwrap();
//! let p = purity(&pred, &truth).unwrap();
//! let f1 = f_measure(&pred, &truth, 1.0).unwrap();
//! assert!(ri > 0.0 && p > 0.0 && f1 > 0.0);
//! ```
//!
//! # References
//!
//! - Rand (1971). "Objective criteria for the evaluation of clustering methods"
//! - Hubert & Arabie (1985). "Comparing partitions" (ARI)
//! - Fowlkes & Mallows (1983). "A method for comparing two hierarchical clusterings"
//! - Manning, Raghavan & Schütze (2008). "Introduction to Information Retrieval", §16.3

use crate::error::Result;
use crate::evaluator::ClusterEvaluator;

/// Rand index between a clustering and ground truth.
///
/// ```text
/// RI = (TP + TN) / C(n, 2)
/// ```
///
/// # Errors
///
/// Validation errors for unequal or empty input, and
/// [`Error::DivisionByZero`](crate::Error::DivisionByZero) for a single point.
///
/// # Example
///
/// ```rust
/// use concord::metrics::rand_index;
///
/// let pred = [0, 0, 1, 1];
/// let truth = [1, 1, 0, 0];
/// assert_eq!(rand_index(&pred, &truth).unwrap(), 1.0);
/// ```
pub fn rand_index(pred: &[usize], truth: &[usize]) -> Result<f64> {
    ClusterEvaluator::new(pred, truth).rand_index()
}

/// Adjusted Rand index between a clustering and ground truth.
///
/// 0 for chance-level agreement, 1 for identical partitions.
pub fn adjusted_rand_index(pred: &[usize], truth: &[usize]) -> Result<f64> {
    ClusterEvaluator::new(pred, truth).adjusted_rand_index()
}

/// Purity of clustering with respect to ground truth.
///
/// For each cluster, count the points of its most common ground truth label;
/// purity is the sum of those counts over n.
///
/// Note: Purity increases with more clusters and is 1.0 when each point
/// is its own cluster. Use with caution.
pub fn purity(pred: &[usize], truth: &[usize]) -> Result<f64> {
    ClusterEvaluator::new(pred, truth).purity()
}

/// Pairwise F-measure with recall weight `beta`.
///
/// ```text
/// F_β = (β² + 1) · P · R / (β² · P + R)
/// ```
///
/// Returns exactly 0 when no pair of points shares both cluster and class.
pub fn f_measure(pred: &[usize], truth: &[usize], beta: f64) -> Result<f64> {
    ClusterEvaluator::new(pred, truth).f_measure(beta)
}

/// Fowlkes–Mallows index.
///
/// Geometric mean of precision and recall of pairwise cluster membership.
pub fn fowlkes_mallows(pred: &[usize], truth: &[usize]) -> Result<f64> {
    ClusterEvaluator::new(pred, truth).fowlkes_mallows()
}
