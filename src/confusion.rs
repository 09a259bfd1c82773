//! Pairwise confusion counts.
//!
//! Every unordered pair of distinct points `{x, y}` is classified by whether
//! the clustering puts them together and whether the ground truth does:
//!
//! | | same class | different class |
//! |---|---|---|
//! | **same cluster** | `true_pos` | `false_neg` |
//! | **different cluster** | `false_pos` | `true_neg` |
//!
//! The four counts always sum to `n * (n - 1) / 2`.
//!
//! Two equivalent ways of counting are provided. [`PairCounting::Exhaustive`]
//! visits every pair, O(n²). [`PairCounting::Combinatorial`] derives the same
//! numbers from a [`ContingencyTable`] in O(n + k²), where k is the number of
//! distinct ids.

use crate::contingency::ContingencyTable;
use crate::error::Result;
use crate::validate::validate;

/// How pair counts are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PairCounting {
    /// Double loop over all pairs `x < y`.
    Exhaustive,
    /// Binomial sums over a contingency table.
    #[default]
    Combinatorial,
}

/// Pair counts comparing a clustering with a ground-truth labeling.
///
/// Counts are `u64` so that `n * (n - 1) / 2` fits on 32-bit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PairConfusion {
    /// Same cluster, same class.
    pub true_pos: u64,
    /// Different cluster, different class.
    pub true_neg: u64,
    /// Different cluster, same class (the clustering split them).
    pub false_pos: u64,
    /// Same cluster, different class (the clustering merged them).
    pub false_neg: u64,
}

impl PairConfusion {
    /// Number of unordered pairs among `n` points.
    pub fn pairs(n: usize) -> u64 {
        comb2(n)
    }

    /// Derive pair counts from a contingency table.
    pub fn from_contingency(table: &ContingencyTable) -> Self {
        let joint: u64 = table.as_array().iter().map(|&c| comb2(c)).sum();
        let co_clustered: u64 = table.cluster_sizes().into_iter().map(comb2).sum();
        let co_classed: u64 = table.class_sizes().into_iter().map(comb2).sum();
        let total = comb2(table.n_points());

        let false_neg = co_clustered - joint;
        let false_pos = co_classed - joint;
        let counts = Self {
            true_pos: joint,
            true_neg: total - co_clustered - false_pos,
            false_pos,
            false_neg,
        };
        log::debug!("pair confusion (combinatorial): {counts:?}");
        counts
    }

    /// Total number of pairs counted.
    pub fn total(&self) -> u64 {
        self.true_pos + self.true_neg + self.false_pos + self.false_neg
    }

    /// Pairs on which clustering and ground truth agree.
    pub fn agreements(&self) -> u64 {
        self.true_pos + self.true_neg
    }

    /// `true_pos / (true_pos + false_pos)`, or 0 when nothing is counted.
    pub fn precision(&self) -> f64 {
        ratio(self.true_pos, self.true_pos + self.false_pos)
    }

    /// `true_pos / (true_pos + false_neg)`, or 0 when nothing is counted.
    pub fn recall(&self) -> f64 {
        ratio(self.true_pos, self.true_pos + self.false_neg)
    }

    /// Fraction of agreeing pairs. `None` when there are no pairs.
    pub fn rand_index(&self) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| self.agreements() as f64 / total as f64)
    }

    /// Weighted harmonic combination of precision and recall.
    ///
    /// ```text
    /// F_β = (β² + 1) · P · R / (β² · P + R)
    /// ```
    ///
    /// Exactly 0 when there are no true positives. With `true_pos > 0` both
    /// denominators are positive, so no further guard is needed.
    pub fn f_measure(&self, beta: f64) -> f64 {
        if self.true_pos == 0 {
            return 0.0;
        }
        let p = self.precision();
        let r = self.recall();
        let b2 = beta * beta;
        (b2 + 1.0) * p * r / (b2 * p + r)
    }

    /// Rand index corrected for chance. `None` when there are no pairs.
    ///
    /// Both partitions trivial and identical (everything in one group, or
    /// every point alone) gives a zero denominator; that is perfect agreement.
    pub fn adjusted_rand_index(&self) -> Option<f64> {
        if self.total() == 0 {
            return None;
        }
        let tp = self.true_pos as f64;
        let tn = self.true_neg as f64;
        let fp = self.false_pos as f64;
        let fn_ = self.false_neg as f64;

        let denom = (tp + fn_) * (fn_ + tn) + (tp + fp) * (fp + tn);
        if denom == 0.0 {
            return Some(1.0);
        }
        Some(2.0 * (tp * tn - fn_ * fp) / denom)
    }

    /// Geometric mean of precision and recall; 0 without true positives.
    pub fn fowlkes_mallows(&self) -> f64 {
        if self.true_pos == 0 {
            return 0.0;
        }
        (self.precision() * self.recall()).sqrt()
    }
}

/// Count pairs between `assignments` and `truth` with the given strategy.
///
/// # Errors
///
/// The validation errors of [`validate`] for unequal or empty input.
pub fn pair_confusion(
    assignments: &[usize],
    truth: &[usize],
    counting: PairCounting,
) -> Result<PairConfusion> {
    validate(assignments, truth)?;
    Ok(match counting {
        PairCounting::Exhaustive => count_pairs(assignments, truth),
        PairCounting::Combinatorial => {
            PairConfusion::from_contingency(&ContingencyTable::tabulate(assignments, truth))
        }
    })
}

/// Exhaustive pair count over input that has already been validated.
pub(crate) fn count_pairs(assignments: &[usize], truth: &[usize]) -> PairConfusion {
    let n = assignments.len();
    let mut counts = PairConfusion::default();

    for x in 0..n {
        for y in (x + 1)..n {
            match (assignments[x] == assignments[y], truth[x] == truth[y]) {
                (true, true) => counts.true_pos += 1,
                (true, false) => counts.false_neg += 1,
                (false, false) => counts.true_neg += 1,
                (false, true) => counts.false_pos += 1,
            }
        }
    }

    log::debug!("pair confusion (exhaustive, n={n}): {counts:?}");
    counts
}

pub(crate) fn comb2(n: usize) -> u64 {
    let n = n as u64;
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

fn ratio(num: u64, denom: u64) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}
