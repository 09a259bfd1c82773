//! The clustering evaluator.
//!
//! [`ClusterEvaluator`] borrows an assignment sequence and a ground-truth
//! sequence and answers metric queries against them. Every query validates the
//! input first, so calls are self-contained and may come in any order.
//!
//! # Example
//!
//! ```rust
//! use concord::ClusterEvaluator;
//!
//! let assignments = [0, 0, 1, 1, 2];
//! let truth = [2, 2, 0, 0, 1];
//!
//! let eval = ClusterEvaluator::new(&assignments, &truth);
//! assert_eq!(eval.rand_index().unwrap(), 1.0);
//! assert_eq!(eval.purity().unwrap(), 1.0);
//! assert_eq!(eval.f_measure(1.0).unwrap(), 1.0);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use crate::confusion::{count_pairs, PairConfusion, PairCounting};
use crate::contingency::ContingencyTable;
use crate::error::{Error, Result};
use crate::validate::validate;

/// Configuration for [`ClusterEvaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Strategy for counting pairs.
    pub counting: PairCounting,
    /// Cache the confusion counts and contingency table after first use.
    pub memoize: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            counting: PairCounting::Combinatorial,
            memoize: true,
        }
    }
}

impl EvaluatorConfig {
    /// Set the pair counting strategy.
    pub fn with_counting(mut self, counting: PairCounting) -> Self {
        self.counting = counting;
        self
    }

    /// Enable or disable caching of intermediate tables.
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}

/// Scores a clustering against ground-truth labels.
///
/// The sequences are borrowed and never modified. Cached tables live in
/// [`OnceLock`]s, so a shared evaluator can be queried from several threads.
#[derive(Debug)]
pub struct ClusterEvaluator<'a> {
    assignments: &'a [usize],
    truth: &'a [usize],
    config: EvaluatorConfig,
    confusion: OnceLock<PairConfusion>,
    contingency: OnceLock<ContingencyTable>,
}

impl<'a> ClusterEvaluator<'a> {
    /// Evaluator with the default configuration.
    pub fn new(assignments: &'a [usize], truth: &'a [usize]) -> Self {
        Self::with_config(assignments, truth, EvaluatorConfig::default())
    }

    /// Evaluator with an explicit configuration.
    pub fn with_config(
        assignments: &'a [usize],
        truth: &'a [usize],
        config: EvaluatorConfig,
    ) -> Self {
        Self {
            assignments,
            truth,
            config,
            confusion: OnceLock::new(),
            contingency: OnceLock::new(),
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> EvaluatorConfig {
        self.config
    }

    /// Predicted cluster ids.
    pub fn assignments(&self) -> &'a [usize] {
        self.assignments
    }

    /// Ground-truth class ids.
    pub fn truth(&self) -> &'a [usize] {
        self.truth
    }

    /// Number of points (length of the assignment sequence).
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// True when there are no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Check that the two sequences can be compared.
    pub fn validate(&self) -> Result<()> {
        validate(self.assignments, self.truth)
    }

    /// Pairwise confusion counts.
    pub fn confusion(&self) -> Result<PairConfusion> {
        self.validate()?;
        Ok(self.confusion_unchecked())
    }

    /// Cluster × class contingency table.
    pub fn contingency(&self) -> Result<Cow<'_, ContingencyTable>> {
        self.validate()?;
        Ok(self.contingency_unchecked())
    }

    /// Rand index: fraction of point pairs on which clustering and truth agree.
    ///
    /// Fails with [`Error::DivisionByZero`] for a single point.
    pub fn rand_index(&self) -> Result<f64> {
        self.confusion()?
            .rand_index()
            .ok_or(Error::DivisionByZero {
                metric: "rand index",
                n_points: self.len(),
            })
    }

    /// Purity: share of points that belong to their cluster's majority class.
    pub fn purity(&self) -> Result<f64> {
        let table = self.contingency()?;
        Ok(table.majority_total() as f64 / self.len() as f64)
    }

    /// F-measure over pair counts. `beta > 1` weights recall more heavily.
    ///
    /// Returns exactly 0 when no pair is a true positive.
    pub fn f_measure(&self, beta: f64) -> Result<f64> {
        let counts = self.confusion()?;
        check_beta(beta)?;
        Ok(counts.f_measure(beta))
    }

    /// Adjusted Rand index. Fails with [`Error::DivisionByZero`] for a single point.
    pub fn adjusted_rand_index(&self) -> Result<f64> {
        self.confusion()?
            .adjusted_rand_index()
            .ok_or(Error::DivisionByZero {
                metric: "adjusted rand index",
                n_points: self.len(),
            })
    }

    /// Fowlkes–Mallows index over pair counts.
    pub fn fowlkes_mallows(&self) -> Result<f64> {
        Ok(self.confusion()?.fowlkes_mallows())
    }

    /// All scores at once.
    pub fn report(&self, beta: f64) -> Result<EvaluationReport> {
        Ok(EvaluationReport {
            n_points: self.len(),
            confusion: self.confusion()?,
            rand_index: self.rand_index()?,
            adjusted_rand_index: self.adjusted_rand_index()?,
            purity: self.purity()?,
            beta,
            f_measure: self.f_measure(beta)?,
            fowlkes_mallows: self.fowlkes_mallows()?,
        })
    }

    fn confusion_unchecked(&self) -> PairConfusion {
        if !self.config.memoize {
            return self.compute_confusion();
        }
        if let Some(counts) = self.confusion.get() {
            log::trace!("pair confusion cache hit");
            return *counts;
        }
        *self.confusion.get_or_init(|| self.compute_confusion())
    }

    fn compute_confusion(&self) -> PairConfusion {
        match self.config.counting {
            PairCounting::Combinatorial => {
                PairConfusion::from_contingency(&self.contingency_unchecked())
            }
            PairCounting::Exhaustive => count_pairs(self.assignments, self.truth),
        }
    }

    fn contingency_unchecked(&self) -> Cow<'_, ContingencyTable> {
        if !self.config.memoize {
            return Cow::Owned(ContingencyTable::tabulate(self.assignments, self.truth));
        }
        if let Some(table) = self.contingency.get() {
            log::trace!("contingency table cache hit");
            return Cow::Borrowed(table);
        }
        Cow::Borrowed(
            self.contingency
                .get_or_init(|| ContingencyTable::tabulate(self.assignments, self.truth)),
        )
    }
}

fn check_beta(beta: f64) -> Result<()> {
    if !beta.is_finite() || beta < 0.0 {
        return Err(Error::InvalidParameter {
            name: "beta",
            message: "must be finite and non-negative",
        });
    }
    Ok(())
}

/// Every score computed for one assignment / truth pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationReport {
    /// Number of points.
    pub n_points: usize,
    /// Pair counts the pairwise scores are built on.
    pub confusion: PairConfusion,
    /// Rand index.
    pub rand_index: f64,
    /// Adjusted Rand index.
    pub adjusted_rand_index: f64,
    /// Purity.
    pub purity: f64,
    /// β used for `f_measure`.
    pub beta: f64,
    /// F-measure at `beta`.
    pub f_measure: f64,
    /// Fowlkes–Mallows index.
    pub fowlkes_mallows: f64,
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.confusion;
        writeln!(f, "points: {}", self.n_points)?;
        writeln!(
            f,
            "pairs: tp={} tn={} fp={} fn={}",
            c.true_pos, c.true_neg, c.false_pos, c.false_neg
        )?;
        writeln!(f, "Rand index: {:.6}", self.rand_index)?;
        writeln!(f, "Adjusted Rand index: {:.6}", self.adjusted_rand_index)?;
        writeln!(f, "Purity: {:.6}", self.purity)?;
        writeln!(f, "F measure (beta = {}): {:.6}", self.beta, self.f_measure)?;
        write!(f, "Fowlkes-Mallows: {:.6}", self.fowlkes_mallows)
    }
}
