//! Cluster × class contingency table.
//!
//! Entry `[i][j]` counts the points assigned to the i-th observed cluster whose
//! ground-truth class is the j-th observed class. Ids are mapped to dense row
//! and column indices in order of first appearance, so they need not be
//! contiguous or zero-based.

use indexmap::IndexSet;
use ndarray::{Array2, Axis};

use crate::error::Result;
use crate::validate::validate;

/// Counts of points per (cluster id, class id) combination.
#[derive(Debug, Clone, PartialEq)]
pub struct ContingencyTable {
    // observed ids, index in the set = row / column in `table`
    clusters: IndexSet<usize>,
    classes: IndexSet<usize>,
    table: Array2<usize>,
}

impl ContingencyTable {
    /// Build the table from parallel assignment and truth sequences.
    ///
    /// # Errors
    ///
    /// The validation errors of [`validate`] for unequal or empty input.
    pub fn new(assignments: &[usize], truth: &[usize]) -> Result<Self> {
        validate(assignments, truth)?;
        Ok(Self::tabulate(assignments, truth))
    }

    /// Build the table from input that has already been validated.
    pub(crate) fn tabulate(assignments: &[usize], truth: &[usize]) -> Self {
        let clusters: IndexSet<usize> = assignments.iter().copied().collect();
        let classes: IndexSet<usize> = truth.iter().copied().collect();
        let mut table = Array2::<usize>::zeros((clusters.len(), classes.len()));

        for (a, t) in assignments.iter().zip(truth) {
            if let (Some(i), Some(j)) = (clusters.get_index_of(a), classes.get_index_of(t)) {
                table[[i, j]] += 1;
            }
        }

        log::debug!(
            "contingency table: {} points, {} clusters x {} classes",
            assignments.len(),
            clusters.len(),
            classes.len()
        );

        Self {
            clusters,
            classes,
            table,
        }
    }

    /// Number of distinct cluster ids (rows).
    pub fn n_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Number of distinct class ids (columns).
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Number of points tabulated.
    pub fn n_points(&self) -> usize {
        self.table.sum()
    }

    /// Observed cluster ids, in row order.
    pub fn cluster_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.clusters.iter().copied()
    }

    /// Observed class ids, in column order.
    pub fn class_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.classes.iter().copied()
    }

    /// Points with this cluster id and class id. Zero for ids never observed.
    pub fn count(&self, cluster: usize, class: usize) -> usize {
        match (
            self.clusters.get_index_of(&cluster),
            self.classes.get_index_of(&class),
        ) {
            (Some(i), Some(j)) => self.table[[i, j]],
            _ => 0,
        }
    }

    /// Size of each cluster, in row order.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        self.table.sum_axis(Axis(1)).to_vec()
    }

    /// Size of each class, in column order.
    pub fn class_sizes(&self) -> Vec<usize> {
        self.table.sum_axis(Axis(0)).to_vec()
    }

    /// Sum over clusters of the size of each cluster's largest class.
    pub fn majority_total(&self) -> usize {
        self.table
            .rows()
            .into_iter()
            .map(|row| row.iter().copied().max().unwrap_or(0))
            .sum()
    }

    /// The raw count matrix.
    pub fn as_array(&self) -> &Array2<usize> {
        &self.table
    }
}
