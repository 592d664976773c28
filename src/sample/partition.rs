//! Index views over a [`Dataset`].
use std::collections::BTreeMap;

use crate::common::utils;
use super::dataset::Dataset;


/// A read-only view of a [`Dataset`]:
/// a subset of its rows together with the features
/// that remain available for splitting.
/// Partitions never copy the underlying values.
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    dataset:  &'a Dataset,
    rows:     Vec<usize>,
    features: Vec<usize>,
}


impl<'a> Partition<'a> {
    /// A view over every row and every feature of `dataset`.
    pub(crate) fn full(dataset: &'a Dataset) -> Self {
        let rows = (0..dataset.shape().0).collect();
        let features = (0..dataset.shape().1).collect();
        Self { dataset, rows, features }
    }


    /// Restrict the remaining features to `features` (column indices).
    /// The order of `features` is kept.
    pub(crate) fn with_features(mut self, features: Vec<usize>) -> Self {
        self.features = features;
        self
    }


    /// Returns the underlying dataset.
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }


    /// Row indices of this view.
    pub fn rows(&self) -> &[usize] {
        &self.rows[..]
    }


    /// Column indices of the features that remain available.
    pub fn features(&self) -> &[usize] {
        &self.features[..]
    }


    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }


    /// Returns `true` if the view has no row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }


    /// Iterates over the labels of this view.
    pub fn labels(&self) -> impl Iterator<Item = &'a str> + '_ {
        let dataset = self.dataset;
        self.rows.iter().map(move |&row| dataset.label_at(row))
    }


    /// Counts the labels of this view.
    pub fn label_counts(&self) -> BTreeMap<&'a str, usize> {
        utils::label_counts(self.labels())
    }


    /// Returns the label if every row shares one label.
    pub fn pure_label(&self) -> Option<&'a str> {
        let mut labels = self.labels();
        let first = labels.next()?;
        labels.all(|y| y == first).then_some(first)
    }


    /// Returns the most frequent label of this view.
    /// Ties go to the lexicographically smallest label.
    pub fn majority_label(&self) -> Option<&'a str> {
        utils::majority(&self.label_counts())
    }


    /// Entropy (in bits) of the label distribution of this view.
    pub fn entropy(&self) -> f64 {
        crate::entropy(self.label_counts().into_values())
    }


    /// Groups the rows by their value of `feature` (a column index).
    /// Each group lists its row indices in the original order.
    pub fn group_by(&self, feature: usize) -> BTreeMap<&'a str, Vec<usize>> {
        let mut groups: BTreeMap<&'a str, Vec<usize>> = BTreeMap::new();
        for &row in self.rows.iter() {
            let value = self.dataset.value(row, feature);
            groups.entry(value).or_default().push(row);
        }
        groups
    }


    /// Splits this view on `feature` (a column index).
    /// Every child view drops `feature` from the remaining features.
    pub fn split(&self, feature: usize) -> BTreeMap<&'a str, Partition<'a>> {
        let features = self.features.iter()
            .copied()
            .filter(|&f| f != feature)
            .collect::<Vec<_>>();

        self.group_by(feature)
            .into_iter()
            .map(|(value, rows)| {
                let child = Self {
                    dataset: self.dataset,
                    rows,
                    features: features.clone(),
                };
                (value, child)
            })
            .collect()
    }
}
