//! The core traits for classifiers.
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::sample::{Dataset, Instance};


/// A trait that defines the behavior of classifier.
/// You only need to implement `classify` method.
pub trait Classifier {
    /// Predicts the label of `instance`.
    fn classify(&self, instance: &Instance) -> Result<String>;


    /// Predicts the label of the `row`-th sample of `dataset`.
    ///
    /// Returns [`Error::RowOutOfRange`] if `dataset` has no `row`-th sample.
    fn classify_row(&self, dataset: &Dataset, row: usize) -> Result<String> {
        let instance = dataset.instance(row)?;
        self.classify(&instance)
    }


    /// Predicts the labels of every sample of `dataset`.
    /// The samples are classified in parallel.
    fn classify_all(&self, dataset: &Dataset) -> Result<Vec<String>>
        where Self: Sync,
    {
        let n_sample = dataset.shape().0;
        (0..n_sample).into_par_iter()
            .map(|row| self.classify_row(dataset, row))
            .collect()
    }


    /// Fraction of the samples of `dataset` whose label is predicted
    /// correctly.
    ///
    /// Returns [`Error::EmptyDataset`] if `dataset` has no sample.
    fn accuracy(&self, dataset: &Dataset) -> Result<f64>
        where Self: Sync,
    {
        let n_sample = dataset.shape().0;
        if n_sample == 0 { return Err(Error::EmptyDataset); }

        let n_correct = self.classify_all(dataset)?
            .into_iter()
            .zip(dataset.labels())
            .filter(|(p, y)| p == *y)
            .count();

        Ok(n_correct as f64 / n_sample as f64)
    }
}
