//! Provides the `Learner` trait.
use crate::{Classifier, Dataset};
use crate::error::Result;


/// A trait that defines the behavior of a learning algorithm:
/// given a training set, it returns a classifier.
pub trait Learner {
    /// The classifier this algorithm returns.
    type Model: Classifier;


    /// Returns the name of the algorithm.
    fn name(&self) -> &str;


    /// Trains a classifier on `dataset`.
    fn train(&self, dataset: &Dataset) -> Result<Self::Model>;
}
