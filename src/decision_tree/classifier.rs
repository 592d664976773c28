//! Defines the ID3 decision tree classifier.
use serde::{Serialize, Deserialize};

use std::path::Path;

use crate::{Classifier, Dataset, Instance};
use crate::error::Result;
use super::id3;
use super::tree::Tree;


/// Decision tree classifier.
/// Owns its training set and the tree grown on it.
/// The tree is grown once, when the classifier is constructed;
/// train a new classifier for new training data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    training_set: Dataset,
    tree: Tree,
}


impl DecisionTreeClassifier {
    /// Grow a decision tree on every feature of `training_set`.
    ///
    /// Returns [`Error::EmptyDataset`](crate::Error::EmptyDataset)
    /// if `training_set` has no sample.
    pub fn new(training_set: Dataset) -> Result<Self> {
        let tree = id3::build_tree(&training_set)?;
        Ok(Self { training_set, tree })
    }


    #[inline]
    pub(crate) fn from_parts(training_set: Dataset, tree: Tree) -> Self {
        Self { training_set, tree }
    }


    /// Returns the training set.
    pub fn training_set(&self) -> &Dataset {
        &self.training_set
    }


    /// Returns the grown tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }


    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        self.tree.to_dot_file(path)
    }
}


impl Classifier for DecisionTreeClassifier {
    fn classify(&self, instance: &Instance) -> Result<String> {
        self.tree.classify(instance)
            .map(str::to_string)
    }
}
