//! Exports the standard types and traits.

pub use crate::{
    // Traits
    Classifier,
    Learner,

    // Data
    Dataset,
    DatasetReader,
    Instance,

    // ID3
    build_tree,
    DecisionTreeClassifier,
    Id3,
    Id3Builder,
    Node,
    Tree,
};
