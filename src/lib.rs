#![warn(missing_docs)]

//!
//! A crate that provides the ID3 decision tree classifier
//! for discrete (categorical) features.
//!
//! Given a labeled training set, ID3 grows a tree whose decision nodes
//! test the feature with the highest information gain,
//! and whose leaves predict a label.
//! A branch stops growing when its samples share one label,
//! or when every feature has been tested on the path to it.
//!
//! ```
//! use id3tree::prelude::*;
//!
//! let dataset = Dataset::from_records(
//!     &["weather"],
//!     "play",
//!     [
//!         (["sunny"], "yes"),
//!         (["sunny"], "yes"),
//!         (["rainy"], "no"),
//!         (["rainy"], "no"),
//!     ],
//! ).unwrap();
//!
//! let f = DecisionTreeClassifier::new(dataset).unwrap();
//! let x = Instance::new().with("weather", "rainy");
//! assert_eq!(f.classify(&x).unwrap(), "no");
//! ```

pub mod error;
pub mod sample;
pub mod classifier;
pub mod learner;
pub mod decision_tree;
pub mod prelude;

mod common;


pub use error::{Error, Result};

pub use sample::{
    Dataset,
    DatasetReader,
    Feature,
    Instance,
    Partition,
};

pub use classifier::Classifier;
pub use learner::Learner;

pub use decision_tree::{
    build_tree,
    choose_root,
    entropy,
    label_entropy,
    information_gain,
    DecisionTreeClassifier,
    Id3,
    Id3Builder,
    Node,
    Tree,
};
