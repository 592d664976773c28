//! The ID3 decision tree.

/// Defines entropy and information gain.
pub mod info_gain;
/// Defines the tree-growing algorithm.
pub mod id3;
/// Defines the parameters of ID3.
pub mod builder;
/// Defines the classifier produced by `Id3`.
pub mod classifier;

/// Defines the inner representations of `Tree`.
mod node;
mod tree;


pub use info_gain::{entropy, label_entropy, information_gain};
pub use id3::{build_tree, choose_root};
pub use builder::{Id3, Id3Builder};
pub use classifier::DecisionTreeClassifier;
pub use node::Node;
pub use tree::Tree;
