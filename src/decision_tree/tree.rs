//! Defines the decision tree grown by ID3.
use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

use crate::error::{Error, Result};
use crate::sample::Instance;
use super::node::Node;


/// A decision tree grown by [`build_tree`](crate::build_tree).
/// The tree is immutable once grown,
/// so it can be shared between threads for classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    root: Node,
    // Most frequent label of the whole training set.
    majority: String,
}


impl Tree {
    #[inline]
    pub(crate) fn new(root: Node, majority: String) -> Self {
        Self { root, majority }
    }


    /// Returns the root node.
    pub fn root_node(&self) -> &Node {
        &self.root
    }


    /// Returns the most frequent label of the training set.
    /// This label is predicted for feature values the tree never saw.
    pub fn majority_label(&self) -> &str {
        &self.majority
    }


    /// Predicts the label of `instance`.
    ///
    /// Starting at the root, each decision node reads the value of its
    /// feature from `instance` and descends to the matching child.
    /// If no child matches (the value was never seen while growing this
    /// node), the majority label of the **whole** training set is returned,
    /// not the majority of the samples that reached the node.
    ///
    /// Returns [`Error::MissingFeature`] if `instance` has no value
    /// for a tested feature.
    pub fn classify(&self, instance: &Instance) -> Result<&str> {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { label } => return Ok(label),
                Node::Decision { feature, children } => {
                    let value = instance.get(feature)
                        .ok_or_else(|| Error::MissingFeature {
                            feature: feature.clone(),
                        })?;

                    match children.get(value) {
                        Some(child) => { node = child; },
                        None => {
                            log::debug!(
                                "unseen value `{value}` for `{feature}`, \
                                 falling back to `{}`",
                                self.majority,
                            );
                            return Ok(&self.majority);
                        },
                    }
                },
            }
        }
    }


    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }


    /// Serialize this tree to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }


    /// Deserialize a tree from a JSON string
    /// written by [`Tree::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        let tree = serde_json::from_str(json)?;
        Ok(tree)
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}
