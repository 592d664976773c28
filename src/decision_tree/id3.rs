//! The ID3 tree-growing algorithm.
use rayon::prelude::*;

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::sample::{Dataset, Partition};
use super::info_gain::gain;
use super::node::Node;
use super::tree::Tree;


/// Grows a decision tree on every feature of `dataset`.
///
/// The tree is grown by ID3 (Quinlan, 1986):
/// each decision node tests the remaining feature with the highest
/// information gain, and a branch stops when its samples share a label
/// or no feature remains to test.
///
/// Returns [`Error::EmptyDataset`] if `dataset` has no sample.
///
/// # Example
/// ```
/// use id3tree::{build_tree, Dataset, Instance};
///
/// let dataset = Dataset::from_records(
///     &["weather"],
///     "play",
///     [(["sunny"], "yes"), (["rainy"], "no")],
/// ).unwrap();
/// let tree = build_tree(&dataset).unwrap();
///
/// let x = Instance::new().with("weather", "sunny");
/// assert_eq!(tree.classify(&x).unwrap(), "yes");
/// ```
pub fn build_tree(dataset: &Dataset) -> Result<Tree> {
    grow_tree(dataset.partition())
}


/// Returns the feature of `dataset` with the highest information gain.
/// Ties go to the feature that comes first in column order.
/// Returns `Ok(None)` if `dataset` has no feature.
///
/// Returns [`Error::EmptyDataset`] if `dataset` has no sample.
pub fn choose_root(dataset: &Dataset) -> Result<Option<&str>> {
    if dataset.is_empty() { return Err(Error::EmptyDataset); }
    let partition = dataset.partition();
    let root = best_feature(&partition)
        .map(|(feature, _)| dataset.features()[feature].name());
    Ok(root)
}


/// Grows a tree on the rows and features of `partition`.
pub(crate) fn grow_tree(partition: Partition<'_>) -> Result<Tree> {
    let majority = partition.majority_label()
        .ok_or(Error::EmptyDataset)?
        .to_string();

    let root = grow(&partition, 0)?;
    log::info!(
        "grew an ID3 tree on {} samples: {} nodes, {} leaves, depth {}",
        partition.len(),
        root.n_nodes(),
        root.n_leaves(),
        root.depth(),
    );

    Ok(Tree::new(root, majority))
}


/// Returns the column index of the best feature and its gain.
/// The gains are computed in parallel but compared in the order
/// of `partition.features()`, so the first maximizer wins.
fn best_feature(partition: &Partition<'_>) -> Option<(usize, f64)> {
    let gains = partition.features()
        .par_iter()
        .map(|&feature| (feature, gain(partition, feature)))
        .collect::<Vec<_>>();

    gains.into_iter()
        .fold(None, |best, (feature, g)| {
            match best {
                Some((_, b)) if b >= g => best,
                _ => Some((feature, g)),
            }
        })
}


/// Recursive body of ID3.
fn grow(partition: &Partition<'_>, depth: usize) -> Result<Node> {
    // Every sample shares one label.
    if let Some(label) = partition.pure_label() {
        log::debug!("depth {depth}: pure leaf `{label}` ({} samples)", partition.len());
        return Ok(Node::leaf(label));
    }

    // Features are exhausted on this path.
    let Some((feature, g)) = best_feature(partition) else {
        let label = partition.majority_label()
            .ok_or(Error::EmptyDataset)?;
        log::debug!("depth {depth}: majority leaf `{label}` ({} samples)", partition.len());
        return Ok(Node::leaf(label));
    };

    let dataset = partition.dataset();
    let name = dataset.features()[feature].name();
    log::debug!("depth {depth}: split on `{name}` (gain = {g:.6})");

    let children = partition.split(feature)
        .into_iter()
        .map(|(value, child)| {
            let node = grow(&child, depth + 1)?;
            Ok((value.to_string(), node))
        })
        .collect::<Result<BTreeMap<_, _>>>()?;

    Ok(Node::decision(name, children))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn weather() -> Dataset {
        Dataset::from_records(
            &["weather"],
            "play",
            [
                (["sunny"], "yes"),
                (["sunny"], "yes"),
                (["rainy"], "no"),
                (["rainy"], "no"),
            ],
        ).unwrap()
    }

    #[test]
    fn weather_stump() {
        let dataset = weather();
        let tree = build_tree(&dataset).unwrap();
        let root = tree.root_node();

        assert!(!root.is_leaf());
        assert_eq!(root.value(), "weather");
        assert_eq!(root.children().count(), 2);
        assert_eq!(root.child("sunny").unwrap().value(), "yes");
        assert_eq!(root.child("rainy").unwrap().value(), "no");
        assert!(root.child("sunny").unwrap().is_leaf());
        assert!(root.child("rainy").unwrap().is_leaf());
    }

    #[test]
    fn pure_dataset_is_a_leaf() {
        let dataset = Dataset::from_records(
            &["a", "b"],
            "y",
            [(["1", "x"], "p"), (["2", "y"], "p"), (["3", "z"], "p")],
        ).unwrap();
        let tree = build_tree(&dataset).unwrap();
        assert!(tree.root_node().is_leaf());
        assert_eq!(tree.root_node().value(), "p");
    }

    #[test]
    fn no_feature_gives_majority_leaf() {
        let dataset = Dataset::new(
            Vec::new(), "y", ["q", "p", "q", "r", "q"]
        ).unwrap();
        let tree = build_tree(&dataset).unwrap();
        assert!(tree.root_node().is_leaf());
        assert_eq!(tree.root_node().value(), "q");
        assert_eq!(choose_root(&dataset).unwrap(), None);
    }

    #[test]
    fn no_feature_tie_gives_smallest_label() {
        let dataset = Dataset::new(
            Vec::new(), "y", ["yes", "no", "no", "yes"]
        ).unwrap();
        let tree = build_tree(&dataset).unwrap();
        assert_eq!(tree.root_node().value(), "no");
    }

    #[test]
    fn exhausted_features_give_majority_leaf() {
        // The same `a` value carries different labels.
        let dataset = Dataset::from_records(
            &["a"],
            "y",
            [
                (["0"], "p"),
                (["0"], "q"),
                (["0"], "q"),
                (["1"], "p"),
            ],
        ).unwrap();
        let tree = build_tree(&dataset).unwrap();
        let root = tree.root_node();
        assert_eq!(root.value(), "a");
        let zero = root.child("0").unwrap();
        assert!(zero.is_leaf());
        assert_eq!(zero.value(), "q");
        assert_eq!(root.child("1").unwrap().value(), "p");
    }

    #[test]
    fn empty_dataset_fails() {
        let dataset = Dataset::from_records(
            &["a"],
            "y",
            Vec::<([&str; 1], &str)>::new(),
        ).unwrap();
        assert!(matches!(build_tree(&dataset), Err(Error::EmptyDataset)));
        assert!(matches!(choose_root(&dataset), Err(Error::EmptyDataset)));
    }

    #[test]
    fn root_maximizes_gain() {
        let dataset = Dataset::from_records(
            &["noise", "signal"],
            "y",
            [
                (["a", "s"], "p"),
                (["b", "s"], "p"),
                (["a", "t"], "q"),
                (["b", "t"], "q"),
            ],
        ).unwrap();
        assert_eq!(choose_root(&dataset).unwrap(), Some("signal"));
    }

    #[test]
    fn tied_gain_goes_to_first_column() {
        // Both columns separate the labels perfectly.
        let dataset = Dataset::from_records(
            &["second", "first"],
            "y",
            [
                (["a", "c"], "p"),
                (["b", "d"], "q"),
            ],
        ).unwrap();
        for _ in 0..16 {
            assert_eq!(choose_root(&dataset).unwrap(), Some("second"));
        }
    }

    #[test]
    fn features_are_used_once_per_path() {
        let dataset = Dataset::from_records(
            &["x", "z"],
            "y",
            [
                (["0", "0"], "n"),
                (["0", "1"], "y"),
                (["1", "0"], "y"),
                (["1", "1"], "n"),
            ],
        ).unwrap();
        let tree = build_tree(&dataset).unwrap();
        let root = tree.root_node();
        for (_, child) in root.children() {
            assert!(!child.is_leaf());
            assert_ne!(child.value(), root.value());
            for (_, leaf) in child.children() {
                assert!(leaf.is_leaf());
            }
        }
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.n_leaves(), 4);
    }
}
