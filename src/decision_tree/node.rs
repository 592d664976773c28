//! A node struct used in the ID3 decision tree.
use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;


/// A node of a decision tree.
/// Children are kept in the sorted order of the feature values,
/// so traversal and serialization are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Tests `feature` and branches on its value.
    /// Every key of `children` was observed in the training samples
    /// that reached this node.
    Decision {
        /// Name of the tested feature.
        feature:  String,
        /// Child for each observed value.
        children: BTreeMap<String, Node>,
    },
    /// Predicts `label`.
    Leaf {
        /// Predicted label.
        label: String,
    },
}


impl Node {
    pub(crate) fn decision<T: ToString>(
        feature:  T,
        children: BTreeMap<String, Node>,
    ) -> Self
    {
        Self::Decision { feature: feature.to_string(), children, }
    }


    pub(crate) fn leaf<T: ToString>(label: T) -> Self {
        Self::Leaf { label: label.to_string(), }
    }


    /// Returns `true` if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        match self {
            Self::Decision { .. } => false,
            Self::Leaf { .. } => true,
        }
    }


    /// The tested feature name for a decision node,
    /// or the predicted label for a leaf.
    pub fn value(&self) -> &str {
        match self {
            Self::Decision { feature, .. } => feature,
            Self::Leaf { label } => label,
        }
    }


    /// Returns the child reached when the tested feature equals `value`.
    /// Leaves have no child.
    pub fn child(&self, value: &str) -> Option<&Node> {
        match self {
            Self::Decision { children, .. } => children.get(value),
            Self::Leaf { .. } => None,
        }
    }


    /// Iterates over `(feature value, child)` pairs in sorted order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        let children = match self {
            Self::Decision { children, .. } => Some(children),
            Self::Leaf { .. } => None,
        };
        children.into_iter()
            .flatten()
            .map(|(value, child)| (value.as_str(), child))
    }


    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.children()
            .map(|(_, child)| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }


    /// Number of leaves of this sub-tree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Decision { children, .. } => {
                children.values().map(Node::n_leaves).sum()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Number of nodes of this sub-tree.
    pub fn n_nodes(&self) -> usize {
        1 + self.children()
            .map(|(_, child)| child.n_nodes())
            .sum::<usize>()
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Decision { feature, children } => {
                let feature = escape_dot(feature);
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{feature} ?\" ];\n",
                )];

                let mut next_id = id + 1;
                for (value, child) in children {
                    let child_id = next_id;
                    let value = escape_dot(value);
                    let (mut child_info, return_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                    ));
                    next_id = return_id;
                }

                (info, next_id)
            },
            Node::Leaf { label } => {
                let label = escape_dot(label);
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            }
        }
    }
}


/// Escapes `\\` and `"` so that `text` fits in a quoted dot label.
fn escape_dot(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\\' || c == '"' { escaped.push('\\'); }
        escaped.push(c);
    }
    escaped
}


#[cfg(test)]
mod tests {
    use super::*;

    fn stump() -> Node {
        let children = BTreeMap::from([
            ("sunny".to_string(), Node::leaf("yes")),
            ("rainy".to_string(), Node::leaf("no")),
        ]);
        Node::decision("weather", children)
    }

    #[test]
    fn traversal_contract() {
        let root = stump();
        assert!(!root.is_leaf());
        assert_eq!(root.value(), "weather");

        let sunny = root.child("sunny").unwrap();
        assert!(sunny.is_leaf());
        assert_eq!(sunny.value(), "yes");
        assert!(root.child("cloudy").is_none());
        assert!(sunny.child("sunny").is_none());
    }

    #[test]
    fn children_are_sorted() {
        let root = stump();
        let values = root.children()
            .map(|(v, _)| v)
            .collect::<Vec<_>>();
        assert_eq!(values, vec!["rainy", "sunny"]);
    }

    #[test]
    fn size_statistics() {
        let root = stump();
        assert_eq!(root.depth(), 1);
        assert_eq!(root.n_leaves(), 2);
        assert_eq!(root.n_nodes(), 3);

        let leaf = Node::leaf("yes");
        assert_eq!(leaf.depth(), 0);
        assert_eq!(leaf.n_nodes(), 1);
    }

    #[test]
    fn dot_ids_are_unique() {
        let (info, next_id) = stump().to_dot_info(0);
        assert_eq!(next_id, 3);
        assert_eq!(info.len(), 5);
        assert!(info.iter().any(|row| row.contains("node_0 -- node_2")));
    }

    #[test]
    fn dot_labels_are_escaped() {
        let children = BTreeMap::from([
            ("say \"hi\"".to_string(), Node::leaf("a\\b")),
        ]);
        let root = Node::decision("quote\"d", children);
        let (info, _) = root.to_dot_info(0);

        assert!(info[0].contains(r#"label = "quote\"d ?""#));
        assert!(info[1].contains(r#"label = "a\\b""#));
        assert!(info[2].contains(r#"label = "say \"hi\"""#));
    }
}
