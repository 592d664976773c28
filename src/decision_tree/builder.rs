use crate::{Dataset, Learner};
use crate::error::{Error, Result};
use super::classifier::DecisionTreeClassifier;
use super::id3;

use std::fmt;


/// A struct that builds [`Id3`].
/// `Id3Builder` keeps the parameters for growing a tree.
///
/// # Example
///
/// ```no_run
/// use id3tree::prelude::*;
///
/// let dataset = DatasetReader::default()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .target_feature("play")
///     .read()
///     .unwrap();
///
/// let id3 = Id3Builder::new()
///     .features(["outlook", "humidity"])
///     .build();
/// let f = id3.train(&dataset).unwrap();
/// let accuracy = f.accuracy(&dataset).unwrap();
/// println!("accuracy (train) is: {accuracy}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Id3Builder {
    features: Option<Vec<String>>,
}


impl Id3Builder {
    /// Construct a new instance of [`Id3Builder`].
    /// By default, every feature of the training set is a candidate
    /// for splitting.
    pub fn new() -> Self {
        Self::default()
    }


    /// Restrict the candidate features to `features`.
    /// When gains tie, the feature listed first wins.
    pub fn features<I, S>(mut self, features: I) -> Self
        where I: IntoIterator<Item = S>,
              S: ToString,
    {
        let features = features.into_iter()
            .map(|f| f.to_string())
            .collect();
        self.features = Some(features);
        self
    }


    /// Build an [`Id3`].
    /// This method consumes `self`.
    pub fn build(self) -> Id3 {
        Id3 { features: self.features }
    }
}


/// The ID3 algorithm as a [`Learner`].
/// [`Id3`] is constructed by [`Id3Builder`].
#[derive(Debug, Clone)]
pub struct Id3 {
    features: Option<Vec<String>>,
}


impl Id3 {
    /// Column indices of the candidate features of `dataset`.
    fn columns(&self, dataset: &Dataset) -> Result<Vec<usize>> {
        let Some(features) = &self.features else {
            return Ok((0..dataset.shape().1).collect());
        };

        let mut columns = Vec::with_capacity(features.len());
        for name in features {
            let column = dataset.position(name)
                .ok_or_else(|| Error::UnknownFeature { feature: name.clone() })?;
            if columns.contains(&column) {
                return Err(Error::DuplicateFeature { feature: name.clone() });
            }
            columns.push(column);
        }
        Ok(columns)
    }
}


impl Learner for Id3 {
    type Model = DecisionTreeClassifier;

    fn name(&self) -> &str {
        "ID3 Decision Tree"
    }

    fn train(&self, dataset: &Dataset) -> Result<Self::Model> {
        let columns = self.columns(dataset)?;
        let partition = dataset.partition().with_features(columns);
        let tree = id3::grow_tree(partition)?;

        Ok(DecisionTreeClassifier::from_parts(dataset.clone(), tree))
    }
}


impl fmt::Display for Id3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let features = match &self.features {
            Some(features) => features.join(", "),
            None => "all".to_string(),
        };
        writeln!(
            f,
            "\
            ----------\n\
            # {}\n\n\
            - Split by: information gain\n\
            - Features: {features}\n\
            ----------\
            ",
            self.name(),
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Classifier, Instance};

    fn dataset() -> Dataset {
        Dataset::from_records(
            &["noise", "signal"],
            "y",
            [
                (["a", "s"], "p"),
                (["b", "s"], "p"),
                (["a", "t"], "q"),
                (["b", "t"], "q"),
            ],
        ).unwrap()
    }

    #[test]
    fn default_uses_every_feature() {
        let f = Id3Builder::new().build().train(&dataset()).unwrap();
        assert_eq!(f.tree().root_node().value(), "signal");
        assert_eq!(f.training_set().shape(), (4, 2));
    }

    #[test]
    fn restricted_features() {
        let f = Id3Builder::new()
            .features(["noise"])
            .build()
            .train(&dataset())
            .unwrap();
        let root = f.tree().root_node();
        assert_eq!(root.value(), "noise");
        // `noise` alone cannot separate the labels.
        assert!(root.children().all(|(_, child)| child.is_leaf()));

        let x = Instance::new().with("noise", "a");
        assert_eq!(f.classify(&x).unwrap(), "p");
    }

    #[test]
    fn unknown_feature_is_rejected() {
        let result = Id3Builder::new()
            .features(["humidity"])
            .build()
            .train(&dataset());
        assert!(matches!(result, Err(Error::UnknownFeature { .. })));
    }

    #[test]
    fn repeated_feature_is_rejected() {
        let result = Id3Builder::new()
            .features(["noise", "noise"])
            .build()
            .train(&dataset());
        assert!(matches!(result, Err(Error::DuplicateFeature { .. })));
    }

    #[test]
    fn display_lists_the_features() {
        let id3 = Id3Builder::new().features(["noise", "signal"]).build();
        let text = id3.to_string();
        assert!(text.contains("ID3 Decision Tree"));
        assert!(text.contains("noise, signal"));
    }
}
