use polars::prelude::*;
use serde::{Serialize, Deserialize};

use std::collections::HashMap;

use crate::common::utils;
use crate::error::{Error, Result};
use super::feature::Feature;
use super::partition::Partition;
use super::instance::Instance;


/// A table of labeled samples.
/// Each column is a [`Feature`] holding discrete values,
/// and each row carries one label.
/// A `Dataset` is never mutated by the tree builder;
/// it is only viewed through [`Partition`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DatasetParts")]
pub struct Dataset {
    #[serde(skip)]
    name_to_index: HashMap<String, usize>,
    features: Vec<Feature>,
    target: String,
    labels: Vec<String>,
}


/// The serialized form of [`Dataset`].
/// The name index is rebuilt and the columns are checked on load.
#[derive(Deserialize)]
struct DatasetParts {
    features: Vec<Feature>,
    target: String,
    labels: Vec<String>,
}


impl TryFrom<DatasetParts> for Dataset {
    type Error = Error;
    fn try_from(parts: DatasetParts) -> Result<Self> {
        Self::new(parts.features, parts.target, parts.labels)
    }
}


impl Dataset {
    /// Construct a dataset from feature columns and the label column.
    /// `target` is the name of the label column.
    ///
    /// Returns `Err` if a column length differs from `labels.len()`
    /// or two columns share the same name.
    pub fn new<T, I, L>(features: Vec<Feature>, target: T, labels: I)
        -> Result<Self>
        where T: ToString,
              I: IntoIterator<Item = L>,
              L: ToString,
    {
        let target = target.to_string();
        let labels = labels.into_iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>();

        let n_sample = labels.len();
        let mut name_to_index = HashMap::with_capacity(features.len());
        for (i, feature) in features.iter().enumerate() {
            if feature.len() != n_sample {
                return Err(Error::ShapeMismatch {
                    column: feature.name().to_string(),
                    expected: n_sample,
                    got: feature.len(),
                });
            }
            let name = feature.name().to_string();
            if name == target || name_to_index.insert(name, i).is_some() {
                return Err(Error::DuplicateFeature {
                    feature: feature.name().to_string(),
                });
            }
        }

        Ok(Self { name_to_index, features, target, labels })
    }


    /// Construct a dataset from row records.
    /// Each record is a pair of the feature values,
    /// in the order of `names`, and the label.
    ///
    /// ```
    /// use id3tree::Dataset;
    /// let dataset = Dataset::from_records(
    ///     &["weather"],
    ///     "play",
    ///     [(["sunny"], "yes"), (["rainy"], "no")],
    /// ).unwrap();
    /// assert_eq!(dataset.shape(), (2, 1));
    /// ```
    pub fn from_records<N, T, I, R, V, L>(names: &[N], target: T, records: I)
        -> Result<Self>
        where N: AsRef<str>,
              T: ToString,
              I: IntoIterator<Item = (R, L)>,
              R: IntoIterator<Item = V>,
              V: ToString,
              L: ToString,
    {
        let mut features = names.iter()
            .map(|name| Feature::empty(name.as_ref()))
            .collect::<Vec<_>>();
        let mut labels = Vec::new();

        for (row, (values, label)) in records.into_iter().enumerate() {
            let mut n_value = 0_usize;
            for (i, value) in values.into_iter().enumerate() {
                let feature = features.get_mut(i)
                    .ok_or_else(|| Error::ShapeMismatch {
                        column: format!("row {row}"),
                        expected: names.len(),
                        got: i + 1,
                    })?;
                feature.append(value);
                n_value += 1;
            }
            if n_value != names.len() {
                return Err(Error::ShapeMismatch {
                    column: format!("row {row}"),
                    expected: names.len(),
                    got: n_value,
                });
            }
            labels.push(label.to_string());
        }

        Self::new(features, target, labels)
    }


    /// Convert a polars `DataFrame` into a [`Dataset`].
    /// The column named `target` becomes the label column;
    /// every other column becomes a feature.
    /// All values are cast to strings, so numeric columns are
    /// treated as categorical.
    pub fn from_dataframe<S: AsRef<str>>(data: DataFrame, target: S)
        -> Result<Self>
    {
        let target = target.as_ref();
        let mut labels = None;
        let mut features = Vec::with_capacity(data.width());

        for series in data.get_columns() {
            let name = series.name();
            let vals = column_to_strings(series)?;
            if name == target {
                labels = Some(vals);
            } else {
                features.push(Feature::new(name, vals));
            }
        }

        let labels = labels.ok_or_else(|| Error::MissingTarget {
            column: target.to_string(),
        })?;

        Self::new(features, target, labels)
    }


    /// Returns the pair of the number of samples
    /// and the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.labels.len(), self.features.len())
    }


    /// Returns `true` if the dataset has no sample.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }


    /// Returns the name of the label column.
    pub fn target_name(&self) -> &str {
        &self.target
    }


    /// Returns the labels.
    pub fn labels(&self) -> &[String] {
        &self.labels[..]
    }


    /// Returns the label of the `row`-th sample,
    /// or `None` if `row` is out of range.
    pub fn label(&self, row: usize) -> Option<&str> {
        self.labels.get(row).map(String::as_str)
    }


    /// Returns the label of the `row`-th sample.
    /// `row` must be in range.
    #[inline]
    pub(crate) fn label_at(&self, row: usize) -> &str {
        &self.labels[row]
    }


    /// Returns a slice of the features.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the feature names in column order.
    pub fn feature_names(&self) -> Vec<&str> {
        self.features.iter()
            .map(Feature::name)
            .collect()
    }


    /// Returns the column index of the feature named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }


    /// Returns the feature named `name`.
    pub fn feature(&self, name: &str) -> Result<&Feature> {
        self.position(name)
            .map(|i| &self.features[i])
            .ok_or_else(|| Error::UnknownFeature { feature: name.to_string() })
    }


    /// Returns the value of feature `feature` (a column index)
    /// at the `row`-th sample.
    #[inline]
    pub(crate) fn value(&self, row: usize, feature: usize) -> &str {
        &self.features[feature][row]
    }


    /// Returns the `row`-th sample without its label.
    ///
    /// Returns [`Error::RowOutOfRange`] if `row` is not a sample index.
    pub fn instance(&self, row: usize) -> Result<Instance> {
        let n_sample = self.labels.len();
        if row >= n_sample {
            return Err(Error::RowOutOfRange { row, n_sample });
        }
        let instance = self.features.iter()
            .map(|feature| (feature.name(), &feature[row]))
            .collect();
        Ok(instance)
    }


    /// Returns the most frequent label.
    /// Ties go to the lexicographically smallest label.
    pub fn majority_label(&self) -> Option<&str> {
        let counts = utils::label_counts(self.labels.iter().map(String::as_str));
        utils::majority(&counts)
    }


    /// Returns a view over every sample and every feature.
    pub fn partition(&self) -> Partition<'_> {
        Partition::full(self)
    }


    /// Entropy (in bits) of the label distribution.
    /// See [`entropy`](crate::entropy).
    pub fn entropy(&self) -> f64 {
        self.partition().entropy()
    }


    /// Information gain of splitting the whole dataset on `feature`.
    /// See [`information_gain`](crate::information_gain).
    pub fn information_gain(&self, feature: &str) -> Result<f64> {
        crate::information_gain(feature, self)
    }
}


/// Reads a column as a vector of strings.
/// Null cells are reported as [`Error::MissingValue`].
fn column_to_strings(series: &Series) -> Result<Vec<String>> {
    let name = series.name();
    let series = series.cast(&DataType::Utf8)?;
    let vals = series.utf8()?
        .into_iter()
        .enumerate()
        .map(|(row, val)| {
            val.map(str::to_string)
                .ok_or_else(|| Error::MissingValue {
                    column: name.to_string(),
                    row,
                })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(vals)
}
