use serde::{Serialize, Deserialize};

use std::ops::Index;
use std::collections::BTreeSet;


/// A named column of discrete values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    name: String,
    vals: Vec<String>,
}


impl Feature {
    /// Construct a feature named `name` holding `vals`.
    pub fn new<T, I, V>(name: T, vals: I) -> Self
        where T: ToString,
              I: IntoIterator<Item = V>,
              V: ToString,
    {
        let vals = vals.into_iter()
            .map(|v| v.to_string())
            .collect();
        Self { name: name.to_string(), vals }
    }


    /// Construct an empty feature.
    pub(crate) fn empty<T: ToString>(name: T) -> Self {
        Self { name: name.to_string(), vals: Vec::new() }
    }


    /// Returns the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the values of this feature.
    pub fn vals(&self) -> &[String] {
        &self.vals[..]
    }


    /// Number of values.
    pub fn len(&self) -> usize {
        self.vals.len()
    }


    /// Returns `true` if the feature has no value.
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }


    /// Returns the distinct values in sorted order.
    pub fn distinct_values(&self) -> BTreeSet<&str> {
        self.vals.iter()
            .map(String::as_str)
            .collect()
    }


    pub(crate) fn append<T: ToString>(&mut self, val: T) {
        self.vals.push(val.to_string());
    }
}


impl Index<usize> for Feature {
    type Output = str;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.vals[idx]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_values_are_sorted() {
        let feat = Feature::new("weather", ["sunny", "rainy", "sunny"]);
        let vals = feat.distinct_values()
            .into_iter()
            .collect::<Vec<_>>();
        assert_eq!(vals, vec!["rainy", "sunny"]);
        assert_eq!(&feat[1], "rainy");
        assert_eq!(feat.len(), 3);
    }
}
