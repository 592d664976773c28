use std::collections::HashMap;


/// A single sample to classify:
/// a mapping from feature name to its discrete value.
/// An `Instance` carries no label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    values: HashMap<String, String>,
}


impl Instance {
    /// Construct an empty instance.
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the value of `feature`.
    /// Returns the old value if `feature` was already set.
    pub fn insert<K, V>(&mut self, feature: K, value: V) -> Option<String>
        where K: ToString,
              V: ToString,
    {
        self.values.insert(feature.to_string(), value.to_string())
    }


    /// Builder-style version of [`Instance::insert`].
    pub fn with<K, V>(mut self, feature: K, value: V) -> Self
        where K: ToString,
              V: ToString,
    {
        self.insert(feature, value);
        self
    }


    /// Returns the value of `feature`, if any.
    pub fn get(&self, feature: &str) -> Option<&str> {
        self.values.get(feature).map(String::as_str)
    }


    /// Number of features set.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if no feature is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}


impl<K, V> FromIterator<(K, V)> for Instance
    where K: ToString,
          V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter.into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { values }
    }
}


impl From<HashMap<String, String>> for Instance {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}
