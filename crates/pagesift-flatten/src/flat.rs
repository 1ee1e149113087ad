use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// A single-level key → value table derived from a nested document.
///
/// Iteration order is the traversal order of the leaves it was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatIndex(IndexMap<String, JsonValue>);

impl FlatIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: String, value: JsonValue) -> Option<JsonValue> {
        self.0.insert(key, value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Repack as a JSON object, preserving key order, so the result can be
    /// fed straight back into the directive engine.
    pub fn into_value(self) -> JsonValue {
        JsonValue::Object(self.0.into_iter().collect())
    }
}

impl FromIterator<(String, JsonValue)> for FlatIndex {
    fn from_iter<T: IntoIterator<Item = (String, JsonValue)>>(iter: T) -> Self {
        FlatIndex(IndexMap::from_iter(iter))
    }
}

impl IntoIterator for FlatIndex {
    type Item = (String, JsonValue);
    type IntoIter = indexmap::map::IntoIter<String, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
