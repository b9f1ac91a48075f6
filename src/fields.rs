//! Ordered multi-value field map for form data.
//!
//! This module provides [`FieldMap`], a wrapper around [`IndexMap`] that maps
//! field names to ordered lists of string-encoded values. It is the working
//! state of every encoding call: the serializer appends each classified
//! scalar here, and the renderer consumes the finished map exactly once.
//!
//! ## Why IndexMap?
//!
//! `FieldMap` uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: iteration never depends on hash seeds
//! - **Append order**: each key's value list preserves insertion order,
//!   which fixes the `[0]`, `[1]`, ... indices of multi-valued fields
//!
//! Keys themselves are sorted at render time, so map-level iteration order
//! never leaks into the encoded bytes.
//!
//! ## Examples
//!
//! ```rust
//! use serde_urlform::FieldMap;
//!
//! let mut fields = FieldMap::new();
//! fields.append("tag", "rust");
//! fields.append("tag", "serde");
//! fields.append("name", "Alice");
//!
//! assert_eq!(fields.len(), 2);
//! assert_eq!(fields.get("tag"), Some(&["rust".to_string(), "serde".to_string()][..]));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of field names to ordered lists of string values.
///
/// This is the accumulator behind every encoding call, and also the
/// "bypass shape": callers who have already shaped their data as
/// key→values pairs can pass a `FieldMap` to [`encode`](crate::encode)
/// (wrapped in [`Value::Fields`](crate::Value::Fields)) and skip type
/// dispatch entirely.
///
/// # Examples
///
/// ```rust
/// use serde_urlform::FieldMap;
///
/// let mut fields = FieldMap::new();
/// fields.append("first", "1");
/// fields.append("second", "2");
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = fields.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap(IndexMap<String, Vec<String>>);

impl FieldMap {
    /// Creates an empty `FieldMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_urlform::FieldMap;
    ///
    /// let fields = FieldMap::new();
    /// assert!(fields.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        FieldMap(IndexMap::new())
    }

    /// Creates an empty `FieldMap` with the specified key capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_urlform::FieldMap;
    ///
    /// let fields = FieldMap::with_capacity(10);
    /// assert!(fields.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FieldMap(IndexMap::with_capacity(capacity))
    }

    /// Appends `value` to the ordered list associated with `key`, creating
    /// the list on first use.
    ///
    /// This operation never fails and never removes or reorders existing
    /// values; a key appended to twice holds both values in append order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_urlform::FieldMap;
    ///
    /// let mut fields = FieldMap::new();
    /// fields.append("id", "1");
    /// fields.append("id", "2");
    /// assert_eq!(fields.get("id"), Some(&["1".to_string(), "2".to_string()][..]));
    /// ```
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Replaces the whole value list for `key`.
    ///
    /// If the map already contained this key, the old list is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_urlform::FieldMap;
    ///
    /// let mut fields = FieldMap::new();
    /// assert!(fields.insert("key", vec!["a".to_string()]).is_none());
    /// assert!(fields.insert("key", vec!["b".to_string()]).is_some());
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) -> Option<Vec<String>> {
        self.0.insert(key.into(), values)
    }

    /// Returns the value list associated with `key`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_urlform::FieldMap;
    ///
    /// let mut fields = FieldMap::new();
    /// fields.append("key", "42");
    /// assert_eq!(fields.get("key"), Some(&["42".to_string()][..]));
    /// assert_eq!(fields.get("missing"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Returns the number of distinct keys in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_urlform::FieldMap;
    ///
    /// let mut fields = FieldMap::new();
    /// assert_eq!(fields.len(), 0);
    /// fields.append("key", "a");
    /// fields.append("key", "b");
    /// assert_eq!(fields.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_urlform::FieldMap;
    ///
    /// let fields = FieldMap::new();
    /// assert!(fields.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Vec<String>> {
        self.0.keys()
    }

    /// Returns an iterator over the value lists of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Vec<String>> {
        self.0.values()
    }

    /// Returns an iterator over the key/value-list pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }
}

impl Default for FieldMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, Vec<String>>> for FieldMap {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        FieldMap(map.into_iter().collect())
    }
}

impl From<FieldMap> for HashMap<String, Vec<String>> {
    fn from(fields: FieldMap) -> Self {
        fields.0.into_iter().collect()
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Vec<String>)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        FieldMap(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, String)> for FieldMap {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.append(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_creates_list_on_first_use() {
        let mut fields = FieldMap::new();
        assert_eq!(fields.get("k"), None);
        fields.append("k", "v");
        assert_eq!(fields.get("k"), Some(&["v".to_string()][..]));
    }

    #[test]
    fn test_append_preserves_order() {
        let mut fields = FieldMap::new();
        fields.append("k", "a");
        fields.append("k", "b");
        fields.append("k", "c");
        let expected: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(fields.get("k"), Some(&expected[..]));
    }

    #[test]
    fn test_keys_are_unique() {
        let mut fields = FieldMap::new();
        fields.append("a", "1");
        fields.append("b", "2");
        fields.append("a", "3");
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_extend_appends_pairs() {
        let mut fields = FieldMap::new();
        fields.extend(vec![
            ("k".to_string(), "a".to_string()),
            ("k".to_string(), "b".to_string()),
        ]);
        assert_eq!(fields.get("k").map(<[String]>::len), Some(2));
    }
}
