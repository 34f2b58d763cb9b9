//! Ordered, case-sensitive header map

use std::collections::{BTreeMap, HashMap};

use http::header::{HeaderMap, HeaderName, HeaderValue};

/// Header names mapped to values, in insertion order.
///
/// Lookups are exact: `Svix-Id` and `svix-id` are different keys. Inserting an
/// existing key replaces its value without moving it.
///
/// Backed by a plain list, so `insert` and `get` scan every entry and building
/// a map of `n` headers costs O(n²). Fine for request headers (a few dozen
/// at most); not meant as a general-purpose map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header, returning the value it replaced
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert into the map the Svix engine reads.
    ///
    /// Entries that are not valid HTTP header names or values are left out;
    /// if that drops a signature header the engine reports it as missing.
    /// `HeaderMap` folds name casing, so later entries replace earlier ones
    /// that differ only in case.
    pub(crate) fn to_header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                map.insert(name, value);
            }
        }
        map
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        headers.extend(iter);
        headers
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Headers {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Headers {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for Headers {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for Headers {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        let headers = Headers::from([("Svix-Id", "msg_1")]);
        assert_eq!(headers.get("Svix-Id"), Some("msg_1"));
        assert_eq!(headers.get("svix-id"), None);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut headers = Headers::from([("a", "1"), ("b", "2")]);
        assert_eq!(headers.insert("a", "3"), Some("1".to_string()));

        let entries: Vec<_> = headers.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_remove() {
        let mut headers = Headers::from([("a", "1"), ("b", "2")]);
        assert_eq!(headers.remove("a"), Some("1".to_string()));
        assert_eq!(headers.remove("a"), None);
        assert_eq!(headers.len(), 1);
        assert!(!headers.contains_key("a"));
    }

    #[test]
    fn test_many_headers_keep_order() {
        let headers: Headers = (0..500).map(|i| (format!("x-h{}", i), i.to_string())).collect();
        assert_eq!(headers.len(), 500);
        assert_eq!(headers.iter().next(), Some(("x-h0", "0")));
        assert_eq!(headers.get("x-h499"), Some("499"));
    }

    #[test]
    fn test_to_header_map_skips_invalid_entries() {
        let headers = Headers::from([
            ("Svix-Id", "msg_1"),
            ("bad name", "x"),
            ("x-bad-value", "line\nbreak"),
        ]);
        let map = headers.to_header_map();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("svix-id").unwrap(), "msg_1");
    }
}
