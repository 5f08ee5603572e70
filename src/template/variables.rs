//! Placeholder variables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Built-in `title` value.
pub const DEFAULT_TITLE: &str = "Document Title";

/// Built-in `author` value.
pub const DEFAULT_AUTHOR: &str = "Author Name";

/// Built-in `content` value.
pub const DEFAULT_CONTENT: &str = "Your content here...";

/// Format of the built-in `date` value.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Mapping from placeholder name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables {
    values: BTreeMap<String, String>,
}

impl Variables {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in defaults: `title`, `author`, `date` (today) and `content`.
    pub fn defaults() -> Self {
        let today = chrono::Local::now().format(DATE_FORMAT).to_string();
        Self::new()
            .with("title", DEFAULT_TITLE)
            .with("author", DEFAULT_AUTHOR)
            .with("date", today)
            .with("content", DEFAULT_CONTENT)
    }

    /// Merge layers by precedence: built-in defaults, then values declared
    /// by the template, then caller values. Later layers win.
    pub fn resolve(declared: &Variables, caller: &Variables) -> Self {
        let mut values = Self::defaults();
        values.merge(declared);
        values.merge(caller);
        values
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
        self.values.insert(key.into(), value.to_string())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a `key=value` assignment.
    pub fn insert_assignment(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = parse_assignment(assignment)?;
        self.values.insert(key, value);
        Ok(())
    }

    /// Copy every value of `other` into this map, overwriting.
    pub fn merge(&mut self, other: &Variables) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Get a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check if a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut variables = Self::new();
        variables.extend(iter);
        variables
    }
}

impl<K: Into<String>, V: ToString> Extend<(K, V)> for Variables {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Split `key=value` at the first `=`. The key is trimmed and must not be
/// empty; the value is kept as written.
pub fn parse_assignment(assignment: &str) -> Result<(String, String)> {
    let (key, value) = assignment.split_once('=').ok_or_else(|| {
        Error::Other(format!(
            "Invalid variable '{}': expected key=value",
            assignment
        ))
    })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(Error::Other(format!(
            "Invalid variable '{}': empty name",
            assignment
        )));
    }

    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let vars = Variables::defaults();
        assert_eq!(vars.len(), 4);
        assert_eq!(vars.get("title"), Some(DEFAULT_TITLE));
        assert_eq!(vars.get("author"), Some("Author Name"));
        assert_eq!(vars.get("content"), Some(DEFAULT_CONTENT));

        let date = vars.get("date").unwrap();
        assert!(chrono::NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_precedence() {
        let declared = Variables::new().with("author", "Jane").with("dept", "Sales");
        let caller = Variables::new().with("author", "John");

        let vars = Variables::resolve(&declared, &caller);
        assert_eq!(vars.get("author"), Some("John"));
        assert_eq!(vars.get("dept"), Some("Sales"));
        assert_eq!(vars.get("title"), Some(DEFAULT_TITLE));
    }

    #[test]
    fn test_values_are_stringified() {
        let vars: Variables = vec![("count", 3.5)].into_iter().collect();
        assert_eq!(vars.get("count"), Some("3.5"));

        let mut vars = Variables::new();
        vars.insert("done", true);
        assert_eq!(vars.get("done"), Some("true"));
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("name=Jane Doe").unwrap(),
            ("name".to_string(), "Jane Doe".to_string())
        );
        assert_eq!(
            parse_assignment(" expr = a=b").unwrap(),
            ("expr".to_string(), " a=b".to_string())
        );
        assert_eq!(
            parse_assignment("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
        assert!(parse_assignment("no-equals").is_err());
        assert!(parse_assignment("=value").is_err());
    }

    #[test]
    fn test_insert_assignment() {
        let mut vars = Variables::new();
        vars.insert_assignment("author=John").unwrap();
        assert_eq!(vars.get("author"), Some("John"));
        assert!(vars.insert_assignment("broken").is_err());
    }
}
