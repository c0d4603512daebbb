//! Ordered query parameter list and its URL serialization.

use serde::{Deserialize, Serialize};


/// Append-only ordered list of (name, value) pairs. Order is preserved
/// all the way into the serialized query string: the target API does not
/// care, but literal-output comparisons do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: &str, value: impl Into<String>) {
        self.pairs.push((name.to_string(), value.into()));
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// First value recorded under a name, for inspection in harnesses.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(pair_name, _)| pair_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// application/x-www-form-urlencoded serialization (space as `+`),
    /// the same encoder the browser's `URLSearchParams` uses. This fixes
    /// the byte shape of every generated URL.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(name, value)| (name.as_str(), value.as_str())))
            .finish()
    }
}
