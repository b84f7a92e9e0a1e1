//! Unordered set of node identifiers.

use std::collections::HashSet;

/// Set of string values. No ordering guarantees.
#[derive(Debug, Default, Clone)]
pub struct Set {
    values: HashSet<String>,
}

impl Set {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. Idempotent.
    pub fn add(&mut self, value: impl Into<String>) {
        self.values.insert(value.into());
    }

    pub fn has(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Delete a value. No-op when absent.
    pub fn remove(&mut self, value: &str) {
        self.values.remove(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}
