//! String-keyed counter.
//!
//! A value with count zero is removed outright, so key absence and count
//! zero are the same state. The driver uses this to track node declarations
//! (self-paired tokens) separately from the graph's edge bookkeeping.

use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct Multiset {
    counts: HashMap<String, usize>,
}

impl Multiset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the stored count for `value` by `count`.
    ///
    /// Panics when `count` is zero: callers only ever add real occurrences.
    pub fn add(&mut self, value: impl Into<String>, count: usize) {
        assert!(count > 0, "multiset add requires a positive count");
        *self.counts.entry(value.into()).or_insert(0) += count;
    }

    pub fn has(&self, value: &str) -> bool {
        self.counts.contains_key(value)
    }

    /// Stored count for `value`, zero when absent.
    pub fn count(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Decrement the count for `value`, deleting the key when it hits zero.
    ///
    /// Panics when `value` is absent: removing what was never added is a
    /// caller bug, not an input condition.
    pub fn remove_one(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                self.counts.remove(value);
            }
            None => panic!("multiset remove_one on absent value {value:?}"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Visit each distinct value exactly once, in no particular order.
    /// Iteration stops early when `f` returns false.
    pub fn for_each_unique(&self, mut f: impl FnMut(&str) -> bool) {
        for value in self.counts.keys() {
            if !f(value) {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut m = Multiset::new();
        m.add("a", 2);
        m.add("a", 3);
        assert_eq!(m.count("a"), 5);
        assert!(m.has("a"));
    }

    #[test]
    fn test_count_absent_is_zero() {
        let m = Multiset::new();
        assert_eq!(m.count("a"), 0);
        assert!(!m.has("a"));
    }

    #[test]
    fn test_remove_one_deletes_at_zero() {
        let mut m = Multiset::new();
        m.add("a", 2);
        m.remove_one("a");
        assert_eq!(m.count("a"), 1);
        m.remove_one("a");
        assert!(!m.has("a"));
        assert!(m.is_empty());
    }

    #[test]
    #[should_panic(expected = "positive count")]
    fn test_add_zero_count_panics() {
        let mut m = Multiset::new();
        m.add("a", 0);
    }

    #[test]
    #[should_panic(expected = "absent value")]
    fn test_remove_one_absent_panics() {
        let mut m = Multiset::new();
        m.remove_one("a");
    }

    #[test]
    fn test_for_each_unique_visits_keys_once() {
        let mut m = Multiset::new();
        m.add("a", 3);
        m.add("b", 1);

        let mut seen = Vec::new();
        m.for_each_unique(|value| {
            seen.push(value.to_string());
            true
        });
        seen.sort_unstable();
        assert_eq!(seen, ["a", "b"]);
    }

    #[test]
    fn test_for_each_unique_early_termination() {
        let mut m = Multiset::new();
        m.add("a", 1);
        m.add("b", 1);
        m.add("c", 1);

        let mut visits = 0;
        m.for_each_unique(|_| {
            visits += 1;
            false
        });
        assert_eq!(visits, 1);
    }
}
