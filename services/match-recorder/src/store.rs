//! In-memory match store
//!
//! Append-only, insertion-ordered and unbounded. Handlers run on a
//! multi-threaded runtime, so every access goes through a mutex and the
//! count returned by [`MatchStore::append`] is taken inside the same
//! critical section as the push.

use serde_json::Value;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A single reported match. Schema-less: any JSON value is accepted as-is.
pub type MatchRecord = Value;

#[derive(Debug, Default)]
pub struct MatchStore {
    records: Mutex<Vec<MatchRecord>>,
}

impl MatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns the store length after the push.
    pub fn append(&self, record: MatchRecord) -> usize {
        let mut records = self.lock();
        records.push(record);
        records.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Ordered copy of every stored record.
    pub fn records(&self) -> Vec<MatchRecord> {
        self.lock().clone()
    }

    // A panic mid-push cannot leave the Vec in a bad state, so poisoning is ignored
    fn lock(&self) -> MutexGuard<'_, Vec<MatchRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_store_is_empty() {
        let store = MatchStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_append_returns_running_count() {
        let store = MatchStore::new();
        assert_eq!(store.append(json!({"winner": "teamA"})), 1);
        assert_eq!(store.append(json!({"winner": "teamB"})), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let store = MatchStore::new();
        let record = json!({"winner": "teamA", "score": [3, 1]});
        store.append(record.clone());
        store.append(Value::Null);
        store.append(record.clone());

        assert_eq!(store.records(), vec![record.clone(), Value::Null, record]);
    }

    #[test]
    fn test_parallel_appends_get_distinct_counts() {
        let store = Arc::new(MatchStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..100)
                        .map(|i| store.append(json!({"thread": t, "i": i})))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut counts: Vec<usize> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        counts.sort_unstable();

        assert_eq!(counts, (1..=800).collect::<Vec<_>>());
        assert_eq!(store.len(), 800);
    }
}
