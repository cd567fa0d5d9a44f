// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory record store.
//!
//! Records live for the lifetime of the process. Appending a record and
//! advancing the id counter happen under one lock, so concurrent ingests
//! can neither share an id nor lose a write.

use crate::models::{NewRecord, TrackerRecord};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared handle to the append-only record collection.
#[derive(Clone, Default)]
pub struct RecordStore {
    inner: Arc<Mutex<StoreInner>>,
}

struct StoreInner {
    next_id: u64,
    /// Upload order; newest at the tail
    records: Vec<TrackerRecord>,
}

impl Default for StoreInner {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }
}

impl RecordStore {
    /// Create an empty store whose first id will be 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next id to `record` and append it.
    pub fn append(&self, record: NewRecord) -> TrackerRecord {
        let mut inner = self.inner.lock();
        let stored = TrackerRecord::new(inner.next_id, record);
        inner.next_id += 1;
        inner.records.push(stored.clone());
        stored
    }

    /// Snapshot of every record, most recently appended first.
    pub fn list_newest_first(&self) -> Vec<TrackerRecord> {
        self.inner.lock().records.iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_record(username: &str, activity: &str, duration: i32, calories: i32) -> NewRecord {
        NewRecord {
            username: username.to_string(),
            activity: activity.to_string(),
            duration,
            calories,
        }
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert!(store.list_newest_first().is_empty());
    }

    #[test]
    fn test_append_assigns_sequential_ids() {
        let store = RecordStore::new();

        let alice = store.append(new_record("alice", "run", 30, 250));
        let bob = store.append(new_record("bob", "swim", 45, 400));

        assert_eq!(alice.id, 1);
        assert_eq!(alice.username, "alice");
        assert_eq!(bob.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_is_reverse_of_upload_order() {
        let store = RecordStore::new();
        for i in 0..5 {
            store.append(new_record(&format!("user{}", i), "walk", i, i * 10));
        }

        let ids: Vec<u64> = store.list_newest_first().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_listing_does_not_mutate() {
        let store = RecordStore::new();
        store.append(new_record("alice", "run", 30, 250));
        store.append(new_record("bob", "swim", 45, 400));

        let first = store.list_newest_first();
        let second = store.list_newest_first();
        assert_eq!(first, second);

        // Ids keep counting after interleaved reads
        assert_eq!(store.append(new_record("carol", "row", 20, 180)).id, 3);
    }

    #[test]
    fn test_clones_share_state() {
        let store = RecordStore::new();
        let handle = store.clone();
        handle.append(new_record("alice", "run", 30, 250));

        assert_eq!(store.len(), 1);
        assert_eq!(store.list_newest_first()[0].username, "alice");
    }

    #[test]
    fn test_fresh_stores_are_isolated() {
        let a = RecordStore::new();
        let b = RecordStore::new();
        a.append(new_record("alice", "run", 30, 250));

        assert!(b.is_empty());
        assert_eq!(b.append(new_record("bob", "swim", 45, 400)).id, 1);
    }
}
