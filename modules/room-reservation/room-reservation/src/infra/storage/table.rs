use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use parking_lot::RwLock;

/// A keyed collection with store-assigned `i64` identifiers.
pub struct Table<T> {
    rows: RwLock<BTreeMap<i64, T>>,
    next_id: AtomicI64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<T: Clone> Table<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an identifier, build the row from it and store it.
    pub fn insert_with(&self, build: impl FnOnce(i64) -> T) -> T {
        let mut rows = self.rows.write();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let row = build(id);
        rows.insert(id, row.clone());
        row
    }

    /// Like [`Table::insert_with`], unless an existing row satisfies `conflicts`.
    /// The check and the insert happen under one write lock.
    pub fn insert_unless(
        &self,
        conflicts: impl Fn(&T) -> bool,
        build: impl FnOnce(i64) -> T,
    ) -> Option<T> {
        let mut rows = self.rows.write();
        if rows.values().any(conflicts) {
            return None;
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let row = build(id);
        rows.insert(id, row.clone());
        Some(row)
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.rows.read().get(&id).cloned()
    }

    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.read().values().find(|row| predicate(*row)).cloned()
    }

    pub fn count(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.rows.read().values().filter(|row| predicate(*row)).count()
    }

    pub fn all(&self) -> Vec<T> {
        self.rows.read().values().cloned().collect()
    }

    /// Overwrite the row stored under `id`. Absent rows are not created.
    pub fn replace(&self, id: i64, row: T) -> Option<T> {
        let mut rows = self.rows.write();
        let slot = rows.get_mut(&id)?;
        *slot = row.clone();
        Some(row)
    }

    pub fn remove(&self, id: i64) -> Option<T> {
        self.rows.write().remove(&id)
    }
}
