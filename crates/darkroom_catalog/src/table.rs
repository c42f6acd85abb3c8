//! Per-kind record storage with monotonic id allocation.

use std::collections::BTreeMap;

use crate::error::{CatalogError, Result};
use crate::id::RecordId;

/// Stores the records of one kind, keyed by id.
///
/// Ids are never reused: removing or restoring rows only ever moves the
/// allocator forward.
#[derive(Debug, Clone)]
pub struct Table<K, T> {
    next_id: u64,
    rows: BTreeMap<K, T>,
}

impl<K: RecordId, T> Table<K, T> {
    /// Creates an empty table. The first id handed out is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    /// Stores a record under a freshly allocated id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::IdOverflow`] once every id of the kind is used.
    pub fn insert(&mut self, row: T) -> Result<K> {
        let id = K::from_raw(self.next_id);
        self.next_id = Self::after(id)?;
        self.rows.insert(id, row);
        Ok(id)
    }

    /// Stores a record under a known id, e.g. when loading a snapshot.
    pub(crate) fn restore(&mut self, id: K, row: T) -> Result<()> {
        self.next_id = self.next_id.max(Self::after(id)?);
        self.rows.insert(id, row);
        Ok(())
    }

    /// The id following `id`. `u64::MAX` has none, so it is never stored.
    fn after(id: K) -> Result<u64> {
        id.raw()
            .checked_add(1)
            .ok_or(CatalogError::IdOverflow { kind: K::KIND })
    }

    /// Returns the record with the given id.
    #[must_use]
    pub fn get(&self, id: K) -> Option<&T> {
        self.rows.get(&id)
    }

    /// Returns the record with the given id, or [`CatalogError::NotFound`].
    pub fn require(&self, id: K) -> Result<&T> {
        self.rows.get(&id).ok_or(CatalogError::NotFound {
            kind: K::KIND,
            id: id.raw(),
        })
    }

    /// Returns `true` if a record with this id exists.
    #[must_use]
    pub fn contains(&self, id: K) -> bool {
        self.rows.contains_key(&id)
    }

    /// Iterates over records in id order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> {
        self.rows.iter().map(|(id, row)| (*id, row))
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Borrow the rows as a map.
    #[must_use]
    pub fn rows(&self) -> &BTreeMap<K, T> {
        &self.rows
    }
}

impl<K: RecordId, T> Default for Table<K, T> {
    fn default() -> Self {
        Self::new()
    }
}
