//! Collections: a JSON array of records under one key, mutated wholesale.
//!
//! Every mutation reads the full array, changes it in memory and writes it back
//! through the backup protocol. Ids are unique within a collection; new records
//! get `max(id) + 1`. The read-modify-write is only safe because a `Store` has a
//! single writer (`&mut self`).

use super::{StorageBackend, Store};
use crate::error::{HrDeskError, Result};
use crate::model::Record;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

impl<B: StorageBackend> Store<B> {
    /// Next free id in `collection`: `1` when it is empty or absent, otherwise one
    /// more than the largest numeric `id`. Entries without a numeric id are skipped.
    /// Fails with `IdOverflow` once a record holds `u64::MAX`.
    pub fn next_id(&self, collection: &str) -> Result<u64> {
        let records: Vec<Value> = self.load(collection).unwrap_or_default();
        next_id_of(
            collection,
            records.iter().filter_map(|r| r.get("id").and_then(Value::as_u64)),
        )
    }

    /// All records of `collection`; empty when the collection doesn't exist yet.
    pub fn list<T: Record>(&self, collection: &str) -> Result<Vec<T>> {
        match self.try_load(collection) {
            Ok(records) => Ok(records),
            Err(HrDeskError::NotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    pub fn get<T: Record>(&self, collection: &str, id: u64) -> Result<T> {
        self.list::<T>(collection)?
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or(HrDeskError::RecordNotFound(id))
    }

    /// Append `record`. An id of `0` means "assign the next one"; any other id must
    /// not already be taken.
    pub fn insert<T: Record>(&mut self, collection: &str, mut record: T) -> Result<T> {
        let mut records = self.list::<T>(collection)?;

        if record.id() == 0 {
            record.set_id(next_id_of(collection, records.iter().map(|r| r.id()))?);
        } else if records.iter().any(|r| r.id() == record.id()) {
            return Err(HrDeskError::DuplicateId(record.id()));
        }

        records.push(record.clone());
        self.save(collection, &records)?;
        debug!(collection, id = record.id(), "inserted record");
        Ok(record)
    }

    /// Replace the record with the same id.
    pub fn update<T: Record>(&mut self, collection: &str, record: T) -> Result<()> {
        let mut records = self.list::<T>(collection)?;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or(HrDeskError::RecordNotFound(record.id()))?;
        *slot = record;
        self.save(collection, &records)
    }

    pub fn remove_record<T: Record>(&mut self, collection: &str, id: u64) -> Result<T> {
        let mut records = self.list::<T>(collection)?;
        let pos = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(HrDeskError::RecordNotFound(id))?;
        let removed = records.remove(pos);
        self.save(collection, &records)?;
        Ok(removed)
    }

    /// Overwrite `collection` with `records`, refusing duplicate ids.
    pub fn save_collection<T: Record>(&mut self, collection: &str, records: &[T]) -> Result<()> {
        let mut seen = HashSet::new();
        for r in records {
            if !seen.insert(r.id()) {
                return Err(HrDeskError::DuplicateId(r.id()));
            }
        }
        self.save(collection, records)
    }
}

fn next_id_of(collection: &str, ids: impl Iterator<Item = u64>) -> Result<u64> {
    match ids.max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            warn!(collection, "record ids exhausted");
            HrDeskError::IdOverflow(collection.to_string())
        }),
    }
}
