//! # Record Store
//!
//! [`Library`] owns the in-memory record collection and is the single
//! source of truth for the lifetime of the process. Records keep stable
//! insertion order; nothing here re-sorts.
//!
//! Persistence is deliberately somebody else's job: the API facade loads a
//! `Library` from a [`DataStore`](crate::store::DataStore) at startup and
//! writes it back after each mutation.

use crate::error::{Result, ShelfError};
use crate::model::{Record, RecordDraft};

#[derive(Debug, Default)]
pub struct Library {
    records: Vec<Record>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Admits a new record built from the draft. Callers are expected to
    /// run form validation first; a blank title is still rejected here so
    /// an unvalidated path can never commit one.
    pub fn create(&mut self, draft: &RecordDraft) -> Result<Record> {
        if draft.title.trim().is_empty() {
            return Err(ShelfError::Validation("Title cannot be empty".to_string()));
        }
        let record = Record::new(draft);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Replaces all mutable fields of the matching record and refreshes
    /// `updated_at`. Unknown ids are an error, not a silent no-op.
    pub fn update(&mut self, id: &str, draft: &RecordDraft) -> Result<Record> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ShelfError::RecordNotFound(id.to_string()))?;
        record.apply(draft);
        Ok(record.clone())
    }

    /// Removes the record with the given id. Deleting an absent id is a
    /// no-op; delete stays idempotent.
    pub fn delete(&mut self, id: &str) {
        self.records.retain(|r| r.id != id);
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Bulk replacement, used by bulk delete and the import-merge commit.
    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
