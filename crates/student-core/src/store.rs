//! Data Store
//!
//! Ordered in-memory list of student records. Only backend responses
//! feed it; the dashboard never inserts a record the server has not confirmed.

use crate::models::{StudentId, StudentRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentStore {
    records: Vec<StudentRecord>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order (server list order first)
    pub fn all(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn find(&self, id: StudentId) -> Option<&StudentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the whole list (initial load or reload)
    pub fn replace_all(&mut self, records: Vec<StudentRecord>) {
        self.records = records;
    }

    pub fn append(&mut self, record: StudentRecord) {
        self.records.push(record);
    }

    /// Replace a record in place. Returns false when no record has `id`.
    pub fn replace_by_id(&mut self, id: StudentId, record: StudentRecord) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Remove a record. Returns false when no record has `id`.
    pub fn remove_by_id(&mut self, id: StudentId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }
}
